//! User-facing notifications (toasts)

use std::time::Duration;

use crate::error::CheckoutError;
use crate::query::SubscriptionOutcome;

/// How long a toast stays up
pub const DEFAULT_DURATION: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

impl NotificationKind {
    /// CSS modifier class
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Info => "toast toast-info",
            Self::Error => "toast toast-error",
        }
    }
}

/// A toast
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Toast for a return visit from the hosted checkout
    pub fn for_outcome(outcome: SubscriptionOutcome) -> Self {
        match outcome {
            SubscriptionOutcome::Success => Self::new(
                NotificationKind::Success,
                "Subscription activated!",
                "Welcome aboard. Your plan is now active.",
            ),
            SubscriptionOutcome::Cancel => Self::new(
                NotificationKind::Info,
                "Checkout cancelled",
                "No charge was made. You can pick a plan any time.",
            ),
        }
    }

    /// Generic failure toast
    pub fn checkout_failed() -> Self {
        Self::new(
            NotificationKind::Error,
            "Checkout failed",
            "Something went wrong starting checkout. Please try again.",
        )
    }

    /// Failure toast for a specific error
    pub fn from_error(err: &CheckoutError) -> Self {
        Self::new(NotificationKind::Error, "Checkout failed", err.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_outcome() {
        let toast = Notification::for_outcome(SubscriptionOutcome::Success);
        assert_eq!(toast.kind, NotificationKind::Success);
        assert_eq!(toast.title, "Subscription activated!");
    }

    #[test]
    fn test_cancel_outcome_is_not_an_error() {
        let toast = Notification::for_outcome(SubscriptionOutcome::Cancel);
        assert_eq!(toast.kind, NotificationKind::Info);
    }

    #[test]
    fn test_failure_toast_matches_error_message() {
        let toast = Notification::from_error(&CheckoutError::MissingRedirect);
        assert_eq!(toast, Notification::checkout_failed());
    }
}
