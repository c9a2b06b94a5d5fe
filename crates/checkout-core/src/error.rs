//! Checkout Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Checkout-related errors
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("Backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    /// Response carried neither a session id nor a URL
    #[error("Checkout response had no session id or URL")]
    MissingRedirect,

    /// Only a session id came back and no payment provider is loaded
    #[error("Payment provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Provider or browser refused the redirect
    #[error("Redirect failed: {0}")]
    Redirect(String),

    /// Price identifier not in the catalog
    #[error("Unknown price: {0}")]
    UnknownPrice(String),

    /// Stripe API error
    #[error("Stripe error: {0}")]
    Stripe(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CheckoutError {
    /// Get user-friendly message
    ///
    /// Every failure reads the same to the user; details go to the logs.
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_)
            | Self::Backend { .. }
            | Self::MissingRedirect
            | Self::ProviderUnavailable(_)
            | Self::Redirect(_)
            | Self::UnknownPrice(_)
            | Self::Stripe(_)
            | Self::Json(_) => "Something went wrong starting checkout. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_generic() {
        let json: CheckoutError = serde_json::from_str::<u8>("x").unwrap_err().into();
        let all = [
            CheckoutError::Network("connection reset".into()),
            CheckoutError::Backend {
                status: 500,
                message: "boom".into(),
            },
            CheckoutError::MissingRedirect,
            CheckoutError::ProviderUnavailable("no Stripe.js".into()),
            CheckoutError::Redirect("IntegrationError".into()),
            CheckoutError::UnknownPrice("price_gold".into()),
            CheckoutError::Stripe("card_declined".into()),
            json,
        ];

        let expected = CheckoutError::MissingRedirect.user_message();
        for err in &all {
            assert_eq!(err.user_message(), expected, "{err}");
        }
        assert!(!expected.contains("reset"));
    }

    #[test]
    fn test_display_carries_detail() {
        let err = CheckoutError::Backend {
            status: 502,
            message: "upstream".into(),
        };
        assert_eq!(err.to_string(), "Backend returned 502: upstream");
    }
}
