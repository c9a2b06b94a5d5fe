//! # checkout-core
//!
//! Target-independent logic for the plan-checkout flow.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌──────────────────────┐
//! │  Pricing    │────▶│  Stripe Hosted  │────▶│  Pricing             │
//! │  (select)   │     │  Checkout Page  │     │  ?subscription=...   │
//! └─────────────┘     └─────────────────┘     └──────────────────────┘
//! ```
//!
//! The browser picks a [`Tier`], posts a [`CheckoutRequest`] carrying the
//! tier's price id and two [`CallbackUrls`], and follows the resulting
//! [`Redirect`]. On the way back [`ReturnVisit`] reads the outcome and
//! produces the cleaned URL.
//!
//! Everything here compiles for `wasm32-unknown-unknown`. The `stripe`
//! feature adds [`StripeClient`] for the server side.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use checkout_core::{tier, CallbackUrls, CheckoutRequest, CheckoutState};
//!
//! let mut state = CheckoutState::new();
//! let pro = tier::find("pro").unwrap();
//! state.select(pro);
//!
//! let request = CheckoutRequest::new(pro, CallbackUrls::for_page("https://shop.test", "/"));
//! ```

pub mod tier;
mod state;
mod redirect;
mod query;
mod notify;
mod error;
#[cfg(feature = "stripe")]
mod hosted;

pub use tier::{BillingInterval, Tier};
pub use state::{CheckoutState, SelectedPlan, View};
pub use redirect::{CallbackUrls, CheckoutRequest, CheckoutResponse, Redirect};
pub use query::{ReturnVisit, SubscriptionOutcome, SUBSCRIPTION_PARAM, strip_param};
pub use notify::{Notification, NotificationKind, DEFAULT_DURATION};
pub use error::{CheckoutError, Result};
#[cfg(feature = "stripe")]
pub use hosted::{HostedSession, SessionProvider, StripeClient};
