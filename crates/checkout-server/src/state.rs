//! Application State

use std::collections::HashMap;
use std::sync::Arc;

use checkout_core::SessionProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Hosted-session provider (None if Stripe is not configured)
    pub sessions: Option<Arc<dyn SessionProvider>>,

    /// Provider price ids keyed by tier id
    pub price_overrides: Arc<HashMap<&'static str, String>>,
}

impl AppState {
    pub fn new(
        sessions: Option<Arc<dyn SessionProvider>>,
        price_overrides: HashMap<&'static str, String>,
    ) -> Self {
        Self {
            sessions,
            price_overrides: Arc::new(price_overrides),
        }
    }

    pub fn price_override(&self, tier_id: &str) -> Option<&str> {
        self.price_overrides.get(tier_id).map(String::as_str)
    }
}
