//! Server Configuration

use std::collections::HashMap;
use std::path::PathBuf;

use checkout_core::tier;

/// Runtime configuration, read from the environment
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,

    /// Directory holding the compiled frontend
    pub static_dir: PathBuf,

    /// Stripe secret key (payments disabled when absent)
    pub stripe_secret_key: Option<String>,

    /// Stripe price ids keyed by tier id, billed instead of inline amounts
    pub price_overrides: HashMap<&'static str, String>,
}

impl ServerConfig {
    /// Read from process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read through an arbitrary lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let price_overrides = tier::all()
            .iter()
            .filter_map(|t| {
                let var = format!("STRIPE_PRICE_{}", t.id.to_uppercase());
                non_empty(&var).map(|price| (t.id, price))
            })
            .collect();

        Self {
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".into()),
            static_dir: non_empty("STATIC_DIR").map_or_else(|| PathBuf::from("static"), PathBuf::from),
            stripe_secret_key: non_empty("STRIPE_SECRET_KEY"),
            price_overrides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert!(config.stripe_secret_key.is_none());
        assert!(config.price_overrides.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("STRIPE_SECRET_KEY", "sk_test_abc"),
            ("STRIPE_PRICE_PRO", "price_1Pro"),
            ("STRIPE_PRICE_BASIC", "  "),
        ]));
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.stripe_secret_key.as_deref(), Some("sk_test_abc"));
        assert_eq!(config.price_overrides.get("pro").map(String::as_str), Some("price_1Pro"));
        assert!(!config.price_overrides.contains_key("basic"));
    }
}
