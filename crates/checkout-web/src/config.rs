//! Build-time configuration
//!
//! Values are baked in when the WASM bundle is compiled.

/// Stripe publishable key, if the bundle was built with one
pub fn publishable_key() -> Option<&'static str> {
    option_env!("STRIPE_PUBLISHABLE_KEY").filter(|k| !k.is_empty())
}

/// Checkout endpoint as configured (may be relative)
pub fn checkout_endpoint() -> &'static str {
    match option_env!("CHECKOUT_ENDPOINT") {
        Some(endpoint) if !endpoint.is_empty() => endpoint,
        _ => "/api/checkout",
    }
}

/// Absolute endpoint URL for `origin`
///
/// The WASM HTTP client does not resolve relative URLs.
pub fn resolve_endpoint(origin: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    let origin = origin.trim_end_matches('/');
    let endpoint = endpoint.trim_start_matches('/');
    format!("{origin}/{endpoint}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative() {
        assert_eq!(
            resolve_endpoint("http://localhost:3000/", "/api/checkout"),
            "http://localhost:3000/api/checkout"
        );
        assert_eq!(
            resolve_endpoint("https://shop.test", "api/checkout"),
            "https://shop.test/api/checkout"
        );
    }

    #[test]
    fn test_resolve_absolute() {
        assert_eq!(
            resolve_endpoint("https://shop.test", "https://billing.test/session"),
            "https://billing.test/session"
        );
    }
}
