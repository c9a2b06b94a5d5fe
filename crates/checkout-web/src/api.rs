//! API Client

use checkout_core::{
    CallbackUrls, CheckoutError, CheckoutRequest, CheckoutResponse, Redirect, Result, Tier,
};
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::{config, stripe_js};

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub(crate) fn js_error(value: JsValue) -> CheckoutError {
    CheckoutError::Redirect(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn location() -> Result<web_sys::Location> {
    web_sys::window()
        .map(|w| w.location())
        .ok_or_else(|| CheckoutError::Redirect("no window".into()))
}

/// Ask the backend for a hosted checkout session
pub async fn create_checkout(endpoint: &str, request: &CheckoutRequest) -> Result<CheckoutResponse> {
    let client = reqwest::Client::new();

    let response = client
        .post(endpoint)
        .json(request)
        .send()
        .await
        .map_err(|e| CheckoutError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| CheckoutError::Network(e.to_string()))?;

    if status.is_success() {
        CheckoutResponse::from_json(&body)
    } else {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map_or_else(|_| "Request failed".to_string(), |b| b.error);
        Err(CheckoutError::Backend {
            status: status.as_u16(),
            message,
        })
    }
}

/// Decide what follows the provider's redirect helper
///
/// `Some(url)` means the helper failed and the direct URL should be used.
fn after_provider_redirect(
    outcome: Result<()>,
    fallback_url: Option<String>,
) -> Result<Option<String>> {
    match (outcome, fallback_url) {
        (Ok(()), _) => Ok(None),
        (Err(e), Some(url)) => {
            leptos::logging::warn!("Stripe.js redirect failed, using direct URL: {}", e);
            Ok(Some(url))
        }
        (Err(e), None) => Err(e),
    }
}

/// Full checkout for `tier`: request a session, then leave the page
pub async fn start_checkout(tier: &'static Tier) -> Result<()> {
    let location = location()?;
    let origin = location.origin().map_err(js_error)?;
    let path = location.pathname().map_err(js_error)?;

    let request = CheckoutRequest::new(tier, CallbackUrls::for_page(&origin, &path));
    let endpoint = config::resolve_endpoint(&origin, config::checkout_endpoint());
    let response = create_checkout(&endpoint, &request).await?;

    match response.into_redirect(stripe_js::is_available())? {
        Redirect::Session {
            session_id,
            fallback_url,
        } => {
            let outcome = stripe_js::redirect_to_checkout(&session_id).await;
            match after_provider_redirect(outcome, fallback_url)? {
                Some(url) => location.set_href(&url).map_err(js_error),
                None => Ok(()),
            }
        }
        Redirect::Url(url) => location.set_href(&url).map_err(js_error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_redirect_succeeds() {
        let next = after_provider_redirect(Ok(()), Some("https://pay.test/cs_1".into()));
        assert_eq!(next.unwrap(), None);
    }

    #[test]
    fn test_provider_failure_uses_fallback_url() {
        let failed = Err(CheckoutError::Redirect("IntegrationError".into()));
        let next = after_provider_redirect(failed, Some("https://pay.test/cs_1".into()));
        assert_eq!(next.unwrap().as_deref(), Some("https://pay.test/cs_1"));
    }

    #[test]
    fn test_provider_failure_without_fallback() {
        let failed = Err(CheckoutError::Redirect("IntegrationError".into()));
        let next = after_provider_redirect(failed, None);
        assert!(matches!(next, Err(CheckoutError::Redirect(_))));
    }
}
