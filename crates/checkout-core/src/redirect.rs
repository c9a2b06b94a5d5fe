//! Checkout Redirect
//!
//! Builds the request sent to the checkout backend and decides where the
//! browser goes with the answer.

use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, Result};
use crate::query::{SUBSCRIPTION_PARAM, SubscriptionOutcome};
use crate::tier::Tier;

/// Where the hosted checkout sends the browser back to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackUrls {
    pub success_url: String,
    pub cancel_url: String,
}

impl CallbackUrls {
    /// Callback URLs pointing back at `path` on `origin`
    pub fn for_page(origin: &str, path: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };
        let sep = if path.starts_with('/') { "" } else { "/" };

        let url = |outcome: SubscriptionOutcome| {
            format!("{origin}{sep}{path}?{SUBSCRIPTION_PARAM}={}", outcome.as_str())
        };

        Self {
            success_url: url(SubscriptionOutcome::Success),
            cancel_url: url(SubscriptionOutcome::Cancel),
        }
    }
}

/// Body posted to the checkout endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Price identifier of the chosen tier
    pub price_id: String,

    /// URL to redirect after successful payment
    pub success_url: String,

    /// URL to redirect if checkout is cancelled
    pub cancel_url: String,
}

impl CheckoutRequest {
    pub fn new(tier: &Tier, urls: CallbackUrls) -> Self {
        Self {
            price_id: tier.price_id.to_string(),
            success_url: urls.success_url,
            cancel_url: urls.cancel_url,
        }
    }
}

/// Backend reply
///
/// Backends disagree on naming, so the common spellings are all accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawCheckoutResponse")]
pub struct CheckoutResponse {
    /// Hosted session identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Direct URL of the hosted page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Every spelling on the wire, one field each
///
/// Some backends send the same value under two names, which a single field
/// with aliases rejects as a duplicate.
#[derive(Deserialize)]
struct RawCheckoutResponse {
    #[serde(default, rename = "sessionId")]
    session_id_camel: Option<String>,
    #[serde(default)]
    session_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    checkout_url: Option<String>,
}

fn first_present(candidates: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

impl From<RawCheckoutResponse> for CheckoutResponse {
    fn from(raw: RawCheckoutResponse) -> Self {
        Self {
            session_id: first_present([raw.session_id_camel, raw.session_id, raw.id]),
            url: first_present([raw.url, raw.checkout_url]),
        }
    }
}

/// Where to send the browser
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Redirect {
    /// Hand the session id to the provider's redirect helper, keeping the
    /// direct URL for when the helper fails
    Session {
        session_id: String,
        fallback_url: Option<String>,
    },

    /// Navigate straight to the URL
    Url(String),
}

impl CheckoutResponse {
    /// Decode a raw response body
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Pick the redirect target
    ///
    /// With the provider script loaded the session id wins; otherwise the
    /// direct URL is used.
    pub fn into_redirect(self, has_provider: bool) -> Result<Redirect> {
        let session_id = self.session_id.filter(|s| !s.is_empty());
        let url = self.url.filter(|u| !u.is_empty());

        match (session_id, url) {
            (Some(session_id), fallback_url) if has_provider => Ok(Redirect::Session {
                session_id,
                fallback_url,
            }),
            (_, Some(url)) => Ok(Redirect::Url(url)),
            (Some(id), None) => Err(CheckoutError::ProviderUnavailable(format!(
                "got session {id} but no provider to redirect with"
            ))),
            (None, None) => Err(CheckoutError::MissingRedirect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier;

    #[test]
    fn test_callback_urls() {
        let urls = CallbackUrls::for_page("https://shop.test/", "/checkout");
        assert_eq!(urls.success_url, "https://shop.test/checkout?subscription=success");
        assert_eq!(urls.cancel_url, "https://shop.test/checkout?subscription=cancel");
    }

    #[test]
    fn test_callback_urls_root_path() {
        let urls = CallbackUrls::for_page("http://localhost:3000", "");
        assert_eq!(urls.success_url, "http://localhost:3000/?subscription=success");

        let urls = CallbackUrls::for_page("http://localhost:3000", "pricing");
        assert_eq!(urls.cancel_url, "http://localhost:3000/pricing?subscription=cancel");
    }

    #[test]
    fn test_request_wire_format() {
        let tier = tier::find("pro").unwrap();
        let req = CheckoutRequest::new(tier, CallbackUrls::for_page("https://shop.test", "/"));
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["priceId"], "price_pro_monthly");
        assert_eq!(json["successUrl"], "https://shop.test/?subscription=success");
        assert_eq!(json["cancelUrl"], "https://shop.test/?subscription=cancel");
    }

    #[test]
    fn test_response_aliases() {
        let a = CheckoutResponse::from_json(r#"{"sessionId":"cs_1"}"#).unwrap();
        let b = CheckoutResponse::from_json(r#"{"session_id":"cs_1"}"#).unwrap();
        let c = CheckoutResponse::from_json(r#"{"id":"cs_1"}"#).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);

        let d = CheckoutResponse::from_json(r#"{"checkout_url":"https://pay.test/x"}"#).unwrap();
        assert_eq!(d.url.as_deref(), Some("https://pay.test/x"));
    }

    #[test]
    fn test_response_duplicate_spellings() {
        let resp = CheckoutResponse::from_json(
            r#"{"id":"cs_1","sessionId":"cs_1","url":"https://pay.test/x","checkout_url":"https://pay.test/x"}"#,
        )
        .unwrap();
        assert_eq!(resp.session_id.as_deref(), Some("cs_1"));
        assert_eq!(resp.url.as_deref(), Some("https://pay.test/x"));
    }

    #[test]
    fn test_response_prefers_camel_case() {
        let resp =
            CheckoutResponse::from_json(r#"{"id":"","session_id":"cs_snake","sessionId":"cs_camel"}"#)
                .unwrap();
        assert_eq!(resp.session_id.as_deref(), Some("cs_camel"));

        let resp = CheckoutResponse::from_json(r#"{"id":"","session_id":"cs_snake"}"#).unwrap();
        assert_eq!(resp.session_id.as_deref(), Some("cs_snake"));
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let resp = CheckoutResponse {
            session_id: Some("cs_1".into()),
            url: None,
        };
        assert_eq!(serde_json::to_string(&resp).unwrap(), r#"{"sessionId":"cs_1"}"#);
    }

    #[test]
    fn test_session_preferred_with_provider() {
        let resp = CheckoutResponse {
            session_id: Some("cs_1".into()),
            url: Some("https://pay.test/cs_1".into()),
        };
        assert_eq!(
            resp.clone().into_redirect(true).unwrap(),
            Redirect::Session {
                session_id: "cs_1".into(),
                fallback_url: Some("https://pay.test/cs_1".into()),
            }
        );
        assert_eq!(
            resp.into_redirect(false).unwrap(),
            Redirect::Url("https://pay.test/cs_1".into())
        );
    }

    #[test]
    fn test_session_without_fallback_url() {
        let resp = CheckoutResponse {
            session_id: Some("cs_1".into()),
            url: Some(String::new()),
        };
        assert_eq!(
            resp.into_redirect(true).unwrap(),
            Redirect::Session {
                session_id: "cs_1".into(),
                fallback_url: None,
            }
        );
    }

    #[test]
    fn test_session_without_provider_fails() {
        let resp = CheckoutResponse {
            session_id: Some("cs_1".into()),
            url: None,
        };
        assert!(matches!(
            resp.into_redirect(false),
            Err(CheckoutError::ProviderUnavailable(_))
        ));
    }

    #[test]
    fn test_empty_response_fails() {
        let resp = CheckoutResponse::from_json(r#"{"url":""}"#).unwrap();
        assert!(matches!(resp.into_redirect(true), Err(CheckoutError::MissingRedirect)));
        assert!(CheckoutResponse::from_json("not json").is_err());
    }
}
