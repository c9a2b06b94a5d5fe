//! Stripe Checkout Integration
//!
//! Requests hosted Checkout sessions in subscription mode. Card entry,
//! authorization and everything after the redirect stay on Stripe's side.

use async_trait::async_trait;
use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionMode, Client,
    CreateCheckoutSession, CreateCheckoutSessionLineItems,
    CreateCheckoutSessionLineItemsPriceData,
    CreateCheckoutSessionLineItemsPriceDataProductData,
    CreateCheckoutSessionLineItemsPriceDataRecurring,
    CreateCheckoutSessionLineItemsPriceDataRecurringInterval,
    Currency,
};

use crate::error::{CheckoutError, Result};
use crate::redirect::{CheckoutRequest, CheckoutResponse};
use crate::tier::{BillingInterval, Tier};

/// A hosted session the browser can be sent to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostedSession {
    /// Stripe session ID
    pub id: String,

    /// URL of the hosted page
    pub url: String,
}

impl From<HostedSession> for CheckoutResponse {
    fn from(session: HostedSession) -> Self {
        Self {
            session_id: Some(session.id),
            url: Some(session.url),
        }
    }
}

/// Anything that can open a hosted checkout session
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Create a session for `tier`
    ///
    /// `price_override` is a provider-side price id to bill instead of the
    /// tier's inline amount.
    async fn create_session(
        &self,
        tier: &Tier,
        request: &CheckoutRequest,
        price_override: Option<&str>,
    ) -> Result<HostedSession>;
}

/// Stripe client wrapper
pub struct StripeClient {
    client: Client,
}

impl StripeClient {
    /// Create a new Stripe client
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    fn line_item(tier: &Tier, price_override: Option<&str>) -> CreateCheckoutSessionLineItems {
        if let Some(price) = price_override {
            return CreateCheckoutSessionLineItems {
                quantity: Some(1),
                price: Some(price.to_string()),
                ..Default::default()
            };
        }

        CreateCheckoutSessionLineItems {
            quantity: Some(1),
            price_data: Some(CreateCheckoutSessionLineItemsPriceData {
                currency: Currency::USD,
                unit_amount: Some(tier.cents()),
                product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                    name: tier.name.to_string(),
                    description: Some(tier.description.to_string()),
                    ..Default::default()
                }),
                recurring: Some(CreateCheckoutSessionLineItemsPriceDataRecurring {
                    interval: match tier.interval {
                        BillingInterval::Monthly => CreateCheckoutSessionLineItemsPriceDataRecurringInterval::Month,
                    },
                    interval_count: Some(1),
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

#[async_trait]
impl SessionProvider for StripeClient {
    async fn create_session(
        &self,
        tier: &Tier,
        request: &CheckoutRequest,
        price_override: Option<&str>,
    ) -> Result<HostedSession> {
        let mut params = CreateCheckoutSession::new();
        params.success_url = Some(&request.success_url);
        params.cancel_url = Some(&request.cancel_url);
        params.mode = Some(CheckoutSessionMode::Subscription);

        let mut metadata = std::collections::HashMap::new();
        metadata.insert("tier".to_string(), tier.id.to_string());
        metadata.insert("price_id".to_string(), tier.price_id.to_string());
        params.metadata = Some(metadata);

        params.line_items = Some(vec![Self::line_item(tier, price_override)]);

        let session = StripeCheckoutSession::create(&self.client, params)
            .await
            .map_err(|e| CheckoutError::Stripe(e.to_string()))?;

        let url = session.url.ok_or_else(|| {
            CheckoutError::Stripe("No checkout URL returned".into())
        })?;

        tracing::info!(session_id = %session.id, tier = tier.id, "Created checkout session");

        Ok(HostedSession {
            id: session.id.to_string(),
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier;

    #[test]
    fn test_inline_line_item() {
        let item = StripeClient::line_item(tier::find("pro").unwrap(), None);
        let price = item.price_data.unwrap();
        assert_eq!(price.unit_amount, Some(2900));
        assert!(item.price.is_none());
    }

    #[test]
    fn test_override_line_item() {
        let item = StripeClient::line_item(tier::find("pro").unwrap(), Some("price_123"));
        assert_eq!(item.price.as_deref(), Some("price_123"));
        assert!(item.price_data.is_none());
    }

    #[test]
    fn test_session_into_response() {
        let resp: CheckoutResponse = HostedSession {
            id: "cs_test".into(),
            url: "https://checkout.stripe.com/c/cs_test".into(),
        }
        .into();
        assert_eq!(resp.session_id.as_deref(), Some("cs_test"));
    }
}
