//! Pricing Tiers
//!
//! The fixed catalog of subscription tiers shown on the pricing page.

use serde::Serialize;

/// Billing interval
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingInterval {
    Monthly,
}

impl BillingInterval {
    /// Suffix shown after a price ("/month")
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Monthly => "/month",
        }
    }
}

/// A named pricing/feature bundle
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tier {
    /// Stable identifier
    pub id: &'static str,

    /// Display name
    pub name: &'static str,

    /// One-line pitch
    pub description: &'static str,

    /// Price in whole currency units
    pub price: u32,

    /// ISO currency code
    pub currency: &'static str,

    /// Billing interval
    pub interval: BillingInterval,

    /// Highlighted as the recommended choice
    pub popular: bool,

    /// Feature list, in display order
    pub features: &'static [&'static str],

    /// Price identifier sent to the checkout backend
    pub price_id: &'static str,
}

impl Tier {
    /// Amount in minor units (cents)
    pub fn cents(&self) -> i64 {
        i64::from(self.price) * 100
    }

    /// Short price label, e.g. `$29`
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }

    /// Full amount label, e.g. `$29.00`
    pub fn display_amount(&self) -> String {
        format!("${}.00", self.price)
    }
}

/// The catalog, in display order
pub static TIERS: [Tier; 3] = [
    Tier {
        id: "basic",
        name: "Basic",
        description: "Perfect for getting started",
        price: 9,
        currency: "USD",
        interval: BillingInterval::Monthly,
        popular: false,
        features: &[
            "Up to 5 projects",
            "Basic analytics",
            "Email support",
            "1GB storage",
            "Standard templates",
        ],
        price_id: "price_basic_monthly",
    },
    Tier {
        id: "pro",
        name: "Pro",
        description: "Most popular choice for professionals",
        price: 29,
        currency: "USD",
        interval: BillingInterval::Monthly,
        popular: true,
        features: &[
            "Unlimited projects",
            "Advanced analytics",
            "Priority support",
            "10GB storage",
            "Premium templates",
            "API access",
            "Team collaboration",
        ],
        price_id: "price_pro_monthly",
    },
    Tier {
        id: "enterprise",
        name: "Enterprise",
        description: "For large teams and organizations",
        price: 99,
        currency: "USD",
        interval: BillingInterval::Monthly,
        popular: false,
        features: &[
            "Everything in Pro",
            "Custom integrations",
            "Dedicated support",
            "Unlimited storage",
            "White-label solution",
            "Advanced security",
            "SLA guarantee",
            "Custom contracts",
        ],
        price_id: "price_enterprise_monthly",
    },
];

/// All tiers
pub fn all() -> &'static [Tier] {
    &TIERS
}

/// Look up a tier by id
pub fn find(id: &str) -> Option<&'static Tier> {
    TIERS.iter().find(|t| t.id == id)
}

/// Look up a tier by its price identifier
pub fn find_by_price_id(price_id: &str) -> Option<&'static Tier> {
    TIERS.iter().find(|t| t.price_id == price_id)
}
