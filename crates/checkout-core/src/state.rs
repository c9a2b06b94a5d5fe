//! Checkout Page State
//!
//! The two in-page modes (plan list, payment panel) and the current
//! selection.

use crate::tier::Tier;

/// The plan the user picked
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedPlan {
    pub id: String,
    pub name: String,
    pub price: u32,
}

impl SelectedPlan {
    /// Amount label, e.g. `$29.00`
    pub fn display_amount(&self) -> String {
        format!("${}.00", self.price)
    }
}

impl From<&Tier> for SelectedPlan {
    fn from(tier: &Tier) -> Self {
        Self {
            id: tier.id.to_string(),
            name: tier.name.to_string(),
            price: tier.price,
        }
    }
}

/// Which child the page renders
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Plans,
    Payment,
}

/// Page-level state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckoutState {
    selected: Option<SelectedPlan>,
    view: View,
}

impl CheckoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection and open the payment panel
    pub fn select(&mut self, tier: &Tier) {
        tracing::debug!(tier = tier.id, "Tier selected");
        self.selected = Some(SelectedPlan::from(tier));
        self.view = View::Payment;
    }

    /// Back to the plan list, keeping the selection highlighted
    pub fn back(&mut self) {
        self.view = View::Plans;
    }

    pub fn selected(&self) -> Option<&SelectedPlan> {
        self.selected.as_ref()
    }

    pub const fn view(&self) -> View {
        self.view
    }

    /// Whether the payment panel is shown
    pub fn show_payment(&self) -> bool {
        self.view == View::Payment && self.selected.is_some()
    }

    pub fn is_selected(&self, tier_id: &str) -> bool {
        self.selected.as_ref().is_some_and(|p| p.id == tier_id)
    }
}
