//! Checkout Page

use checkout_core::{CheckoutState, Notification, ReturnVisit, Tier};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::components::{PaymentPanel, PricingTiers, TrustSignals};
use crate::toast::use_toasts;

/// What a page load does about `?subscription=...`
#[derive(Debug, PartialEq, Eq)]
struct ReturnAction {
    /// Toast to show
    toast: Option<Notification>,

    /// URL to put in the address bar in place of the current one
    replace_url: Option<String>,
}

impl ReturnAction {
    fn from_href(href: &str) -> Self {
        let visit = ReturnVisit::from_href(href);
        let replace_url = visit.needs_cleanup(href).then(|| visit.clean_url.clone());

        Self {
            toast: visit.outcome.map(Notification::for_outcome),
            replace_url,
        }
    }
}

/// Read and clear `?subscription=...` left by the hosted checkout
fn consume_return_visit() -> Option<Notification> {
    let window = web_sys::window()?;
    let href = window.location().href().ok()?;
    let action = ReturnAction::from_href(&href);

    if let (Some(url), Ok(history)) = (action.replace_url.as_deref(), window.history()) {
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(url)) {
            leptos::logging::warn!("Could not clean URL: {:?}", e);
        }
    }

    action.toast
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let toasts = use_toasts();
    let state = RwSignal::new(CheckoutState::new());

    if let Some(notification) = consume_return_visit() {
        toasts.push(notification);
    }

    let selected = Signal::derive(move || state.with(|s| s.selected().map(|p| p.id.clone())));
    let on_select = Callback::new(move |tier: &'static Tier| state.update(|s| s.select(tier)));
    let on_back = Callback::new(move |()| state.update(CheckoutState::back));

    view! {
        <div class="checkout">
            <header class="hero">
                <h1>"Secure Checkout"</h1>
                <p class="tagline">"Pick a plan and complete your purchase on our encrypted payment partner"</p>
            </header>

            <div class="checkout-body">
                <section class="checkout-main">
                    <Show
                        when=move || state.with(CheckoutState::show_payment)
                        fallback=move || view! { <PricingTiers selected=selected on_select=on_select /> }
                    >
                        {move || {
                            state
                                .with(|s| s.selected().cloned())
                                .map(|plan| view! { <PaymentPanel plan=plan on_back=on_back /> })
                        }}
                    </Show>
                </section>

                <TrustSignals />
            </div>
        </div>
    }
}
