//! UI Components

use checkout_core::{tier, Notification, SelectedPlan, Tier};
use leptos::prelude::*;

use crate::api;
use crate::toast::use_toasts;

/// Grid of tier cards
#[component]
pub fn PricingTiers(
    #[prop(into)] selected: Signal<Option<String>>,
    on_select: Callback<&'static Tier>,
) -> impl IntoView {
    view! {
        <div class="plans">
            {tier::all()
                .iter()
                .map(|tier| view! { <TierCard tier=tier selected=selected on_select=on_select /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn TierCard(
    tier: &'static Tier,
    selected: Signal<Option<String>>,
    on_select: Callback<&'static Tier>,
) -> impl IntoView {
    let is_selected = move || selected.with(|s| s.as_deref() == Some(tier.id));

    let card_class = move || {
        let mut class = String::from("plan");
        if tier.popular {
            class.push_str(" featured");
        }
        if is_selected() {
            class.push_str(" selected");
        }
        class
    };

    let button_class = move || {
        if is_selected() || tier.popular { "btn btn-primary" } else { "btn" }
    };

    view! {
        <div class=card_class on:click=move |_| on_select.run(tier)>
            {tier.popular.then(|| view! { <span class="badge">"Most Popular"</span> })}
            <h2>{tier.name}</h2>
            <p class="description">{tier.description}</p>
            <div class="price">
                {tier.display_price()}
                <span>{tier.interval.suffix()}</span>
            </div>
            <ul>
                {tier.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
            </ul>
            <button
                class=button_class
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_select.run(tier);
                }
            >
                {move || if is_selected() { "Selected" } else { "Choose Plan" }}
            </button>
        </div>
    }
}

/// Summary of the selected plan and the button that leaves for checkout
#[component]
pub fn PaymentPanel(plan: SelectedPlan, on_back: Callback<()>) -> impl IntoView {
    let toasts = use_toasts();
    let (loading, set_loading) = signal(false);

    let plan_id = plan.id.clone();
    let subscribe = move |_| {
        if loading.get() {
            return;
        }

        let Some(tier) = tier::find(&plan_id) else {
            toasts.push(Notification::checkout_failed());
            return;
        };

        set_loading.set(true);
        leptos::task::spawn_local(async move {
            // On success the browser is already leaving
            if let Err(e) = api::start_checkout(tier).await {
                leptos::logging::error!("Checkout failed: {}", e);
                toasts.push(Notification::from_error(&e));
                set_loading.set(false);
            }
        });
    };

    let amount = plan.display_amount();
    let pay_label = format!("Subscribe for {amount}/month");

    view! {
        <div class="payment-panel">
            <button class="link back" on:click=move |_| on_back.run(()) disabled=move || loading.get()>
                "← Back to plans"
            </button>

            <h2>"Secure Payment"</h2>
            <p class="subtitle">"You'll finish on Stripe's secure checkout page"</p>

            <div class="summary">
                <div class="row">
                    <span class="plan-name">{plan.name}" plan"</span>
                    <span class="total">{amount}</span>
                </div>
                <div class="interval">"Billed monthly, cancel any time"</div>
            </div>

            <button class="btn btn-primary" on:click=subscribe disabled=move || loading.get()>
                {move || if loading.get() { "Redirecting...".to_string() } else { pay_label.clone() }}
            </button>

            <p class="fine-print">"By subscribing, you agree to our terms of service"</p>
        </div>
    }
}

/// Static reassurance copy shown beside the plans
#[component]
pub fn TrustSignals() -> impl IntoView {
    let reasons = [
        ("🛡️ Bank-Level Security", "Your payment information is protected with industry-standard encryption"),
        ("🔒 PCI Compliant", "Card details are entered on Stripe's hosted page and never touch our servers"),
        ("💳 Multiple Payment Methods", "All major credit cards and digital wallets are accepted"),
    ];

    view! {
        <section class="trust">
            <h2>"Why choose our secure payment?"</h2>
            {reasons
                .into_iter()
                .map(|(title, text)| view! {
                    <div class="feature">
                        <h3>{title}</h3>
                        <p>{text}</p>
                    </div>
                })
                .collect_view()}
            <div class="badges">
                <span>"SSL Secured"</span>
                <span>"256-bit Encryption"</span>
                <span>"PCI DSS Compliant"</span>
            </div>
        </section>
    }
}
