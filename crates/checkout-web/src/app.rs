//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::CheckoutPage;
use crate::toast::{provide_toasts, Toaster};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_toasts();

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=CheckoutPage />
                    <Route path=path!("/checkout") view=CheckoutPage />
                </Routes>
            </main>
            <Toaster />
        </Router>
    }
}
