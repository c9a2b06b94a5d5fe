//! Toast Notifications

use checkout_core::{Notification, DEFAULT_DURATION};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Handle to the page's toast queue
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Show a notification; it dismisses itself after a while
    pub fn push(self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.items.update(|items| items.push(Toast { id, notification }));
        set_timeout(move || self.dismiss(id), DEFAULT_DURATION);
    }

    pub fn dismiss(self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Renders the queue
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let n = toast.notification;
                    view! {
                        <div class=n.kind.class() on:click=move |_| toasts.dismiss(id)>
                            <strong class="toast-title">{n.title}</strong>
                            <p class="toast-description">{n.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
