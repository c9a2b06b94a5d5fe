//! Stripe.js Bindings
//!
//! Only `redirectToCheckout` is used. Card entry happens on Stripe's
//! hosted page, never in this bundle.

use checkout_core::{CheckoutError, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Function, Object, Promise, Reflect};

use crate::api::js_error;
use crate::config;

/// `window.Stripe`, if the script tag loaded
fn stripe_constructor() -> Option<Function> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str("Stripe"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Whether session ids can be handed to Stripe.js
pub fn is_available() -> bool {
    config::publishable_key().is_some() && stripe_constructor().is_some()
}

fn instance() -> Result<JsValue> {
    let key = config::publishable_key()
        .ok_or_else(|| CheckoutError::ProviderUnavailable("no publishable key".into()))?;
    let constructor = stripe_constructor()
        .ok_or_else(|| CheckoutError::ProviderUnavailable("Stripe.js not loaded".into()))?;

    constructor
        .call1(&JsValue::NULL, &JsValue::from_str(key))
        .map_err(js_error)
}

/// Send the browser to the hosted session
///
/// Resolves only if Stripe reports an error; on success the page unloads.
pub async fn redirect_to_checkout(session_id: &str) -> Result<()> {
    let stripe = instance()?;

    let redirect = Reflect::get(&stripe, &JsValue::from_str("redirectToCheckout"))
        .map_err(js_error)?
        .dyn_into::<Function>()
        .map_err(|_| CheckoutError::ProviderUnavailable("redirectToCheckout missing".into()))?;

    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("sessionId"), &JsValue::from_str(session_id))
        .map_err(js_error)?;

    let promise = redirect
        .call1(&stripe, &options)
        .map_err(js_error)?
        .dyn_into::<Promise>()
        .map_err(js_error)?;

    let result = JsFuture::from(promise).await.map_err(js_error)?;

    let error = Reflect::get(&result, &JsValue::from_str("error")).unwrap_or(JsValue::UNDEFINED);
    if error.is_undefined() || error.is_null() {
        return Ok(());
    }

    let message = Reflect::get(&error, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| "redirectToCheckout failed".into());
    Err(CheckoutError::Redirect(message))
}
