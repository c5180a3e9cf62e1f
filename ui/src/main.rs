//! Terko Shop storefront client.
//!
//! Enhances the server-rendered shop pages: add-to-cart buttons, cart quantity
//! and removal controls, alerts, scroll reveal and the search form guard.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::PageTransitionEvent;

mod api;
mod app;
mod cart;
mod dom;
mod notify;
mod page;
mod reveal;
mod search;
mod styles;
mod timers;

use dom::EventListener;

fn main() {
    console_error_panic_hook::set_once();
    dioxus_logger::initialize_default();

    if let Err(e) = boot() {
        tracing::error!("Storefront failed to start: {:?}", e);
    }
}

fn boot() -> Result<(), JsValue> {
    let window = dom::window()?;
    let doc = dom::document()?;

    if doc.ready_state() == "loading" {
        let ready_doc = doc.clone();
        dom::listen_once(&doc, "DOMContentLoaded", move |_| start_logged(&ready_doc))?;
    } else {
        start_logged(&doc);
    }

    EventListener::new(&window, "pagehide", |_| app::stop())?.forget();

    // pages restored from the back/forward cache were stopped on pagehide
    let shown_doc = doc.clone();
    EventListener::new(&window, "pageshow", move |e| {
        let persisted = e
            .dyn_ref::<PageTransitionEvent>()
            .is_some_and(|e| e.persisted());
        if persisted {
            start_logged(&shown_doc);
        }
    })?
    .forget();

    Ok(())
}

fn start_logged(doc: &web_sys::Document) {
    if let Err(e) = app::start(doc) {
        tracing::error!("Storefront failed to start: {:?}", e);
    }
}

/// `updateCartItemQuantity(itemId, quantity)` for inline template handlers.
#[wasm_bindgen(js_name = updateCartItemQuantity)]
pub fn update_cart_item_quantity(item_id: JsValue, quantity: JsValue) {
    let (Some(item), Some(quantity)) = (cart::js_id(&item_id), cart::js_quantity(&quantity)) else {
        tracing::warn!(
            "updateCartItemQuantity called with {:?}, {:?}",
            item_id,
            quantity
        );
        return;
    };
    match app::cart() {
        Some(ctx) => ctx.update_quantity(item, quantity),
        None => tracing::warn!("Storefront not running, ignoring quantity update"),
    }
}

/// `removeCartItem(itemId)` for inline template handlers.
#[wasm_bindgen(js_name = removeCartItem)]
pub fn remove_cart_item(item_id: JsValue) {
    let Some(item) = cart::js_id(&item_id) else {
        tracing::warn!("removeCartItem called with {:?}", item_id);
        return;
    };
    match app::cart() {
        Some(ctx) => ctx.remove_item(item),
        None => tracing::warn!("Storefront not running, ignoring removal"),
    }
}
