//! Cart controls: add-to-cart buttons and the cart page's quantity inputs and
//! remove buttons.

use std::rc::Rc;

use shop_common::config::StorefrontConfig;
use shop_common::endpoint::{ItemId, ProductId};
use shop_common::flow::{self, Outcome};
use shop_common::quantity::parse_quantity;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::api::FetchTransport;
use crate::dom::{self, EventListener};
use crate::page::{ButtonControl, ButtonFlasher, DomPage};

/// Everything a cart flow needs, shared by all bound controls.
pub struct CartContext {
    pub transport: FetchTransport,
    pub page: DomPage,
    pub config: Rc<StorefrontConfig>,
}

impl CartContext {
    pub fn update_quantity(self: &Rc<Self>, item: ItemId, quantity: i64) {
        let ctx = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome =
                flow::update_quantity(&ctx.transport, &ctx.page, &ctx.config, item, quantity).await;
            log_outcome("update", item, &outcome);
        });
    }

    pub fn remove_item(self: &Rc<Self>, item: ItemId) {
        let ctx = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = flow::remove_item(&ctx.transport, &ctx.page, &ctx.config, item).await;
            log_outcome("remove", item, &outcome);
        });
    }

    fn add_to_cart(
        self: &Rc<Self>,
        product: ProductId,
        button: Element,
        flasher: Rc<ButtonFlasher>,
    ) {
        let ctx = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            let (outcome, flash) =
                flow::add_to_cart(&ctx.transport, &ctx.page, product, ButtonControl(button)).await;
            flasher.flash(flash, ctx.config.timings.button_flash_ms);
            log_outcome("add", product, &outcome);
        });
    }
}

fn log_outcome(action: &str, id: impl std::fmt::Display, outcome: &Outcome) {
    match outcome {
        Outcome::Applied => tracing::debug!("cart {} {} applied", action, id),
        Outcome::Declined => tracing::debug!("cart {} {} declined", action, id),
        Outcome::Failed(_) => {}
    }
}

/// Listeners bound to cart controls. Dropping them unbinds the controls.
pub struct CartBindings {
    listeners: Vec<EventListener>,
}

impl CartBindings {
    pub fn bind(doc: &Document, ctx: &Rc<CartContext>) -> Result<Self, JsValue> {
        let mut listeners = Vec::new();
        bind_add_buttons(doc, ctx, &mut listeners)?;
        bind_cart_rows(doc, ctx, &mut listeners)?;
        tracing::info!("Bound {} cart controls", listeners.len());
        Ok(Self { listeners })
    }
}

fn bind_add_buttons(
    doc: &Document,
    ctx: &Rc<CartContext>,
    listeners: &mut Vec<EventListener>,
) -> Result<(), JsValue> {
    for button in dom::query_all(doc, ".add-to-cart")? {
        let ctx = Rc::clone(ctx);
        let target = button.clone();
        let flasher = ButtonFlasher::new(button.clone());
        listeners.push(EventListener::new(&button, "click", move |e| {
            e.prevent_default();
            let Some(product) = data_id::<ProductId>(&target, "data-product-id") else {
                tracing::warn!("Add-to-cart control without a valid data-product-id");
                return;
            };
            ctx.add_to_cart(product, target.clone(), Rc::clone(&flasher));
        })?);
    }
    Ok(())
}

fn bind_cart_rows(
    doc: &Document,
    ctx: &Rc<CartContext>,
    listeners: &mut Vec<EventListener>,
) -> Result<(), JsValue> {
    for input in dom::query_all(doc, "[data-item-id] .quantity-input")? {
        let Some(item) = row_item(&input) else {
            continue;
        };
        let Ok(field) = input.clone().dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let ctx = Rc::clone(ctx);
        listeners.push(EventListener::new(&input, "change", move |_| {
            match parse_quantity(&field.value()) {
                Some(quantity) => ctx.update_quantity(item, quantity),
                None => tracing::debug!("Ignoring unparseable quantity for item {}", item),
            }
        })?);
    }

    for button in dom::query_all(doc, "[data-item-id] .remove-item")? {
        let Some(item) = row_item(&button) else {
            continue;
        };
        let ctx = Rc::clone(ctx);
        listeners.push(EventListener::new(&button, "click", move |e| {
            e.prevent_default();
            ctx.remove_item(item);
        })?);
    }
    Ok(())
}

fn data_id<T: std::str::FromStr>(el: &Element, attr: &str) -> Option<T> {
    el.get_attribute(attr)?.parse().ok()
}

/// Item id of the cart row enclosing `el`.
fn row_item(el: &Element) -> Option<ItemId> {
    let row = el.closest("[data-item-id]").ok().flatten()?;
    let item = data_id(&row, "data-item-id");
    if item.is_none() {
        tracing::warn!("Cart row with an invalid data-item-id");
    }
    item
}

/// Read an id passed from inline template handlers as a number or a string.
pub fn js_id(value: &JsValue) -> Option<ItemId> {
    if let Some(n) = value.as_f64() {
        return (n.is_finite() && n >= 0.0 && n.fract() == 0.0).then(|| ItemId(n as u64));
    }
    value.as_string()?.parse().ok()
}

/// Read a quantity passed from inline template handlers.
pub fn js_quantity(value: &JsValue) -> Option<i64> {
    if let Some(n) = value.as_f64() {
        return n.is_finite().then(|| n.trunc() as i64);
    }
    parse_quantity(&value.as_string()?)
}
