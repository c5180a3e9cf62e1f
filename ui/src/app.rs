//! The storefront controller: owns every listener, observer, timer and
//! stylesheet it creates, and releases them all when stopped.

use std::cell::RefCell;
use std::rc::Rc;

use shop_common::config::{StorefrontConfig, CONFIG_ELEMENT_ID};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::api::FetchTransport;
use crate::cart::{CartBindings, CartContext};
use crate::notify::Notifier;
use crate::page::DomPage;
use crate::reveal::ScrollReveal;
use crate::search::SearchGuard;
use crate::styles::Stylesheet;

pub struct Storefront {
    cart: Rc<CartContext>,
    _stylesheet: Stylesheet,
    _cart_bindings: CartBindings,
    _search: Option<SearchGuard>,
    _reveal: Option<ScrollReveal>,
}

impl Storefront {
    pub fn start(doc: &Document, config: StorefrontConfig) -> Result<Self, JsValue> {
        let config = Rc::new(config);
        let notifier = Notifier::new(doc.clone());

        let stylesheet = Stylesheet::inject(doc)?;

        let cart = Rc::new(CartContext {
            transport: FetchTransport::new(config.endpoints.base.clone()),
            page: DomPage::new(doc.clone(), notifier.clone(), Rc::clone(&config)),
            config: Rc::clone(&config),
        });
        let cart_bindings = CartBindings::bind(doc, &cart)?;

        let search = SearchGuard::attach(doc, notifier.clone(), &config)?;
        if search.is_none() {
            tracing::debug!("No search form on this page");
        }

        let dismissed = notifier.dismiss_preexisting(config.timings.preexisting_alert_ms)?;
        if dismissed > 0 {
            tracing::debug!("Auto-dismissing {} server alerts", dismissed);
        }

        let reveal = ScrollReveal::observe(doc, &config.reveal)?;

        Ok(Self {
            cart,
            _stylesheet: stylesheet,
            _cart_bindings: cart_bindings,
            _search: search,
            _reveal: reveal,
        })
    }

    pub fn cart(&self) -> Rc<CartContext> {
        Rc::clone(&self.cart)
    }
}

thread_local! {
    static STOREFRONT: RefCell<Option<Storefront>> = const { RefCell::new(None) };
}

/// Start the controller unless it is already running.
pub fn start(doc: &Document) -> Result<(), JsValue> {
    if is_running() {
        return Ok(());
    }
    let storefront = Storefront::start(doc, load_config(doc))?;
    STOREFRONT.with(|cell| *cell.borrow_mut() = Some(storefront));
    tracing::info!("Storefront started");
    Ok(())
}

/// Drop the running controller, unbinding everything it set up.
pub fn stop() {
    let previous = STOREFRONT.with(|cell| cell.borrow_mut().take());
    if previous.is_some() {
        drop(previous);
        tracing::info!("Storefront stopped");
    }
}

pub fn is_running() -> bool {
    STOREFRONT.with(|cell| cell.borrow().is_some())
}

/// Cart context of the running controller.
pub fn cart() -> Option<Rc<CartContext>> {
    STOREFRONT.with(|cell| cell.borrow().as_ref().map(Storefront::cart))
}

/// Read overrides from the page's JSON config block. Falls back to defaults.
fn load_config(doc: &Document) -> StorefrontConfig {
    let Some(json) = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return StorefrontConfig::default();
    };
    match StorefrontConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{}, using defaults", e);
            StorefrontConfig::default()
        }
    }
}
