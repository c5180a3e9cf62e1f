//! Small DOM helpers and an event listener handle that unregisters on drop.

use shop_common::endpoint::CSRF_FIELD;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlInputElement, Window,
};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// All elements matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = doc.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Set the text of `#id` if the page has it.
pub fn set_text_by_id(doc: &Document, id: &str, text: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// CSRF token from the hidden form field, or empty when the page has none.
pub fn csrf_token(doc: &Document) -> String {
    doc.query_selector(&format!("[name={}]", CSRF_FIELD))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// `[data-item-id="..."]` selector for a cart row.
pub fn item_row_selector(item: impl std::fmt::Display) -> String {
    format!("[data-item-id=\"{}\"]", item)
}

/// Run `handler` on the first `event` only. The browser unregisters the
/// listener and the closure frees itself once it has run.
pub fn listen_once<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnOnce(Event) + 'static,
{
    let callback = Closure::once_into_js(handler);
    let opts = AddEventListenerOptions::new();
    opts.set_once(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.unchecked_ref(),
        &opts,
    )
}

/// A registered DOM event listener. Dropping it removes the listener.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Option<Closure<dyn FnMut(Event)>>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback: Some(callback),
        })
    }

    /// Keep the listener for as long as its target lives.
    pub fn forget(mut self) {
        if let Some(callback) = self.callback.take() {
            callback.forget();
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, callback.as_ref().unchecked_ref());
        }
    }
}
