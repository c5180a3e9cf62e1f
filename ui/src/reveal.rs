//! Adds the reveal class to cards as they scroll into view.

use shop_common::config::RevealConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

/// Owns the observer; dropping it disconnects from every card.
pub struct ScrollReveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl ScrollReveal {
    /// Observe every element matching the configured selectors. Returns `None`
    /// when the page has nothing to reveal.
    pub fn observe(doc: &Document, config: &RevealConfig) -> Result<Option<Self>, JsValue> {
        let targets = dom::query_all(doc, &config.selector())?;
        if targets.is_empty() {
            return Ok(None);
        }

        let class = config.class.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    // one-shot: the class is never taken off again
                    let _ = entry.target().class_list().add_1(&class);
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        init.set_root_margin(&config.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        for el in &targets {
            observer.observe(el);
        }
        tracing::info!("Observing {} cards for reveal", targets.len());

        Ok(Some(Self {
            observer,
            _callback: callback,
        }))
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
