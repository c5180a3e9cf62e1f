//! Header search form: debounced type-ahead hook and empty-query guard.

use std::rc::Rc;

use shop_common::config::StorefrontConfig;
use shop_common::search::{check_submission, wants_lookup, Submission};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::dom::EventListener;
use crate::notify::Notifier;
use crate::timers::Debouncer;

const INPUT_SELECTOR: &str = "input[name=\"q\"]";
const FORM_SELECTOR: &str = "form[action*=\"search\"]";

pub struct SearchGuard {
    _input: EventListener,
    _submit: EventListener,
    debouncer: Rc<Debouncer>,
}

impl SearchGuard {
    /// Attach to the page's search form, if it has one.
    pub fn attach(
        doc: &Document,
        notifier: Notifier,
        config: &StorefrontConfig,
    ) -> Result<Option<Self>, JsValue> {
        let input = doc
            .query_selector(INPUT_SELECTOR)?
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        let form = doc.query_selector(FORM_SELECTOR)?;
        let (Some(input), Some(form)) = (input, form) else {
            return Ok(None);
        };

        let debouncer = Rc::new(Debouncer::new(config.timings.search_debounce_ms));
        let min_chars = config.search.min_query_chars;

        let input_listener = {
            let debouncer = Rc::clone(&debouncer);
            let field = input.clone();
            EventListener::new(&input, "input", move |_| {
                let field = field.clone();
                debouncer.call(move || lookup(&field.value(), min_chars));
            })?
        };

        let alert_ms = config.timings.alert_ms;
        let submit_listener = {
            let field = input.clone();
            EventListener::new(&form, "submit", move |e| {
                if let Submission::Block(notice) = check_submission(&field.value()) {
                    e.prevent_default();
                    if let Err(err) = notifier.show(&notice, alert_ms) {
                        tracing::error!("Failed to show notice: {:?}", err);
                    }
                }
            })?
        };

        Ok(Some(Self {
            _input: input_listener,
            _submit: submit_listener,
            debouncer,
        }))
    }
}

impl Drop for SearchGuard {
    fn drop(&mut self) {
        self.debouncer.cancel();
    }
}

/// Type-ahead hook. There is no suggestion endpoint yet, so it only logs.
fn lookup(query: &str, min_chars: usize) {
    if !wants_lookup(query, min_chars) {
        return;
    }
    tracing::info!("Searching for: {}", query);
}
