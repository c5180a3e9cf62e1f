//! Alert banners at the top of the page container.

use shop_common::types::{Dismissal, Notice};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::dom::{self, EventListener};
use crate::timers;

const CONTAINER_SELECTOR: &str = ".container";

#[derive(Clone)]
pub struct Notifier {
    doc: Document,
}

impl Notifier {
    pub fn new(doc: Document) -> Self {
        Self { doc }
    }

    /// Insert an alert as the container's first child. A zero duration keeps
    /// it until the user closes it.
    pub fn show(&self, notice: &Notice, duration_ms: u32) -> Result<(), JsValue> {
        let Some(container) = self.doc.query_selector(CONTAINER_SELECTOR)? else {
            tracing::warn!("No {} on page, dropping notice", CONTAINER_SELECTOR);
            return Ok(());
        };

        let alert = self.doc.create_element("div")?;
        alert.set_class_name(&notice.severity.alert_classes());
        alert.set_attribute("role", "alert")?;
        alert.append_child(&self.doc.create_text_node(&notice.message))?;

        let close = self.doc.create_element("button")?;
        close.set_attribute("type", "button")?;
        close.set_class_name("btn-close");
        close.set_attribute("data-bs-dismiss", "alert")?;
        close.set_attribute("aria-label", "Close")?;
        alert.append_child(&close)?;

        container.insert_before(&alert, container.first_child().as_ref())?;
        alert.class_list().add_1("fade-in")?;

        let target = alert.clone();
        match Dismissal::for_duration(duration_ms) {
            Dismissal::After { millis } => {
                let close_listener = EventListener::new(&close, "click", move |_| target.remove())?;
                timers::after(millis, move || {
                    drop(close_listener);
                    alert.remove();
                });
            }
            Dismissal::OnClose => dom::listen_once(&close, "click", move |_| target.remove())?,
        }
        Ok(())
    }

    /// Schedule removal of server-rendered alerts that have no close control.
    pub fn dismiss_preexisting(&self, delay_ms: u32) -> Result<usize, JsValue> {
        let mut scheduled = 0;
        for alert in dom::query_all(&self.doc, ".alert")? {
            if alert.query_selector(".btn-close")?.is_some() {
                continue;
            }
            timers::after(delay_ms, move || alert.remove());
            scheduled += 1;
        }
        Ok(scheduled)
    }
}
