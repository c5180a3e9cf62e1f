//! The cart page as seen by the cart flows.

use std::cell::RefCell;
use std::rc::Rc;

use shop_common::button::{Control, Flash, FlashMemory};
use shop_common::config::StorefrontConfig;
use shop_common::flow::{CartPage, PageUpdate};
use shop_common::types::Notice;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom;
use crate::notify::Notifier;
use crate::timers::{self, Timeout};

const CART_COUNT_ID: &str = "cart-count";
const TOTAL_ITEMS_ID: &str = "total-items";
const SUBTOTAL_ID: &str = "subtotal";
const TOTAL_PRICE_ID: &str = "total-price";
const BOUNCE_CLASSES: [&str; 2] = ["animate__animated", "animate__bounce"];

pub struct DomPage {
    doc: Document,
    notifier: Notifier,
    config: Rc<StorefrontConfig>,
    /// Pending removal of the counter bounce; replaced on every update.
    bounce: RefCell<Option<Timeout>>,
}

impl DomPage {
    pub fn new(doc: Document, notifier: Notifier, config: Rc<StorefrontConfig>) -> Self {
        Self {
            doc,
            notifier,
            config,
            bounce: RefCell::new(None),
        }
    }

    fn try_apply(&self, update: PageUpdate) -> Result<(), JsValue> {
        match update {
            PageUpdate::CartCount(count) => self.update_cart_count(count)?,
            PageUpdate::TotalItems(count) => {
                dom::set_text_by_id(&self.doc, TOTAL_ITEMS_ID, &count.to_string())
            }
            PageUpdate::CartPrice(text) => {
                dom::set_text_by_id(&self.doc, SUBTOTAL_ID, &text);
                dom::set_text_by_id(&self.doc, TOTAL_PRICE_ID, &text);
            }
            PageUpdate::ItemTotal { item, text } => {
                let selector = format!("{} .item-total", dom::item_row_selector(item));
                match self.doc.query_selector(&selector)? {
                    Some(el) => el.set_text_content(Some(&text)),
                    None => tracing::warn!("No .item-total for cart item {}", item),
                }
            }
            PageUpdate::RemoveRow(item) => {
                if let Some(row) = self.doc.query_selector(&dom::item_row_selector(item))? {
                    self.slide_out(row)?;
                }
            }
            PageUpdate::Reload { after_ms } => {
                let location = dom::window()?.location();
                timers::after(after_ms, move || {
                    if let Err(e) = location.reload() {
                        tracing::error!("Reload failed: {:?}", e);
                    }
                });
            }
        }
        Ok(())
    }

    fn update_cart_count(&self, count: u32) -> Result<(), JsValue> {
        let Some(counter) = self.doc.get_element_by_id(CART_COUNT_ID) else {
            return Ok(());
        };
        counter.set_text_content(Some(&count.to_string()));
        counter.class_list().add_2(BOUNCE_CLASSES[0], BOUNCE_CLASSES[1])?;
        let timeout = Timeout::new(self.config.timings.counter_bounce_ms, move || {
            let _ = counter
                .class_list()
                .remove_2(BOUNCE_CLASSES[0], BOUNCE_CLASSES[1]);
        })?;
        // dropping the previous timeout keeps it from ending this bounce early
        *self.bounce.borrow_mut() = Some(timeout);
        Ok(())
    }

    fn slide_out(&self, row: Element) -> Result<(), JsValue> {
        let duration = self.config.timings.row_slide_out_ms;
        if let Some(html) = row.dyn_ref::<HtmlElement>() {
            html.style()
                .set_property("animation", &format!("slideOut {}ms ease-out", duration))?;
        }
        timers::after(duration, move || row.remove());
        Ok(())
    }
}

impl CartPage for DomPage {
    fn confirm(&self, question: &str) -> bool {
        dom::window()
            .and_then(|w| w.confirm_with_message(question))
            .unwrap_or(false)
    }

    fn apply(&self, update: PageUpdate) {
        if let Err(e) = self.try_apply(update) {
            tracing::error!("Failed to update page: {:?}", e);
        }
    }

    fn notify(&self, notice: Notice) {
        if let Err(e) = self.notifier.show(&notice, self.config.timings.alert_ms) {
            tracing::error!("Failed to show notice: {:?}", e);
        }
    }
}

/// An add-to-cart control.
#[derive(Clone)]
pub struct ButtonControl(pub Element);

impl Control for ButtonControl {
    fn label(&self) -> String {
        self.0.inner_html()
    }

    fn set_label(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn set_disabled(&self, disabled: bool) {
        let _ = self.0.toggle_attribute_with_force("disabled", disabled);
    }
}

/// Outcome flashing for one button. Holds the pending revert timer and the
/// classes it restores; dropping it restores them at once.
pub struct ButtonFlasher {
    el: Element,
    memory: RefCell<FlashMemory>,
    revert: RefCell<Option<Timeout>>,
}

impl ButtonFlasher {
    pub fn new(el: Element) -> Rc<Self> {
        Rc::new(Self {
            el,
            memory: RefCell::new(FlashMemory::default()),
            revert: RefCell::new(None),
        })
    }

    /// Show the outcome colour for `millis`, then put the classes back. A
    /// flash started while another is showing restarts the timer.
    pub fn flash(self: &Rc<Self>, flash: Flash, millis: u32) {
        let classes = self.memory.borrow_mut().start(&self.el.class_name(), flash);
        self.el.set_class_name(&classes);

        let weak = Rc::downgrade(self);
        match Timeout::new(millis, move || {
            if let Some(flasher) = weak.upgrade() {
                flasher.restore();
            }
        }) {
            // replacing the slot cancels the previous revert
            Ok(timeout) => *self.revert.borrow_mut() = Some(timeout),
            Err(e) => {
                tracing::error!("Failed to schedule flash revert: {:?}", e);
                self.restore();
            }
        }
    }

    fn restore(&self) {
        if let Some(original) = self.memory.borrow_mut().finish() {
            self.el.set_class_name(&original);
        }
    }
}

impl Drop for ButtonFlasher {
    fn drop(&mut self) {
        self.restore();
    }
}
