//! Keyframes used by the cart animations, injected at start-up.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

const CART_ANIMATIONS_CSS: &str = r#"
@keyframes slideOut {
    from { opacity: 1; transform: translateX(0); }
    to { opacity: 0; transform: translateX(-100%); }
}

.animate__animated {
    animation-duration: 1s;
    animation-fill-mode: both;
}

.animate__bounce {
    animation-name: bounce;
}

@keyframes bounce {
    0%, 20%, 53%, 80%, 100% {
        animation-timing-function: cubic-bezier(0.215, 0.610, 0.355, 1.000);
        transform: translate3d(0, 0, 0);
    }
    40%, 43% {
        animation-timing-function: cubic-bezier(0.755, 0.050, 0.855, 0.060);
        transform: translate3d(0, -30px, 0);
    }
    70% {
        animation-timing-function: cubic-bezier(0.755, 0.050, 0.855, 0.060);
        transform: translate3d(0, -15px, 0);
    }
    90% {
        transform: translate3d(0, -4px, 0);
    }
}
"#;

/// A `<style>` element in `<head>`, removed again on drop.
pub struct Stylesheet {
    element: Element,
}

impl Stylesheet {
    pub fn inject(doc: &Document) -> Result<Self, JsValue> {
        let head = doc.head().ok_or_else(|| JsValue::from_str("no <head>"))?;
        let element = doc.create_element("style")?;
        element.set_attribute("data-owner", "terko-storefront")?;
        element.set_text_content(Some(CART_ANIMATIONS_CSS));
        head.append_child(&element)?;
        Ok(Self { element })
    }
}

impl Drop for Stylesheet {
    fn drop(&mut self) {
        self.element.remove();
    }
}
