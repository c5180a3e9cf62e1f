//! Cancellable browser timers.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom;

/// A pending `setTimeout`. Dropping the handle cancels it.
pub struct Timeout {
    id: Option<i32>,
    callback: Option<Closure<dyn FnMut()>>,
}

impl Timeout {
    pub fn new<F>(millis: u32, f: F) -> Result<Self, JsValue>
    where
        F: FnOnce() + 'static,
    {
        let callback: Closure<dyn FnMut()> = Closure::once(f);
        let id = dom::window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            i32::try_from(millis).unwrap_or(i32::MAX),
        )?;
        Ok(Self {
            id: Some(id),
            callback: Some(callback),
        })
    }

    /// Let the timer fire on its own; nothing will cancel it.
    pub fn forget(mut self) {
        self.id = None;
        if let Some(callback) = self.callback.take() {
            callback.forget();
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
        }
    }
}

/// Schedule a detached timer, logging if the browser refuses it.
pub fn after<F>(millis: u32, f: F)
where
    F: FnOnce() + 'static,
{
    match Timeout::new(millis, f) {
        Ok(timeout) => timeout.forget(),
        Err(e) => tracing::error!("Failed to schedule timer: {:?}", e),
    }
}

/// Runs only the last of a burst of calls, `delay_ms` after it was made.
pub struct Debouncer {
    delay_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        // cancel before scheduling so two timers are never live
        self.cancel();
        match Timeout::new(self.delay_ms, f) {
            Ok(timeout) => *self.pending.borrow_mut() = Some(timeout),
            Err(e) => tracing::error!("Failed to schedule debounced call: {:?}", e),
        }
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}
