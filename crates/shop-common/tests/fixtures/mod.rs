#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use shop_common::button::Control;
use shop_common::endpoint::CartAction;
use shop_common::error::CartError;
use shop_common::flow::{CartPage, CartTransport, PageUpdate};
use shop_common::types::{CartResponse, Notice};

/// Transport that records every request and answers with a scripted reply.
pub struct FakeTransport {
    reply: Result<CartResponse, CartError>,
    pub sent: RefCell<Vec<CartAction>>,
}

impl FakeTransport {
    pub fn replying(response: CartResponse) -> Self {
        Self {
            reply: Ok(response),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(error: CartError) -> Self {
        Self {
            reply: Err(error),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<CartAction> {
        self.sent.borrow().clone()
    }
}

impl CartTransport for FakeTransport {
    async fn send(&self, action: &CartAction) -> Result<CartResponse, CartError> {
        self.sent.borrow_mut().push(*action);
        self.reply.clone()
    }
}

/// Page that answers the confirmation prompt with a fixed choice.
pub struct FakePage {
    confirm_answer: bool,
    pub prompts: RefCell<Vec<String>>,
    pub updates: RefCell<Vec<PageUpdate>>,
    pub notices: RefCell<Vec<Notice>>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::answering(true)
    }

    pub fn answering(confirm_answer: bool) -> Self {
        Self {
            confirm_answer,
            prompts: RefCell::new(Vec::new()),
            updates: RefCell::new(Vec::new()),
            notices: RefCell::new(Vec::new()),
        }
    }

    pub fn updates(&self) -> Vec<PageUpdate> {
        self.updates.borrow().clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl CartPage for FakePage {
    fn confirm(&self, question: &str) -> bool {
        self.prompts.borrow_mut().push(question.to_string());
        self.confirm_answer
    }

    fn apply(&self, update: PageUpdate) {
        self.updates.borrow_mut().push(update);
    }

    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

/// Button double that keeps its state in cells, shared through a reference.
pub struct FakeButton {
    pub label: RefCell<String>,
    pub disabled: Cell<bool>,
    /// Labels seen while disabled, to check the loading state was shown.
    pub disabled_labels: RefCell<Vec<String>>,
}

impl FakeButton {
    pub fn new(label: &str) -> Self {
        Self {
            label: RefCell::new(label.to_string()),
            disabled: Cell::new(false),
            disabled_labels: RefCell::new(Vec::new()),
        }
    }
}

impl Control for &FakeButton {
    fn label(&self) -> String {
        self.label.borrow().clone()
    }

    fn set_label(&self, html: &str) {
        *self.label.borrow_mut() = html.to_string();
        if self.disabled.get() {
            self.disabled_labels.borrow_mut().push(html.to_string());
        }
    }

    fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
        if disabled {
            self.disabled_labels
                .borrow_mut()
                .push(self.label.borrow().clone());
        }
    }
}

pub fn ok_response(message: &str, cart_total: u32) -> CartResponse {
    CartResponse {
        success: true,
        message: message.to_string(),
        cart_total: Some(cart_total),
        ..CartResponse::default()
    }
}
