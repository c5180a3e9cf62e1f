//! Cart endpoints and the headers every request carries.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::QuantityRequest;

pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const AJAX_MARKER: &str = "XMLHttpRequest";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Name of the hidden form field holding the CSRF token.
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Catalog product, taken from `data-product-id`.
    ProductId
);
id_type!(
    /// Line item in the cart, taken from `data-item-id`.
    ItemId
);

/// One cart mutation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartAction {
    Add(ProductId),
    Update { item: ItemId, quantity: u32 },
    Remove(ItemId),
}

impl CartAction {
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::Add(_) => "add",
            CartAction::Update { .. } => "update",
            CartAction::Remove(_) => "remove",
        }
    }

    /// Request path, prefixed with `base` (no trailing slash expected).
    pub fn path(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        match self {
            CartAction::Add(id) => format!("{}/cart/add/{}/", base, id),
            CartAction::Update { item, .. } => format!("{}/cart/update/{}/", base, item),
            CartAction::Remove(id) => format!("{}/cart/remove/{}/", base, id),
        }
    }

    /// JSON request body.
    pub fn body(&self) -> String {
        match self {
            CartAction::Update { quantity, .. } => {
                serde_json::to_string(&QuantityRequest {
                    quantity: *quantity,
                })
                .unwrap_or_else(|_| format!("{{\"quantity\":{}}}", quantity))
            }
            CartAction::Add(_) | CartAction::Remove(_) => "{}".to_string(),
        }
    }
}

/// Headers attached to every cart request.
pub fn request_headers(csrf_token: &str) -> [(&'static str, String); 3] {
    [
        (CSRF_HEADER, csrf_token.to_string()),
        (REQUESTED_WITH_HEADER, AJAX_MARKER.to_string()),
        ("Content-Type", CONTENT_TYPE_JSON.to_string()),
    ]
}
