use crate::endpoint::{CartAction, ItemId};

/// What a requested quantity turns into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantityChange {
    Set(u32),
    /// Anything below one removes the line item.
    Remove,
}

impl QuantityChange {
    pub fn from_requested(quantity: i64) -> Self {
        if quantity < 1 {
            QuantityChange::Remove
        } else {
            QuantityChange::Set(u32::try_from(quantity).unwrap_or(u32::MAX))
        }
    }

    pub fn into_action(self, item: ItemId) -> CartAction {
        match self {
            QuantityChange::Set(quantity) => CartAction::Update { item, quantity },
            QuantityChange::Remove => CartAction::Remove(item),
        }
    }
}

/// Parse the value of a quantity input. Blank or non-numeric input yields `None`.
pub fn parse_quantity(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<i64>().ok().or_else(|| {
        // number inputs may hand back "2.0" or "1e1"
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v.trunc() as i64)
    })
}
