//! Cart flows: add, update quantity, remove.
//!
//! Each flow talks to the backend through a [`CartTransport`] and to the page
//! through a [`CartPage`]. Transport failures and `success: false` replies end
//! the same way: one danger notice with a fixed localized message.

use crate::button::{Control, Flash, LoadingGuard};
use crate::config::StorefrontConfig;
use crate::endpoint::{CartAction, ItemId, ProductId};
use crate::error::CartError;
use crate::messages;
use crate::quantity::QuantityChange;
use crate::types::{CartResponse, Notice};

#[allow(async_fn_in_trait)]
pub trait CartTransport {
    async fn send(&self, action: &CartAction) -> Result<CartResponse, CartError>;
}

/// A change to on-page cart figures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageUpdate {
    /// Navigation counter (`#cart-count`).
    CartCount(u32),
    /// `#total-items` on the cart page.
    TotalItems(u32),
    /// Formatted cart price for `#subtotal` and `#total-price`.
    CartPrice(String),
    /// Formatted line total inside `[data-item-id]`.
    ItemTotal { item: ItemId, text: String },
    RemoveRow(ItemId),
    Reload { after_ms: u32 },
}

pub trait CartPage {
    /// Blocking yes/no question.
    fn confirm(&self, question: &str) -> bool;
    fn apply(&self, update: PageUpdate);
    fn notify(&self, notice: Notice);
}

/// How a flow ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Failed(CartError),
    /// The user declined the removal prompt; nothing was sent.
    Declined,
}

fn accepted(response: CartResponse) -> Result<CartResponse, CartError> {
    if response.success {
        Ok(response)
    } else {
        Err(CartError::Rejected(response.message))
    }
}

async fn dispatch<T: CartTransport>(
    transport: &T,
    action: CartAction,
) -> Result<CartResponse, CartError> {
    tracing::debug!("cart {} -> {:?}", action.name(), action);
    let result = transport.send(&action).await.and_then(accepted);
    if let Err(e) = &result {
        tracing::error!("cart {} failed: {}", action.name(), e);
    }
    result
}

/// Add one unit of `product` to the cart.
///
/// `control` stays disabled with the loading label until the request settles
/// and is restored on every path. The returned flash tells the caller which
/// colour to show on the button.
pub async fn add_to_cart<T, P, C>(
    transport: &T,
    page: &P,
    product: ProductId,
    control: C,
) -> (Outcome, Flash)
where
    T: CartTransport,
    P: CartPage,
    C: Control,
{
    let _guard = LoadingGuard::engage(control, messages::ADDING_LABEL);

    match dispatch(transport, CartAction::Add(product)).await {
        Ok(response) => {
            if let Some(count) = response.cart_total {
                page.apply(PageUpdate::CartCount(count));
            }
            page.notify(Notice::success(response.message));
            (Outcome::Applied, Flash::Success)
        }
        Err(e) => {
            page.notify(Notice::danger(messages::ADD_FAILED));
            (Outcome::Failed(e), Flash::Error)
        }
    }
}

/// Set the quantity of a line item. Anything below one removes it instead.
pub async fn update_quantity<T, P>(
    transport: &T,
    page: &P,
    config: &StorefrontConfig,
    item: ItemId,
    requested: i64,
) -> Outcome
where
    T: CartTransport,
    P: CartPage,
{
    let action = match QuantityChange::from_requested(requested) {
        QuantityChange::Remove => return remove_item(transport, page, config, item).await,
        change => change.into_action(item),
    };

    match dispatch(transport, action).await {
        Ok(response) => {
            if let Some(total) = response.item_total {
                page.apply(PageUpdate::ItemTotal {
                    item,
                    text: config.price.format(total),
                });
            }
            apply_totals(page, config, &response);
            page.notify(Notice::success(response.message));
            Outcome::Applied
        }
        Err(e) => {
            page.notify(Notice::danger(messages::UPDATE_FAILED));
            Outcome::Failed(e)
        }
    }
}

/// Remove a line item after the user confirms.
pub async fn remove_item<T, P>(
    transport: &T,
    page: &P,
    config: &StorefrontConfig,
    item: ItemId,
) -> Outcome
where
    T: CartTransport,
    P: CartPage,
{
    if !page.confirm(messages::CONFIRM_REMOVE) {
        tracing::debug!("removal of item {} declined", item);
        return Outcome::Declined;
    }

    match dispatch(transport, CartAction::Remove(item)).await {
        Ok(response) => {
            page.apply(PageUpdate::RemoveRow(item));
            apply_totals(page, config, &response);
            if response.cart_total == Some(0) {
                page.apply(PageUpdate::Reload {
                    after_ms: config.timings.empty_cart_reload_ms,
                });
            }
            page.notify(Notice::success(response.message));
            Outcome::Applied
        }
        Err(e) => {
            page.notify(Notice::danger(messages::REMOVE_FAILED));
            Outcome::Failed(e)
        }
    }
}

/// Server figures go to the page as-is; nothing is recomputed here.
fn apply_totals<P: CartPage>(page: &P, config: &StorefrontConfig, response: &CartResponse) {
    if let Some(count) = response.cart_total {
        page.apply(PageUpdate::TotalItems(count));
    }
    if let Some(price) = response.cart_total_price {
        page.apply(PageUpdate::CartPrice(config.price.format(price)));
    }
    if let Some(count) = response.cart_total {
        page.apply(PageUpdate::CartCount(count));
    }
}
