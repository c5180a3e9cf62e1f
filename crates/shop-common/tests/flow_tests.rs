mod fixtures;

use futures::executor::block_on;

use fixtures::{ok_response, FakeButton, FakePage, FakeTransport};
use shop_common::button::Flash;
use shop_common::config::StorefrontConfig;
use shop_common::endpoint::{CartAction, ItemId, ProductId};
use shop_common::error::CartError;
use shop_common::flow::{add_to_cart, remove_item, update_quantity, Outcome, PageUpdate};
use shop_common::messages;
use shop_common::types::{CartResponse, Notice, Severity};

const ORIGINAL_LABEL: &str = r#"<i class="fas fa-cart-plus"></i> До кошика"#;

// --- add to cart ---

#[test]
fn add_success_sets_counter_to_server_total() {
    let transport = FakeTransport::replying(ok_response("Товар додано в кошик", 7));
    let page = FakePage::new();
    let button = FakeButton::new(ORIGINAL_LABEL);

    let (outcome, flash) = block_on(add_to_cart(&transport, &page, ProductId(42), &button));

    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(flash, Flash::Success);
    assert_eq!(transport.sent(), vec![CartAction::Add(ProductId(42))]);
    assert_eq!(page.updates(), vec![PageUpdate::CartCount(7)]);
    assert_eq!(page.notices(), vec![Notice::success("Товар додано в кошик")]);
}

#[test]
fn add_restores_button_after_success() {
    let transport = FakeTransport::replying(ok_response("ok", 1));
    let page = FakePage::new();
    let button = FakeButton::new(ORIGINAL_LABEL);

    block_on(add_to_cart(&transport, &page, ProductId(1), &button));

    assert_eq!(*button.label.borrow(), ORIGINAL_LABEL);
    assert!(!button.disabled.get());
    assert!(button
        .disabled_labels
        .borrow()
        .iter()
        .any(|l| l == messages::ADDING_LABEL));
}

#[test]
fn add_restores_button_after_rejection() {
    let transport = FakeTransport::replying(CartResponse::default());
    let page = FakePage::new();
    let button = FakeButton::new(ORIGINAL_LABEL);

    let (outcome, flash) = block_on(add_to_cart(&transport, &page, ProductId(1), &button));

    assert!(matches!(outcome, Outcome::Failed(CartError::Rejected(_))));
    assert_eq!(flash, Flash::Error);
    assert_eq!(*button.label.borrow(), ORIGINAL_LABEL);
    assert!(!button.disabled.get());
}

#[test]
fn add_restores_button_after_transport_error() {
    let transport = FakeTransport::failing(CartError::Transport("offline".into()));
    let page = FakePage::new();
    let button = FakeButton::new(ORIGINAL_LABEL);

    let (outcome, flash) = block_on(add_to_cart(&transport, &page, ProductId(1), &button));

    assert_eq!(
        outcome,
        Outcome::Failed(CartError::Transport("offline".into()))
    );
    assert_eq!(flash, Flash::Error);
    assert_eq!(*button.label.borrow(), ORIGINAL_LABEL);
    assert!(!button.disabled.get());
}

#[test]
fn add_failures_show_one_generic_error() {
    for transport in [
        FakeTransport::failing(CartError::Status(500)),
        FakeTransport::failing(CartError::Decode("eof".into())),
        FakeTransport::replying(CartResponse {
            success: false,
            message: "out of stock".into(),
            ..CartResponse::default()
        }),
    ] {
        let page = FakePage::new();
        let button = FakeButton::new(ORIGINAL_LABEL);
        block_on(add_to_cart(&transport, &page, ProductId(3), &button));

        assert_eq!(page.notices(), vec![Notice::danger(messages::ADD_FAILED)]);
        assert!(page.updates().is_empty());
    }
}

// --- update quantity ---

#[test]
fn update_patches_item_and_totals() {
    let transport = FakeTransport::replying(CartResponse {
        success: true,
        message: "Кількість оновлено".into(),
        cart_total: Some(3),
        item_total: Some(3000.0),
        cart_total_price: Some(4500.0),
    });
    let page = FakePage::new();
    let config = StorefrontConfig::default();

    let outcome = block_on(update_quantity(&transport, &page, &config, ItemId(9), 2));

    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(
        transport.sent(),
        vec![CartAction::Update {
            item: ItemId(9),
            quantity: 2
        }]
    );
    assert_eq!(
        page.updates(),
        vec![
            PageUpdate::ItemTotal {
                item: ItemId(9),
                text: "3\u{a0}000\u{a0}\u{20b4}".into()
            },
            PageUpdate::TotalItems(3),
            PageUpdate::CartPrice("4\u{a0}500\u{a0}\u{20b4}".into()),
            PageUpdate::CartCount(3),
        ]
    );
    assert_eq!(page.notices(), vec![Notice::success("Кількість оновлено")]);
    assert!(page.prompts().is_empty());
}

#[test]
fn zero_quantity_takes_removal_path() {
    let transport = FakeTransport::replying(ok_response("видалено", 2));
    let page = FakePage::new();
    let config = StorefrontConfig::default();

    block_on(update_quantity(&transport, &page, &config, ItemId(5), 0));

    assert_eq!(page.prompts(), vec![messages::CONFIRM_REMOVE.to_string()]);
    assert_eq!(transport.sent(), vec![CartAction::Remove(ItemId(5))]);
}

#[test]
fn negative_quantity_never_calls_update() {
    let transport = FakeTransport::replying(ok_response("видалено", 2));
    let page = FakePage::answering(false);
    let config = StorefrontConfig::default();

    let outcome = block_on(update_quantity(&transport, &page, &config, ItemId(5), -3));

    assert_eq!(outcome, Outcome::Declined);
    assert_eq!(page.prompts().len(), 1);
    assert!(transport.sent().is_empty());
}

#[test]
fn update_failure_shows_update_error() {
    let transport = FakeTransport::failing(CartError::Status(404));
    let page = FakePage::new();
    let config = StorefrontConfig::default();

    block_on(update_quantity(&transport, &page, &config, ItemId(1), 4));

    assert_eq!(
        page.notices(),
        vec![Notice::danger(messages::UPDATE_FAILED)]
    );
    assert!(page.updates().is_empty());
}

// --- remove ---

#[test]
fn declined_removal_sends_nothing_and_changes_nothing() {
    let transport = FakeTransport::replying(ok_response("видалено", 0));
    let page = FakePage::answering(false);
    let config = StorefrontConfig::default();

    let outcome = block_on(remove_item(&transport, &page, &config, ItemId(8)));

    assert_eq!(outcome, Outcome::Declined);
    assert!(transport.sent().is_empty());
    assert!(page.updates().is_empty());
    assert!(page.notices().is_empty());
}

#[test]
fn removal_emptying_cart_schedules_reload() {
    let transport = FakeTransport::replying(ok_response("Чай видалено з кошика", 0));
    let page = FakePage::new();
    let config = StorefrontConfig::default();

    block_on(remove_item(&transport, &page, &config, ItemId(8)));

    let updates = page.updates();
    assert_eq!(updates.first(), Some(&PageUpdate::RemoveRow(ItemId(8))));
    assert!(updates.contains(&PageUpdate::Reload { after_ms: 1000 }));
    assert!(updates.contains(&PageUpdate::CartCount(0)));
    assert_eq!(
        page.notices(),
        vec![Notice::success("Чай видалено з кошика")]
    );
}

#[test]
fn removal_leaving_items_does_not_reload() {
    let transport = FakeTransport::replying(ok_response("видалено", 4));
    let page = FakePage::new();
    let config = StorefrontConfig::default();

    block_on(remove_item(&transport, &page, &config, ItemId(8)));

    assert!(!page
        .updates()
        .iter()
        .any(|u| matches!(u, PageUpdate::Reload { .. })));
}

#[test]
fn removal_without_price_leaves_price_untouched() {
    let transport = FakeTransport::replying(ok_response("видалено", 4));
    let page = FakePage::new();
    let config = StorefrontConfig::default();

    block_on(remove_item(&transport, &page, &config, ItemId(8)));

    assert!(!page
        .updates()
        .iter()
        .any(|u| matches!(u, PageUpdate::CartPrice(_))));
    assert!(page.updates().contains(&PageUpdate::TotalItems(4)));
}

#[test]
fn reload_delay_follows_config() {
    let transport = FakeTransport::replying(ok_response("видалено", 0));
    let page = FakePage::new();
    let mut config = StorefrontConfig::default();
    config.timings.empty_cart_reload_ms = 250;

    block_on(remove_item(&transport, &page, &config, ItemId(1)));

    assert!(page
        .updates()
        .contains(&PageUpdate::Reload { after_ms: 250 }));
}

#[test]
fn failed_removal_keeps_row() {
    let transport = FakeTransport::failing(CartError::Transport("reset".into()));
    let page = FakePage::new();
    let config = StorefrontConfig::default();

    block_on(remove_item(&transport, &page, &config, ItemId(8)));

    assert!(page.updates().is_empty());
    let notices = page.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].severity, Severity::Danger);
    assert_eq!(notices[0].message, messages::REMOVE_FAILED);
}
