//! User-facing strings. The storefront is Ukrainian-only.

pub const ADD_FAILED: &str = "Помилка при додаванні товару";
pub const UPDATE_FAILED: &str = "Помилка при оновленні кошика";
pub const REMOVE_FAILED: &str = "Помилка при видаленні товару";
pub const CONFIRM_REMOVE: &str = "Ви впевнені, що хочете видалити цей товар з кошика?";
pub const EMPTY_QUERY: &str = "Введіть пошуковий запит";

/// Inner HTML of an add button while its request is in flight.
pub const ADDING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin me-2"></i>Додавання..."#;
