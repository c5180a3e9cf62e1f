//! Loading state and outcome flashing for clickable controls.

use std::sync::LazyLock;

use regex::Regex;

static BUTTON_VARIANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"btn-\w+").expect("static regex"));

/// The parts of a button the cart flows touch.
pub trait Control {
    /// Current inner HTML.
    fn label(&self) -> String;
    fn set_label(&self, html: &str);
    fn set_disabled(&self, disabled: bool);
}

/// Puts a control into its loading state and restores label and enabled
/// state when dropped, whatever happened in between.
pub struct LoadingGuard<C: Control> {
    control: C,
    original_label: String,
}

impl<C: Control> LoadingGuard<C> {
    pub fn engage(control: C, loading_label: &str) -> Self {
        let original_label = control.label();
        control.set_label(loading_label);
        control.set_disabled(true);
        Self {
            control,
            original_label,
        }
    }

    pub fn original_label(&self) -> &str {
        &self.original_label
    }
}

impl<C: Control> Drop for LoadingGuard<C> {
    fn drop(&mut self) {
        self.control.set_label(&self.original_label);
        self.control.set_disabled(false);
    }
}

/// Outcome colour briefly shown on a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flash {
    Success,
    Error,
}

impl Flash {
    pub fn class(&self) -> &'static str {
        match self {
            Flash::Success => "btn-success",
            Flash::Error => "btn-danger",
        }
    }
}

/// Class attribute with the first `btn-*` variant swapped for the flash class.
/// Returned unchanged when there is no variant to swap.
pub fn flash_classes(class_name: &str, flash: Flash) -> String {
    BUTTON_VARIANT.replace(class_name, flash.class()).into_owned()
}

/// Remembers a control's classes from before its first pending flash, so a
/// flash started while another is showing still reverts to the real classes.
#[derive(Debug, Default)]
pub struct FlashMemory {
    original: Option<String>,
}

impl FlashMemory {
    /// Classes to show for `flash`. `current` is only recorded when no flash
    /// is pending.
    pub fn start(&mut self, current: &str, flash: Flash) -> String {
        let original = self.original.get_or_insert_with(|| current.to_string());
        flash_classes(original, flash)
    }

    /// Classes to restore once the last flash expires.
    pub fn finish(&mut self) -> Option<String> {
        self.original.take()
    }
}
