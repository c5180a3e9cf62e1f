//! Storefront configuration.
//!
//! Every field has a default, so a page may ship a partial JSON block or none
//! at all.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::money::PriceFormat;
use crate::search::DEFAULT_MIN_QUERY_CHARS;

/// Id of the optional `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "storefront-config";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub timings: Timings,
    pub reveal: RevealConfig,
    pub search: SearchConfig,
    pub price: PriceFormat,
    pub endpoints: EndpointConfig,
}

impl StorefrontConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Delays in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub alert_ms: u32,
    pub preexisting_alert_ms: u32,
    pub button_flash_ms: u32,
    pub counter_bounce_ms: u32,
    pub search_debounce_ms: u32,
    pub empty_cart_reload_ms: u32,
    pub row_slide_out_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            alert_ms: 3000,
            preexisting_alert_ms: 5000,
            button_flash_ms: 2000,
            counter_bounce_ms: 1000,
            search_debounce_ms: 300,
            empty_cart_reload_ms: 1000,
            row_slide_out_ms: 300,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub selectors: Vec<String>,
    pub class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            selectors: vec![
                ".product-card".to_string(),
                ".category-card".to_string(),
                ".feature-box".to_string(),
            ],
            class: "fade-in".to_string(),
        }
    }
}

impl RevealConfig {
    /// Selector list joined for `querySelectorAll`.
    pub fn selector(&self) -> String {
        self.selectors.join(", ")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub min_query_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
        }
    }
}

/// Where the cart endpoints live. An empty base means the site root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub base: String,
}
