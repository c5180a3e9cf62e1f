use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// JSON payload returned by every cart endpoint.
///
/// Only `success` is mandatory. Rejections often carry nothing else, and the
/// remove endpoint does not report `cart_total_price`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CartResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub cart_total: Option<u32>,
    #[serde(default, deserialize_with = "amount")]
    pub item_total: Option<f64>,
    #[serde(default, deserialize_with = "amount")]
    pub cart_total_price: Option<f64>,
}

impl CartResponse {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Body of `/cart/update/{id}/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityRequest {
    pub quantity: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

/// Decimal fields come back either as numbers or as strings like `"1500.00"`.
fn amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawAmount>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawAmount::Number(n)) => Ok(Some(n)),
        Some(RawAmount::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("bad amount {:?}: {}", s, e))),
    }
}

/// Alert severity, rendered as the `alert-{severity}` class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Danger,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Full class list for a freshly created alert node.
    pub fn alert_classes(&self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification to put on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(Severity::Danger, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }
}

/// How an alert leaves the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismissal {
    /// Removed after the delay; the close control lives exactly as long.
    After { millis: u32 },
    /// Stays until the user closes it.
    OnClose,
}

impl Dismissal {
    /// A zero duration means the alert waits for the user.
    pub fn for_duration(millis: u32) -> Self {
        if millis == 0 {
            Dismissal::OnClose
        } else {
            Dismissal::After { millis }
        }
    }
}
