//! Price rendering following the `uk-UA` / `UAH` number format.
//!
//! Amounts come from the server already computed; this only turns them into
//! display text. Fraction digits are kept up to `max_fraction_digits` and
//! trailing zeros are dropped down to `min_fraction_digits`, so whole amounts
//! render without a decimal part.

use serde::{Deserialize, Serialize};

/// No-break space used by the `uk-UA` locale for grouping and before the symbol.
pub const NBSP: char = '\u{00A0}';

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceFormat {
    pub group_separator: String,
    pub decimal_separator: String,
    pub symbol: String,
    pub symbol_separator: String,
    pub symbol_after: bool,
    pub min_fraction_digits: u32,
    pub max_fraction_digits: u32,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self::uah()
    }
}

impl PriceFormat {
    /// Hryvnia in the Ukrainian locale: `1 500 ₴`, `1 234,5 ₴`.
    pub fn uah() -> Self {
        Self {
            group_separator: NBSP.to_string(),
            decimal_separator: ",".to_string(),
            symbol: "\u{20B4}".to_string(),
            symbol_separator: NBSP.to_string(),
            symbol_after: true,
            min_fraction_digits: 0,
            max_fraction_digits: 2,
        }
    }

    pub fn format(&self, amount: f64) -> String {
        let number = self.format_number(amount);
        if self.symbol_after {
            format!("{}{}{}", number, self.symbol_separator, self.symbol)
        } else {
            format!("{}{}{}", self.symbol, self.symbol_separator, number)
        }
    }

    fn format_number(&self, amount: f64) -> String {
        if amount.is_nan() {
            return "NaN".to_string();
        }
        let negative = amount.is_sign_negative();
        if amount.is_infinite() {
            return if negative { "-\u{221E}" } else { "\u{221E}" }.to_string();
        }

        let max = self.max_fraction_digits.min(9);
        let min = self.min_fraction_digits.min(max);
        let scale = 10u128.pow(max);
        // `as` saturates, which only matters far beyond any real price.
        let scaled = (amount.abs() * scale as f64).round() as u128;
        let whole = scaled / scale;
        let fraction = scaled % scale;

        let mut out = String::new();
        // negative amounts keep the sign even when they round to zero
        if negative {
            out.push('-');
        }
        out.push_str(&group_digits(&whole.to_string(), &self.group_separator));

        if max > 0 {
            let digits = format!("{:0width$}", fraction, width = max as usize);
            let keep = digits.trim_end_matches('0').len().max(min as usize);
            if keep > 0 {
                out.push_str(&self.decimal_separator);
                out.push_str(&digits[..keep]);
            }
        }
        out
    }
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Format with the default hryvnia rules.
pub fn format_price(amount: f64) -> String {
    PriceFormat::uah().format(amount)
}
