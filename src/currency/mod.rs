//! Display formatting for amounts and month labels.

use serde::{Deserialize, Serialize};

use crate::domain::MonthKey;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub decimal_places: u8,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            decimal_places: 2,
        }
    }
}

/// Formats an amount with grouping separators and the currency code appended.
pub fn format_amount(amount: f64, currency: &CurrencyCode, locale: &LocaleConfig) -> String {
    let negative = amount < 0.0;
    let rounded = format!("{:.*}", locale.decimal_places as usize, amount.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rounded.as_str(), None),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    let digits = int_part.len();
    for (index, digit) in int_part.chars().enumerate() {
        if index > 0 && (digits - index) % 3 == 0 {
            out.push(locale.grouping_separator);
        }
        out.push(digit);
    }
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out.push(' ');
    out.push_str(currency.as_str());
    out
}

/// Human-readable label for a month key, e.g. `March 2024`.
pub fn month_label(month: &MonthKey) -> String {
    month.first_day().format("%B %Y").to_string()
}
