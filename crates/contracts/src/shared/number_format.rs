//! Number formatting for table cells

use serde::{Deserialize, Serialize};

/// Digit grouping and currency conventions of a display locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberLocale {
    /// Thousands separator
    pub group_separator: char,
    /// Appended after a space to money values
    pub currency_suffix: String,
}

impl NumberLocale {
    /// vi-VN: "250.000 ₫"
    pub fn vi_vn() -> Self {
        Self {
            group_separator: '.',
            currency_suffix: "₫".to_string(),
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::vi_vn()
    }
}

/// Inserts `separator` every 3 digits from the right of an integer string
///
/// # Examples
///
/// ```
/// use contracts::shared::number_format::group_digits;
/// assert_eq!(group_digits("1234567", ' '), "1 234 567");
/// ```
pub fn group_digits(integer_part: &str, separator: char) -> String {
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(separator);
        }
        result.push(*c);
    }

    result.chars().rev().collect()
}

/// Revenue grouped per the vi-VN convention, without suffix
///
/// ```
/// use contracts::shared::number_format::format_currency;
/// assert_eq!(format_currency(250000), "250.000");
/// ```
pub fn format_currency(value: u64) -> String {
    format_money(value, &NumberLocale::vi_vn())
}

pub fn format_money(value: u64, locale: &NumberLocale) -> String {
    group_digits(&value.to_string(), locale.group_separator)
}

/// Grouped money value followed by the currency suffix
pub fn format_money_with_suffix(value: u64, locale: &NumberLocale) -> String {
    let formatted = format_money(value, locale);
    if locale.currency_suffix.is_empty() {
        formatted
    } else {
        format!("{} {}", formatted, locale.currency_suffix)
    }
}
