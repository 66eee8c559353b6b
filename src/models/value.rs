//! Stored cell values and the numeric coercions applied to them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value recorded from a data cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    /// A numeric cell
    Number(f64),
    /// A textual cell, kept verbatim
    Text(String),
}

impl DataValue {
    /// Plain numeric view of the value.
    ///
    /// Text is trimmed and parsed as-is, without separator handling. `NaN` is
    /// never returned.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        let number = match self {
            Self::Number(n) => *n,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        (!number.is_nan()).then_some(number)
    }

    /// Numeric view with thousands separators removed from text.
    ///
    /// Commas are dropped and the longest leading number is read, so
    /// `"1,234 MWh"` becomes `1234.0` and `"12abc"` becomes `12.0`. Text
    /// without a leading number yields `None`, as does `NaN`.
    #[must_use]
    pub fn coerce_numeric(&self) -> Option<f64> {
        let number = match self {
            Self::Number(n) => *n,
            Self::Text(text) => {
                let cleaned: String = text.chars().filter(|c| *c != ',').collect();
                leading_number(&cleaned)?
            }
        };
        (!number.is_nan()).then_some(number)
    }
}

/// Longest prefix of `text` (after leading whitespace) that reads as a
/// decimal number with optional sign, fraction and exponent, or `Infinity`.
fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if text[end..].starts_with("Infinity") {
        return text[..end + "Infinity".len()].parse().ok();
    }

    let int_end = digits_from(end);
    let mut digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }
    text[..end].parse().ok()
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Canonical key for a province display name: lower case, hyphens removed.
///
/// `"Noord-Holland"` becomes `"noordholland"`.
#[must_use]
pub fn normalize_province_name(name: &str) -> String {
    name.trim().to_lowercase().replace('-', "")
}
