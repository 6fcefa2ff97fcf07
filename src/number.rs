//! Numbers that remember how they were written.
//!
//! A [`Number`] holds the JSON number text it was read from and prints that
//! text back unchanged, so `1.50`, `-0`, `1e-30` and
//! `123456789012345678901234567890` all survive a load and a write. An exact
//! [`Decimal`] view is available when the value fits one.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

static NUMBER_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?$")
        .expect("number grammar is a valid pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a JSON number")]
pub struct InvalidNumber(pub String);

/// A number kept as its JSON text.
///
/// Two numbers are equal when their text is equal: `1.50` and `1.5` are
/// different documents even though they have the same value.
///
/// # Examples
///
/// ```
/// use jsque::Number;
///
/// let n: Number = "1.0e2".parse().unwrap();
/// assert_eq!(n.to_string(), "1.0e2");
/// assert_eq!(n.as_decimal().map(|d| d.to_string()), Some("100".to_string()));
///
/// assert!("0x10".parse::<Number>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    text: String,
}

impl Number {
    pub fn parse(text: &str) -> Result<Number, InvalidNumber> {
        if NUMBER_GRAMMAR.is_match(text) {
            Ok(Number {
                text: text.to_string(),
            })
        } else {
            Err(InvalidNumber(text.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_integer(&self) -> bool {
        !self.text.contains(['.', 'e', 'E'])
    }

    /// The value as an exact decimal, or `None` when it needs more than 28
    /// digits of scale or precision.
    pub fn as_decimal(&self) -> Option<Decimal> {
        if self.text.contains(['e', 'E']) {
            let d = Decimal::from_scientific(&self.text.to_ascii_lowercase()).ok()?;
            // from_scientific rounds away digits it cannot hold
            (d.is_zero() == self.has_zero_mantissa()).then_some(d)
        } else {
            Decimal::from_str_exact(&self.text).ok()
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.text.parse().ok()
    }

    /// Nearest f64. Out-of-range magnitudes become infinities.
    pub fn as_f64(&self) -> f64 {
        self.text.parse().unwrap_or(f64::NAN)
    }

    fn has_zero_mantissa(&self) -> bool {
        self.text
            .split(['e', 'E'])
            .next()
            .is_some_and(|m| m.chars().all(|c| matches!(c, '0' | '-' | '.')))
    }
}

impl FromStr for Number {
    type Err = InvalidNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Number::parse(s)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number {
            text: n.to_string(),
        }
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number {
            text: n.to_string(),
        }
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number {
            text: n.to_string(),
        }
    }
}

impl From<Decimal> for Number {
    fn from(d: Decimal) -> Self {
        Number {
            text: d.to_string(),
        }
    }
}
