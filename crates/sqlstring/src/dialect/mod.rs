//! Quote style selection.
//!
//! The only dialect knob this crate exposes is the character used to
//! delimit quoted literals. SQLite and most engines expect single quotes for
//! string literals; some callers feed SQLite's lenient double-quote handling.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The character used to wrap quoted literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum QuoteStyle {
    /// Wrap literals in `'`.
    #[default]
    Single,
    /// Wrap literals in `"`.
    Double,
}

impl QuoteStyle {
    /// Returns the quote character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }

    /// Returns the quote character as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "'",
            Self::Double => "\"",
        }
    }

    /// Wraps `value` in the quote character.
    #[must_use]
    pub fn quote(self, value: &str) -> String {
        let q = self.as_char();
        let mut out = String::with_capacity(value.len() + 2);
        out.push(q);
        out.push_str(value);
        out.push(q);
        out
    }
}

impl fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("single"),
            Self::Double => f.write_str("double"),
        }
    }
}

impl FromStr for QuoteStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "'" => Ok(Self::Single),
            "double" | "\"" => Ok(Self::Double),
            _ => Err(Error::UnknownQuoteStyle(s.to_string())),
        }
    }
}
