//! Keyword options shared by the statement builders.
//!
//! Each option is a closed set mapped to a fixed SQL literal by `as_sql()`.
//! The "no modifier" variants map to the empty string so builders can
//! write the literal unconditionally.

use std::str::FromStr;

use crate::error::Error;

/// Normalizes a keyword for matching: `UNION ALL`, `union-all` and
/// `union_all` all become `union_all`.
pub fn normalize_keyword(s: &str) -> String {
    s.trim()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Row-selection modifier written directly after `SELECT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SelectModifier {
    /// No modifier.
    #[default]
    None,
    /// `ALL`
    All,
    /// `DISTINCT`
    Distinct,
    /// `UNIQUE`
    Unique,
}

impl SelectModifier {
    /// Returns the SQL literal, including its trailing space.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::None => "",
            Self::All => "ALL ",
            Self::Distinct => "DISTINCT ",
            Self::Unique => "UNIQUE ",
        }
    }
}

impl FromStr for SelectModifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_keyword(s).as_str() {
            "" | "none" => Ok(Self::None),
            "all" => Ok(Self::All),
            "distinct" => Ok(Self::Distinct),
            "unique" => Ok(Self::Unique),
            _ => Err(Error::UnknownKeyword {
                kind: "select modifier",
                value: s.to_string(),
            }),
        }
    }
}

/// Set operation joining the two halves of a compound SELECT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Junction {
    /// `UNION`
    #[default]
    Union,
    /// `UNION ALL`
    UnionAll,
    /// `INTERSECT`
    Intersect,
    /// `EXCEPT`
    Except,
}

impl Junction {
    /// Returns the SQL literal surrounded by single spaces.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Union => " UNION ",
            Self::UnionAll => " UNION ALL ",
            Self::Intersect => " INTERSECT ",
            Self::Except => " EXCEPT ",
        }
    }
}

impl FromStr for Junction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_keyword(s).as_str() {
            "union" => Ok(Self::Union),
            "union_all" => Ok(Self::UnionAll),
            "intersect" => Ok(Self::Intersect),
            "except" => Ok(Self::Except),
            _ => Err(Error::UnknownKeyword {
                kind: "compound junction",
                value: s.to_string(),
            }),
        }
    }
}

/// Conflict-resolution clause written between `INSERT` and `INTO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ConflictResolution {
    /// Plain `INSERT`.
    #[default]
    None,
    /// `INSERT OR REPLACE`
    Replace,
    /// `INSERT OR IGNORE`
    Ignore,
}

impl ConflictResolution {
    /// Returns the SQL literal, including its trailing space.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Replace => "OR REPLACE ",
            Self::Ignore => "OR IGNORE ",
        }
    }
}

impl FromStr for ConflictResolution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_keyword(s).as_str() {
            "" | "none" => Ok(Self::None),
            "replace" | "or_replace" => Ok(Self::Replace),
            "ignore" | "or_ignore" => Ok(Self::Ignore),
            _ => Err(Error::UnknownKeyword {
                kind: "conflict resolution",
                value: s.to_string(),
            }),
        }
    }
}
