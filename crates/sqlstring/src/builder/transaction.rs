//! Transaction control statements.

use std::str::FromStr;

use tracing::trace;

use super::options::normalize_keyword;
use crate::error::Error;

/// Which transaction control statement to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TransactionKind {
    /// `BEGIN`
    #[default]
    Begin,
    /// `COMMIT`
    Commit,
    /// `ROLLBACK`
    Rollback,
}

impl TransactionKind {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Begin => "BEGIN",
            Self::Commit => "COMMIT",
            Self::Rollback => "ROLLBACK",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_keyword(s).as_str() {
            "begin" => Ok(Self::Begin),
            "commit" => Ok(Self::Commit),
            "rollback" => Ok(Self::Rollback),
            _ => Err(Error::UnknownKeyword {
                kind: "transaction kind",
                value: s.to_string(),
            }),
        }
    }
}

/// A `BEGIN`/`COMMIT`/`ROLLBACK TRANSACTION` statement.
///
/// ```rust
/// use sqlstring::{Transaction, TransactionKind};
///
/// assert_eq!(
///     Transaction::new(TransactionKind::Rollback).render(),
///     "ROLLBACK TRANSACTION"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transaction {
    kind: TransactionKind,
}

impl Transaction {
    /// Creates a transaction statement of the given kind.
    #[must_use]
    pub const fn new(kind: TransactionKind) -> Self {
        Self { kind }
    }

    /// Returns the statement kind.
    #[must_use]
    pub const fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Renders the statement.
    #[must_use]
    pub fn render(&self) -> String {
        let out = format!("{} TRANSACTION", self.kind.as_sql());
        trace!(sql = %out, "rendered transaction");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(
            Transaction::new(TransactionKind::Begin).render(),
            "BEGIN TRANSACTION"
        );
        assert_eq!(
            Transaction::new(TransactionKind::Commit).render(),
            "COMMIT TRANSACTION"
        );
        assert_eq!(
            Transaction::new(TransactionKind::Rollback).render(),
            "ROLLBACK TRANSACTION"
        );
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("BEGIN".parse(), Ok(TransactionKind::Begin));
        assert_eq!(" commit ".parse(), Ok(TransactionKind::Commit));
        assert!("savepoint".parse::<TransactionKind>().is_err());
    }
}
