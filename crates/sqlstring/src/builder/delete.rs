//! DELETE statement builder.

use tracing::trace;

use super::fragment::SqlString;
use crate::dialect::QuoteStyle;

/// A DELETE statement builder.
///
/// Unlike [`Select`] and [`Update`], an empty predicate omits the `WHERE`
/// clause entirely.
///
/// **Warning**: without a predicate the statement deletes every row.
///
/// [`Select`]: super::Select
/// [`Update`]: super::Update
#[derive(Debug, Clone, Default)]
pub struct Delete {
    sql: SqlString,
    table: String,
    where_clause: String,
}

impl Delete {
    /// Creates an empty DELETE builder.
    #[must_use]
    pub fn new(quote: QuoteStyle) -> Self {
        Self {
            sql: SqlString::new(quote),
            ..Self::default()
        }
    }

    /// Returns the quote style this builder was created with.
    #[must_use]
    pub const fn quote_style(&self) -> QuoteStyle {
        self.sql.quote_style()
    }

    /// Sets the target table, replacing any previous one.
    pub fn table(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = table.into();
        self
    }

    /// Sets the predicate, replacing any previous one.
    pub fn where_clause(&mut self, predicate: impl Into<String>) -> &mut Self {
        self.where_clause = predicate.into();
        self
    }

    /// Returns true if a non-empty predicate is set.
    #[must_use]
    pub fn has_where_clause(&self) -> bool {
        !self.where_clause.is_empty()
    }

    /// Clears all accumulated state. The quote style is kept.
    pub fn reset(&mut self) {
        *self = Self::new(self.quote_style());
    }

    /// Renders the statement.
    pub fn render(&mut self) -> String {
        self.sql.reset();
        self.sql.push_str("DELETE FROM ", false);
        self.sql.push_str(&self.table, false);
        self.sql.push_str(" ", false);
        if !self.where_clause.is_empty() {
            self.sql.push_str(" WHERE ", false);
            self.sql.push_str(&self.where_clause, false);
        }

        let out = self.sql.to_string();
        trace!(sql = %out, "rendered delete");
        out
    }
}

// Equality covers accumulated state only, not the scratch buffer.
impl PartialEq for Delete {
    fn eq(&self, other: &Self) -> bool {
        self.quote_style() == other.quote_style()
            && self.table == other.table
            && self.where_clause == other.where_clause
    }
}

impl Eq for Delete {}
