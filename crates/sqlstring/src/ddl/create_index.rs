//! CREATE INDEX builder.

use tracing::trace;

use crate::builder::SqlString;
use crate::dialect::QuoteStyle;

/// A CREATE INDEX builder.
///
/// A non-empty predicate turns the index into a partial index.
///
/// # Example
///
/// ```rust
/// use sqlstring::{CreateIndex, QuoteStyle};
///
/// let mut index = CreateIndex::new(QuoteStyle::Single, true, true);
/// index
///     .name("idx_users_email")
///     .table("users")
///     .column("email")
///     .where_clause("deleted_at IS NULL");
///
/// assert_eq!(
///     index.render(),
///     "CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users(email) WHERE deleted_at IS NULL"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CreateIndex {
    sql: SqlString,
    unique: bool,
    if_not_exists: bool,
    name: String,
    table: String,
    columns: Vec<String>,
    where_clause: String,
}

impl CreateIndex {
    /// Creates an empty CREATE INDEX builder.
    #[must_use]
    pub fn new(quote: QuoteStyle, unique: bool, if_not_exists: bool) -> Self {
        Self {
            sql: SqlString::new(quote),
            unique,
            if_not_exists,
            ..Self::default()
        }
    }

    /// Returns the quote style this builder was created with.
    #[must_use]
    pub const fn quote_style(&self) -> QuoteStyle {
        self.sql.quote_style()
    }

    /// Sets the index name, replacing any previous one.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Sets the indexed table, replacing any previous one.
    pub fn table(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = table.into();
        self
    }

    /// Adds an indexed column (or expression such as `lower(email)`).
    pub fn column(&mut self, column: impl Into<String>) -> &mut Self {
        self.columns.push(column.into());
        self
    }

    /// Sets the partial-index predicate, replacing any previous one.
    pub fn where_clause(&mut self, predicate: impl Into<String>) -> &mut Self {
        self.where_clause = predicate.into();
        self
    }

    /// Clears the name, table, columns and predicate. Construction flags are
    /// kept.
    pub fn reset(&mut self) {
        *self = Self::new(self.quote_style(), self.unique, self.if_not_exists);
    }

    /// Renders the statement.
    pub fn render(&mut self) -> String {
        self.sql.reset();
        self.sql.push_str("CREATE ", false);
        if self.unique {
            self.sql.push_str("UNIQUE ", false);
        }
        self.sql.push_str("INDEX ", false);
        if self.if_not_exists {
            self.sql.push_str("IF NOT EXISTS ", false);
        }
        self.sql.push_str(&self.name, false);
        self.sql.push_str(" ON ", false);
        self.sql.push_str(&self.table, false);
        self.sql.push_joined_parens(&self.columns, ", ", false);
        if !self.where_clause.is_empty() {
            self.sql.push_str(" WHERE ", false);
            self.sql.push_str(&self.where_clause, false);
        }

        let out = self.sql.to_string();
        trace!(sql = %out, "rendered create index");
        out
    }
}

// Equality covers accumulated state only, not the scratch buffer.
impl PartialEq for CreateIndex {
    fn eq(&self, other: &Self) -> bool {
        self.quote_style() == other.quote_style()
            && self.unique == other.unique
            && self.if_not_exists == other.if_not_exists
            && self.name == other.name
            && self.table == other.table
            && self.columns == other.columns
            && self.where_clause == other.where_clause
    }
}

impl Eq for CreateIndex {}
