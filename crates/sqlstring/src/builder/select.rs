//! SELECT statement builder.

use tracing::trace;

use super::fragment::SqlString;
use super::options::SelectModifier;
use crate::dialect::QuoteStyle;

/// A SELECT statement builder.
///
/// Accumulation calls may be made in any order; clauses always render in
/// the fixed order `SELECT`, `FROM`, `WHERE`, `GROUP BY`, `ORDER BY`,
/// `LIMIT`, `OFFSET`.
///
/// The `WHERE` keyword is always written, even when no predicate has been
/// set. Callers must supply a predicate (e.g. `1 = 1`) to get valid SQL.
///
/// # Example
///
/// ```rust
/// use sqlstring::Select;
///
/// let mut select = Select::default();
/// select
///     .column("c1")
///     .column("c2")
///     .from("t2")
///     .where_clause("c2 = 'ID2'")
///     .group_by("c2")
///     .limit(10, 50);
///
/// assert_eq!(
///     select.render(),
///     "SELECT c1, c2 FROM t2 WHERE c2 = 'ID2' GROUP BY c2 LIMIT 10 OFFSET 50"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Select {
    sql: SqlString,
    modifier: SelectModifier,
    columns: Vec<String>,
    tables: Vec<String>,
    where_clause: String,
    group_by: Vec<String>,
    order_by: Vec<String>,
    limit: u64,
    offset: u64,
}

impl Select {
    /// Creates an empty SELECT builder.
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

    /// Adds a result column. Order is preserved and duplicates are kept.
    pub fn column(&mut self, column: impl Into<String>) -> &mut Self {
        self.columns.push(column.into());
        self
    }

    /// Adds a source table (or `table AS alias`).
    pub fn from(&mut self, table: impl Into<String>) -> &mut Self {
        self.tables.push(table.into());
        self
    }

    /// Sets the predicate, replacing any previous one.
    pub fn where_clause(&mut self, predicate: impl Into<String>) -> &mut Self {
        self.where_clause = predicate.into();
        self
    }

    /// Adds a GROUP BY key.
    pub fn group_by(&mut self, key: impl Into<String>) -> &mut Self {
        self.group_by.push(key.into());
        self
    }

    /// Adds an ORDER BY key, e.g. `name` or `created_at DESC`.
    pub fn order_by(&mut self, key: impl Into<String>) -> &mut Self {
        self.order_by.push(key.into());
        self
    }

    /// Sets LIMIT and OFFSET. A zero limit disables both clauses.
    pub fn limit(&mut self, limit: u64, offset: u64) -> &mut Self {
        self.limit = limit;
        self.offset = offset;
        self
    }

    /// Sets the ALL/DISTINCT/UNIQUE modifier, replacing any previous one.
    pub fn modifier(&mut self, modifier: SelectModifier) -> &mut Self {
        self.modifier = modifier;
        self
    }

    /// Clears all accumulated clauses. The quote style is kept.
    pub fn reset(&mut self) {
        *self = Self::new(self.quote_style());
    }

    /// Renders the statement.
    pub fn render(&mut self) -> String {
        self.sql.reset();
        self.sql.push_str("SELECT ", false);
        self.sql.push_str(self.modifier.as_sql(), false);
        self.sql.push_joined(&self.columns, ", ", false);
        self.sql.push_str(" FROM ", false);
        self.sql.push_joined(&self.tables, ", ", false);
        self.sql.push_str(" WHERE ", false);
        self.sql.push_str(&self.where_clause, false);

        if !self.group_by.is_empty() {
            self.sql.push_str(" GROUP BY ", false);
            self.sql.push_joined(&self.group_by, ", ", false);
        }

        if !self.order_by.is_empty() {
            self.sql.push_str(" ORDER BY ", false);
            self.sql.push_joined(&self.order_by, ", ", false);
        }

        if self.limit > 0 {
            self.sql.push_str(" LIMIT ", false);
            self.sql.push_uint(self.limit, false);
            if self.offset > 0 {
                self.sql.push_str(" OFFSET ", false);
                self.sql.push_uint(self.offset, false);
            }
        }

        let out = self.sql.to_string();
        trace!(sql = %out, "rendered select");
        out
    }
}

// Equality covers accumulated clauses only, not the scratch buffer.
impl PartialEq for Select {
    fn eq(&self, other: &Self) -> bool {
        self.quote_style() == other.quote_style()
            && self.modifier == other.modifier
            && self.columns == other.columns
            && self.tables == other.tables
            && self.where_clause == other.where_clause
            && self.group_by == other.group_by
            && self.order_by == other.order_by
            && self.limit == other.limit
            && self.offset == other.offset
    }
}

impl Eq for Select {}
