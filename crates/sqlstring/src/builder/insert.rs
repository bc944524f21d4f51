//! INSERT statement builder.

use tracing::trace;

use super::fragment::SqlString;
use super::options::ConflictResolution;
use super::select::Select;
use crate::dialect::QuoteStyle;

/// An INSERT statement builder.
///
/// Values flagged as quoted are wrapped when they are added, not at render
/// time. Once a nested [`Select`] is set the statement renders as
/// `INSERT ... SELECT` and any accumulated column/value pairs are ignored.
///
/// # Example
///
/// ```rust
/// use sqlstring::{Insert, QuoteStyle};
///
/// let mut insert = Insert::new(QuoteStyle::Single);
/// insert
///     .table("t1")
///     .value("name", "Bruce", true)
///     .value("position", "Engineer", true)
///     .value("salary", "100000", false);
///
/// assert_eq!(
///     insert.render(),
///     "INSERT INTO t1 (name,position,salary) VALUES ('Bruce','Engineer',100000)"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Insert {
    sql: SqlString,
    conflict: ConflictResolution,
    table: String,
    columns: Vec<String>,
    values: Vec<String>,
    select: Option<Select>,
}

impl Insert {
    /// Creates an empty INSERT builder.
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

    /// Appends a column and its value.
    pub fn value(
        &mut self,
        column: impl Into<String>,
        value: impl Into<String>,
        quoted: bool,
    ) -> &mut Self {
        let value = value.into();
        let value = if quoted {
            self.quote_style().quote(&value)
        } else {
            value
        };
        self.columns.push(column.into());
        self.values.push(value);
        self
    }

    /// Uses `select` as the row source, switching to `INSERT ... SELECT`.
    ///
    /// The nested builder keeps the quote style it was created with.
    pub fn select(&mut self, select: Select) -> &mut Self {
        self.select = Some(select);
        self
    }

    /// Sets the conflict-resolution clause, replacing any previous one.
    pub fn conflict(&mut self, conflict: ConflictResolution) -> &mut Self {
        self.conflict = conflict;
        self
    }

    /// Clears all accumulated state, including a nested SELECT. The quote
    /// style is kept.
    pub fn reset(&mut self) {
        *self = Self::new(self.quote_style());
    }

    /// Renders the statement.
    pub fn render(&mut self) -> String {
        self.sql.reset();
        self.sql.push_str("INSERT ", false);
        self.sql.push_str(self.conflict.as_sql(), false);
        self.sql.push_str("INTO ", false);
        self.sql.push_str(&self.table, false);
        self.sql.push_str(" ", false);

        if let Some(select) = self.select.as_mut() {
            let nested = select.render();
            self.sql.push_str(&nested, false);
        } else {
            self.sql.push_joined_parens(&self.columns, ",", false);
            self.sql.push_str(" VALUES ", false);
            self.sql.push_joined_parens(&self.values, ",", false);
        }

        let out = self.sql.to_string();
        trace!(sql = %out, "rendered insert");
        out
    }
}

// Equality covers accumulated state only, not the scratch buffer.
impl PartialEq for Insert {
    fn eq(&self, other: &Self) -> bool {
        self.quote_style() == other.quote_style()
            && self.conflict == other.conflict
            && self.table == other.table
            && self.columns == other.columns
            && self.values == other.values
            && self.select == other.select
    }
}

impl Eq for Insert {}
