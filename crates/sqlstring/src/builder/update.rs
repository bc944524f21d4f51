//! UPDATE statement builder.

use tracing::trace;

use super::fragment::SqlString;
use crate::dialect::QuoteStyle;

/// An assignment in the SET clause.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Assignment {
    column: String,
    value: String,
    quoted: bool,
}

/// An UPDATE statement builder.
///
/// Values are quoted at render time when flagged. Like [`Select`], the
/// `WHERE` keyword is always written even without a predicate.
///
/// [`Select`]: super::Select
///
/// # Example
///
/// ```rust
/// use sqlstring::{QuoteStyle, Update};
///
/// let mut update = Update::new(QuoteStyle::Single);
/// update
///     .table("t1")
///     .set("name", "Bruce", true)
///     .set("salary", "100000", false)
///     .where_clause("id = 7");
///
/// assert_eq!(
///     update.render(),
///     "UPDATE t1 SET name = 'Bruce', salary = 100000 WHERE id = 7"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Update {
    sql: SqlString,
    table: String,
    assignments: Vec<Assignment>,
    where_clause: String,
}

impl Update {
    /// Creates an empty UPDATE builder.
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

    /// Appends a `column = value` assignment.
    pub fn set(
        &mut self,
        column: impl Into<String>,
        value: impl Into<String>,
        quoted: bool,
    ) -> &mut Self {
        self.assignments.push(Assignment {
            column: column.into(),
            value: value.into(),
            quoted,
        });
        self
    }

    /// Sets the predicate, replacing any previous one.
    pub fn where_clause(&mut self, predicate: impl Into<String>) -> &mut Self {
        self.where_clause = predicate.into();
        self
    }

    /// Clears all accumulated state. The quote style is kept.
    pub fn reset(&mut self) {
        *self = Self::new(self.quote_style());
    }

    /// Renders the statement.
    pub fn render(&mut self) -> String {
        self.sql.reset();
        self.sql.push_str("UPDATE ", false);
        self.sql.push_str(&self.table, false);
        self.sql.push_str(" SET ", false);

        let last = self.assignments.len().saturating_sub(1);
        for (i, a) in self.assignments.iter().enumerate() {
            let comma = i < last;
            self.sql.push_str(&a.column, false);
            self.sql.push_str(" = ", false);
            if a.quoted {
                self.sql.push_quoted(&a.value, comma);
            } else {
                self.sql.push_str(&a.value, comma);
            }
            if comma {
                self.sql.push_str(" ", false);
            }
        }

        self.sql.push_str(" WHERE ", false);
        self.sql.push_str(&self.where_clause, false);

        let out = self.sql.to_string();
        trace!(sql = %out, "rendered update");
        out
    }
}

// Equality covers accumulated state only, not the scratch buffer.
impl PartialEq for Update {
    fn eq(&self, other: &Self) -> bool {
        self.quote_style() == other.quote_style()
            && self.table == other.table
            && self.assignments == other.assignments
            && self.where_clause == other.where_clause
    }
}

impl Eq for Update {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_double_quotes() {
        let mut update = Update::new(QuoteStyle::Double);
        update
            .table("t1")
            .set("name", "Bruce", true)
            .set("position", "Engineer", true)
            .where_clause("position == 'engineer'");

        assert_eq!(
            update.render(),
            "UPDATE t1 SET name = \"Bruce\", position = \"Engineer\" WHERE position == 'engineer'"
        );
    }

    #[test]
    fn test_single_assignment_has_no_comma() {
        let mut update = Update::default();
        update.table("t").set("a", "1", false).where_clause("id = 1");

        assert_eq!(update.render(), "UPDATE t SET a = 1 WHERE id = 1");
    }

    #[test]
    fn test_comma_count() {
        let mut update = Update::default();
        update.table("t").where_clause("1 = 1");
        for i in 0..5 {
            update.set(format!("c{i}"), i.to_string(), false);
        }
        let sql = update.render();

        assert_eq!(sql.matches(',').count(), 4);
        assert!(sql.contains("c0 = 0, c1 = 1, c2 = 2, c3 = 3, c4 = 4 WHERE"));
    }

    #[test]
    fn test_empty_where_is_still_emitted() {
        let mut update = Update::default();
        update.table("t").set("a", "x", true);

        assert_eq!(update.render(), "UPDATE t SET a = 'x' WHERE ");
    }

    #[test]
    fn test_table_last_call_wins() {
        let mut update = Update::default();
        update
            .table("old")
            .table("new")
            .set("a", "1", false)
            .where_clause("1 = 1");

        assert_eq!(update.render(), "UPDATE new SET a = 1 WHERE 1 = 1");
    }

    #[test]
    fn test_reset_matches_fresh_builder() {
        let mut reused = Update::new(QuoteStyle::Double);
        reused.table("x").set("y", "z", true).where_clause("w");
        reused.render();
        reused.reset();
        reused.table("t").set("a", "b", true).where_clause("id = 1");

        let mut fresh = Update::new(QuoteStyle::Double);
        fresh.table("t").set("a", "b", true).where_clause("id = 1");

        assert_eq!(reused, fresh);
        assert_eq!(reused.render(), fresh.render());
    }
}
