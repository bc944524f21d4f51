//! Compound SELECT (UNION / INTERSECT / EXCEPT) builder.

use tracing::trace;

use super::options::Junction;
use super::select::Select;

/// Two SELECT statements joined by a set operation.
///
/// The halves are concatenated as text; column counts and types are not
/// checked. Each half keeps the quote style it was built with.
///
/// # Example
///
/// ```rust
/// use sqlstring::{Compound, Junction, Select};
///
/// let mut left = Select::default();
/// left.column("id").from("users").where_clause("active = 1");
/// let mut right = Select::default();
/// right.column("id").from("admins").where_clause("1 = 1");
///
/// let mut compound = Compound::new(Junction::UnionAll);
/// compound.left(left).right(right);
///
/// assert_eq!(
///     compound.render(),
///     "SELECT id FROM users WHERE active = 1 UNION ALL SELECT id FROM admins WHERE 1 = 1"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    initial_junction: Junction,
    junction: Junction,
    left: Select,
    right: Select,
}

impl Compound {
    /// Creates a compound builder with empty halves.
    #[must_use]
    pub fn new(junction: Junction) -> Self {
        Self {
            initial_junction: junction,
            junction,
            ..Self::default()
        }
    }

    /// Sets the left-hand SELECT.
    pub fn left(&mut self, select: Select) -> &mut Self {
        self.left = select;
        self
    }

    /// Sets the right-hand SELECT.
    pub fn right(&mut self, select: Select) -> &mut Self {
        self.right = select;
        self
    }

    /// Replaces the set operation.
    pub fn junction(&mut self, junction: Junction) -> &mut Self {
        self.junction = junction;
        self
    }

    /// Clears both halves and restores the junction given to [`Compound::new`].
    pub fn reset(&mut self) {
        *self = Self::new(self.initial_junction);
    }

    /// Renders the statement.
    pub fn render(&mut self) -> String {
        let mut out = self.left.render();
        out.push_str(self.junction.as_sql());
        out.push_str(&self.right.render());
        trace!(sql = %out, "rendered compound select");
        out
    }
}
