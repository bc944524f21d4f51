//! CREATE TABLE builder.

use std::fmt;

use tracing::trace;

use crate::builder::SqlString;
use crate::dialect::QuoteStyle;

/// Default value for a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultValue {
    /// The value text.
    pub value: String,
    /// Whether the value is wrapped in the quote character.
    pub quoted: bool,
}

impl DefaultValue {
    /// Creates a default from any displayable value.
    #[must_use]
    pub fn new(value: impl fmt::Display, quoted: bool) -> Self {
        Self {
            value: value.to_string(),
            quoted,
        }
    }

    /// A default written verbatim, e.g. `CURRENT_TIMESTAMP` or `0`.
    #[must_use]
    pub fn raw(value: impl fmt::Display) -> Self {
        Self::new(value, false)
    }

    /// A default written as a quoted literal.
    #[must_use]
    pub fn quoted(value: impl fmt::Display) -> Self {
        Self::new(value, true)
    }
}

/// A column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    /// Column name.
    pub name: String,
    /// Type literal, written as given (e.g. `TEXT`, `VARCHAR(255)`).
    pub data_type: String,
    /// Whether this is the primary key. Takes precedence over `default`.
    pub primary_key: bool,
    /// Default value, if any.
    pub default: Option<DefaultValue>,
}

impl ColumnDefinition {
    /// Creates a plain column definition.
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            primary_key: false,
            default: None,
        }
    }

    /// Marks the column as the primary key.
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    fn write(&self, sql: &mut SqlString) {
        sql.push_str(&self.name, false);
        sql.push_str(" ", false);
        sql.push_str(&self.data_type, false);
        if self.primary_key {
            sql.push_str("  PRIMARY KEY ", false);
        } else if let Some(default) = &self.default {
            sql.push_str("  DEFAULT ", false);
            if default.quoted {
                sql.push_quoted(&default.value, false);
            } else {
                sql.push_str(&default.value, false);
            }
        }
    }
}

/// A table-level foreign key constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    /// Columns in this table.
    pub columns: Vec<String>,
    /// Referenced table.
    pub references_table: String,
    /// Referenced columns.
    pub references_columns: Vec<String>,
}

/// A CREATE TABLE builder.
///
/// # Example
///
/// ```rust
/// use sqlstring::{CreateTable, DefaultValue, QuoteStyle};
///
/// let mut create = CreateTable::new(QuoteStyle::Single, true);
/// create
///     .table("t3")
///     .column("c1", "TEXT", true, None)
///     .column("c2", "INTEGER", false, Some(DefaultValue::raw("CURRENT_TIMESTAMP")));
///
/// assert_eq!(
///     create.render(),
///     "CREATE TABLE IF NOT EXISTS t3(c1 TEXT  PRIMARY KEY , c2 INTEGER  DEFAULT CURRENT_TIMESTAMP)"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CreateTable {
    sql: SqlString,
    if_not_exists: bool,
    table: String,
    columns: Vec<ColumnDefinition>,
    foreign_keys: Vec<ForeignKey>,
}

impl CreateTable {
    /// Creates an empty CREATE TABLE builder.
    #[must_use]
    pub fn new(quote: QuoteStyle, if_not_exists: bool) -> Self {
        Self {
            sql: SqlString::new(quote),
            if_not_exists,
            ..Self::default()
        }
    }

    /// Returns the quote style this builder was created with.
    #[must_use]
    pub const fn quote_style(&self) -> QuoteStyle {
        self.sql.quote_style()
    }

    /// Sets the table name, replacing any previous one.
    pub fn table(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = table.into();
        self
    }

    /// Adds a column. A default is ignored when `primary_key` is set.
    pub fn column(
        &mut self,
        name: impl Into<String>,
        data_type: impl Into<String>,
        primary_key: bool,
        default: Option<DefaultValue>,
    ) -> &mut Self {
        self.columns.push(ColumnDefinition {
            name: name.into(),
            data_type: data_type.into(),
            primary_key,
            default,
        });
        self
    }

    /// Adds a prepared column definition.
    pub fn column_def(&mut self, column: ColumnDefinition) -> &mut Self {
        self.columns.push(column);
        self
    }

    /// Adds a `FOREIGN KEY (...) REFERENCES table(...)` constraint.
    pub fn foreign_key<S: AsRef<str>, R: AsRef<str>>(
        &mut self,
        columns: &[S],
        references_table: impl Into<String>,
        references_columns: &[R],
    ) -> &mut Self {
        self.foreign_keys.push(ForeignKey {
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            references_table: references_table.into(),
            references_columns: references_columns
                .iter()
                .map(|c| c.as_ref().to_string())
                .collect(),
        });
        self
    }

    /// Clears the table, columns and foreign keys. Construction flags are kept.
    pub fn reset(&mut self) {
        *self = Self::new(self.quote_style(), self.if_not_exists);
    }

    /// Renders the statement.
    pub fn render(&mut self) -> String {
        let quote = self.quote_style();
        let columns: Vec<String> = self
            .columns
            .iter()
            .map(|c| {
                let mut col = SqlString::new(quote);
                c.write(&mut col);
                col.into_string()
            })
            .collect();

        self.sql.reset();
        self.sql.push_str("CREATE TABLE ", false);
        if self.if_not_exists {
            self.sql.push_str("IF NOT EXISTS ", false);
        }
        self.sql.push_str(&self.table, false);

        if self.foreign_keys.is_empty() {
            self.sql.push_joined_parens(&columns, ", ", false);
        } else {
            self.sql.push_str("(", false);
            self.sql.push_joined(&columns, ", ", false);
            for fk in &self.foreign_keys {
                self.sql.push_str(", FOREIGN KEY ", false);
                self.sql.push_joined_parens(&fk.columns, ", ", false);
                self.sql.push_str(" REFERENCES ", false);
                self.sql.push_str(&fk.references_table, false);
                self.sql.push_joined_parens(&fk.references_columns, ", ", false);
            }
            self.sql.push_str(")", false);
        }

        let out = self.sql.to_string();
        trace!(sql = %out, "rendered create table");
        out
    }
}

// Equality covers accumulated state only, not the scratch buffer.
impl PartialEq for CreateTable {
    fn eq(&self, other: &Self) -> bool {
        self.quote_style() == other.quote_style()
            && self.if_not_exists == other.if_not_exists
            && self.table == other.table
            && self.columns == other.columns
            && self.foreign_keys == other.foreign_keys
    }
}

impl Eq for CreateTable {}
