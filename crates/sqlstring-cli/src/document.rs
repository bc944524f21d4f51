//! JSON statement documents.
//!
//! A document is a single statement object or an array of them. Each object
//! names its statement with a `kind` field; the remaining fields mirror the
//! builder operations.
//!
//! ```json
//! [
//!   { "kind": "create_table", "table": "t1", "if_not_exists": true,
//!     "columns": [{ "name": "id", "type": "INTEGER", "primary_key": true }] },
//!   { "kind": "insert", "table": "t1",
//!     "values": [{ "column": "id", "value": "1" }] }
//! ]
//! ```

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use sqlstring::{
    Compound, ConflictResolution, CreateIndex, CreateTable, DefaultValue, Delete, Insert,
    Junction, QuoteStyle, Select, SelectModifier, Transaction, TransactionKind, Update,
};

use crate::error::{Error, Result};

/// One statement in a document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Statement {
    /// `SELECT ...`
    Select(SelectSpec),
    /// `SELECT ... UNION SELECT ...`
    Compound(CompoundSpec),
    /// `INSERT ...`
    Insert(InsertSpec),
    /// `UPDATE ...`
    Update(UpdateSpec),
    /// `DELETE ...`
    Delete(DeleteSpec),
    /// `CREATE TABLE ...`
    CreateTable(CreateTableSpec),
    /// `CREATE INDEX ...`
    CreateIndex(CreateIndexSpec),
    /// `BEGIN`/`COMMIT`/`ROLLBACK TRANSACTION`
    Transaction(TransactionSpec),
}

/// Fields of a SELECT statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectSpec {
    /// ALL/DISTINCT/UNIQUE modifier.
    pub modifier: SelectModifier,
    /// Result columns, in order.
    pub columns: Vec<String>,
    /// Source tables, in order.
    pub from: Vec<String>,
    /// Predicate, written verbatim.
    #[serde(rename = "where")]
    pub where_clause: String,
    /// GROUP BY keys.
    pub group_by: Vec<String>,
    /// ORDER BY keys.
    pub order_by: Vec<String>,
    /// Row limit; zero means no LIMIT or OFFSET.
    pub limit: u64,
    /// Rows to skip when a limit is set.
    pub offset: u64,
}

/// Fields of a compound SELECT.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompoundSpec {
    /// Set operation between the halves.
    #[serde(default)]
    pub junction: Junction,
    /// Left-hand SELECT.
    pub left: SelectSpec,
    /// Right-hand SELECT.
    pub right: SelectSpec,
}

/// A `column = value` pair for INSERT and UPDATE.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Assignment {
    /// Column name.
    pub column: String,
    /// Value text.
    pub value: String,
    /// Whether the value is wrapped in the quote character.
    #[serde(default)]
    pub quoted: bool,
}

/// Fields of an INSERT statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InsertSpec {
    /// Target table.
    pub table: String,
    /// OR REPLACE / OR IGNORE clause.
    pub conflict: ConflictResolution,
    /// Column/value pairs.
    pub values: Vec<Assignment>,
    /// Row source; takes precedence over `values`.
    pub select: Option<SelectSpec>,
}

/// Fields of an UPDATE statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateSpec {
    /// Target table.
    pub table: String,
    /// Assignments, in render order.
    pub set: Vec<Assignment>,
    /// Predicate, written verbatim.
    #[serde(rename = "where")]
    pub where_clause: String,
}

/// Fields of a DELETE statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeleteSpec {
    /// Target table.
    pub table: String,
    /// Predicate; empty deletes every row.
    #[serde(rename = "where")]
    pub where_clause: String,
}

/// A column default. `value` may be any JSON scalar; strings are used as-is
/// and other values are written in their JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DefaultSpec {
    /// Default value as a JSON scalar.
    pub value: Value,
    /// Whether the value is quoted.
    #[serde(default)]
    pub quoted: bool,
}

impl From<&DefaultSpec> for DefaultValue {
    fn from(spec: &DefaultSpec) -> Self {
        match &spec.value {
            Value::String(s) => Self::new(s, spec.quoted),
            other => Self::new(other, spec.quoted),
        }
    }
}

/// A column in a CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnSpec {
    /// Column name.
    pub name: String,
    /// Type literal.
    #[serde(rename = "type")]
    pub data_type: String,
    /// Marks the primary key; overrides `default`.
    #[serde(default)]
    pub primary_key: bool,
    /// Optional default value.
    #[serde(default)]
    pub default: Option<DefaultSpec>,
}

/// A foreign key in a CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ForeignKeySpec {
    /// Columns in this table.
    pub columns: Vec<String>,
    /// Referenced table.
    pub references_table: String,
    /// Referenced columns.
    pub references_columns: Vec<String>,
}

/// Fields of a CREATE TABLE statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateTableSpec {
    /// Table name.
    pub table: String,
    /// Adds IF NOT EXISTS.
    pub if_not_exists: bool,
    /// Column definitions.
    pub columns: Vec<ColumnSpec>,
    /// Foreign key constraints, in order.
    pub foreign_keys: Vec<ForeignKeySpec>,
}

/// Fields of a CREATE INDEX statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateIndexSpec {
    /// Index name.
    pub name: String,
    /// Indexed table.
    pub table: String,
    /// Indexed columns or expressions.
    pub columns: Vec<String>,
    /// Creates a UNIQUE index.
    pub unique: bool,
    /// Adds IF NOT EXISTS.
    pub if_not_exists: bool,
    /// Partial-index predicate.
    #[serde(rename = "where")]
    pub where_clause: String,
}

/// Fields of a transaction control statement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionSpec {
    /// BEGIN, COMMIT or ROLLBACK.
    pub action: TransactionKind,
}

impl SelectSpec {
    fn build(&self, quote: QuoteStyle) -> Select {
        let mut select = Select::new(quote);
        select
            .modifier(self.modifier)
            .where_clause(self.where_clause.as_str())
            .limit(self.limit, self.offset);
        for column in &self.columns {
            select.column(column.as_str());
        }
        for table in &self.from {
            select.from(table.as_str());
        }
        for key in &self.group_by {
            select.group_by(key.as_str());
        }
        for key in &self.order_by {
            select.order_by(key.as_str());
        }
        select
    }
}

impl Statement {
    /// Returns the statement kind as written in documents.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Select(_) => "select",
            Self::Compound(_) => "compound",
            Self::Insert(_) => "insert",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
            Self::CreateTable(_) => "create_table",
            Self::CreateIndex(_) => "create_index",
            Self::Transaction(_) => "transaction",
        }
    }

    /// Drives the matching builder and renders the statement.
    #[must_use]
    pub fn render(&self, quote: QuoteStyle) -> String {
        match self {
            Self::Select(spec) => spec.build(quote).render(),
            Self::Compound(spec) => {
                let mut compound = Compound::new(spec.junction);
                compound
                    .left(spec.left.build(quote))
                    .right(spec.right.build(quote));
                compound.render()
            }
            Self::Insert(spec) => {
                let mut insert = Insert::new(quote);
                insert.table(spec.table.as_str()).conflict(spec.conflict);
                for a in &spec.values {
                    insert.value(a.column.as_str(), a.value.as_str(), a.quoted);
                }
                if let Some(select) = &spec.select {
                    insert.select(select.build(quote));
                }
                insert.render()
            }
            Self::Update(spec) => {
                let mut update = Update::new(quote);
                update
                    .table(spec.table.as_str())
                    .where_clause(spec.where_clause.as_str());
                for a in &spec.set {
                    update.set(a.column.as_str(), a.value.as_str(), a.quoted);
                }
                update.render()
            }
            Self::Delete(spec) => {
                let mut delete = Delete::new(quote);
                delete
                    .table(spec.table.as_str())
                    .where_clause(spec.where_clause.as_str());
                delete.render()
            }
            Self::CreateTable(spec) => {
                let mut create = CreateTable::new(quote, spec.if_not_exists);
                create.table(spec.table.as_str());
                for c in &spec.columns {
                    create.column(
                        c.name.as_str(),
                        c.data_type.as_str(),
                        c.primary_key,
                        c.default.as_ref().map(DefaultValue::from),
                    );
                }
                for fk in &spec.foreign_keys {
                    create.foreign_key(
                        &fk.columns,
                        fk.references_table.as_str(),
                        &fk.references_columns,
                    );
                }
                create.render()
            }
            Self::CreateIndex(spec) => {
                let mut index = CreateIndex::new(quote, spec.unique, spec.if_not_exists);
                index
                    .name(spec.name.as_str())
                    .table(spec.table.as_str())
                    .where_clause(spec.where_clause.as_str());
                for column in &spec.columns {
                    index.column(column.as_str());
                }
                index.render()
            }
            Self::Transaction(spec) => Transaction::new(spec.action).render(),
        }
    }
}

/// Parses a document holding one statement object or an array of them.
///
/// # Errors
///
/// Returns [`Error::Json`] for malformed JSON or statements and
/// [`Error::EmptyDocument`] for an empty array.
pub fn parse_document(text: &str) -> Result<Vec<Statement>> {
    let value: Value = serde_json::from_str(text)?;
    let statements = match value {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<Statement>, _>>()?,
        other => vec![serde_json::from_value(other)?],
    };
    if statements.is_empty() {
        return Err(Error::EmptyDocument);
    }
    debug!(count = statements.len(), "parsed statement document");
    Ok(statements)
}

/// Renders every statement, optionally wrapped in a transaction. Each entry
/// carries its terminating `;`.
#[must_use]
pub fn render_all(statements: &[Statement], quote: QuoteStyle, transaction: bool) -> Vec<String> {
    let mut out = Vec::with_capacity(statements.len() + 2);
    if transaction {
        out.push(Transaction::new(TransactionKind::Begin).render());
    }
    for statement in statements {
        debug!(kind = statement.kind(), "rendering statement");
        out.push(statement.render(quote));
    }
    if transaction {
        out.push(Transaction::new(TransactionKind::Commit).render());
    }
    out.into_iter().map(|sql| format!("{sql};")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_select_object() {
        let doc = r#"{
            "kind": "select",
            "columns": ["c1", "c2"],
            "from": ["t2"],
            "where": "c2 = 'ID2'",
            "group_by": ["c2"],
            "limit": 10,
            "offset": 50
        }"#;
        let statements = parse_document(doc).unwrap();

        assert_eq!(statements.len(), 1);
        assert_eq!(
            statements[0].render(QuoteStyle::Single),
            "SELECT c1, c2 FROM t2 WHERE c2 = 'ID2' GROUP BY c2 LIMIT 10 OFFSET 50"
        );
    }

    #[test]
    fn test_insert_quoting_follows_cli_quote_style() {
        let doc = r#"{
            "kind": "insert",
            "table": "t1",
            "values": [
                {"column": "name", "value": "Bruce", "quoted": true},
                {"column": "salary", "value": "100000"}
            ]
        }"#;
        let statements = parse_document(doc).unwrap();

        assert_eq!(
            statements[0].render(QuoteStyle::Double),
            "INSERT INTO t1 (name,salary) VALUES (\"Bruce\",100000)"
        );
    }

    #[test]
    fn test_insert_select_and_conflict() {
        let doc = r#"{
            "kind": "insert",
            "table": "t1",
            "conflict": "replace",
            "select": {"columns": ["c1"], "from": ["t2"], "where": "1 = 1"}
        }"#;
        let statements = parse_document(doc).unwrap();

        assert_eq!(
            statements[0].render(QuoteStyle::Single),
            "INSERT OR REPLACE INTO t1 SELECT c1 FROM t2 WHERE 1 = 1"
        );
    }

    #[test]
    fn test_create_table_defaults_accept_numbers() {
        let doc = r#"{
            "kind": "create_table",
            "table": "t3",
            "if_not_exists": true,
            "columns": [
                {"name": "c1", "type": "TEXT", "primary_key": true},
                {"name": "c2", "type": "INTEGER", "default": {"value": "CURRENT_TIMESTAMP"}},
                {"name": "c3", "type": "INTEGER", "default": {"value": 7}},
                {"name": "c4", "type": "TEXT", "default": {"value": "x", "quoted": true}}
            ],
            "foreign_keys": [
                {"columns": ["c3"], "references_table": "t1", "references_columns": ["id"]}
            ]
        }"#;
        let statements = parse_document(doc).unwrap();

        assert_eq!(
            statements[0].render(QuoteStyle::Single),
            "CREATE TABLE IF NOT EXISTS t3(c1 TEXT  PRIMARY KEY , c2 INTEGER  DEFAULT CURRENT_TIMESTAMP, \
             c3 INTEGER  DEFAULT 7, c4 TEXT  DEFAULT 'x', FOREIGN KEY (c3) REFERENCES t1(id))"
        );
    }

    #[test]
    fn test_mixed_document_with_transaction() {
        let doc = r#"[
            {"kind": "update", "table": "t", "set": [{"column": "a", "value": "1"}], "where": "id = 1"},
            {"kind": "delete", "table": "t"},
            {"kind": "create_index", "name": "i", "table": "t", "columns": ["a"], "unique": true},
            {"kind": "compound", "junction": "intersect",
             "left": {"columns": ["a"], "from": ["t"], "where": "1 = 1"},
             "right": {"columns": ["a"], "from": ["u"], "where": "1 = 1"}},
            {"kind": "transaction", "action": "rollback"}
        ]"#;
        let statements = parse_document(doc).unwrap();
        let rendered = render_all(&statements, QuoteStyle::Single, true);

        assert_eq!(
            rendered,
            vec![
                "BEGIN TRANSACTION;",
                "UPDATE t SET a = 1 WHERE id = 1;",
                "DELETE FROM t ;",
                "CREATE UNIQUE INDEX i ON t(a);",
                "SELECT a FROM t WHERE 1 = 1 INTERSECT SELECT a FROM u WHERE 1 = 1;",
                "ROLLBACK TRANSACTION;",
                "COMMIT TRANSACTION;",
            ]
        );
    }

    #[test]
    fn test_empty_array_is_rejected() {
        assert!(matches!(parse_document("[]"), Err(Error::EmptyDocument)));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = parse_document(r#"{"kind": "merge"}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_unknown_option_value_is_rejected() {
        let doc = r#"{"kind": "compound", "junction": "minus", "left": {}, "right": {}}"#;
        assert!(matches!(parse_document(doc), Err(Error::Json(_))));
    }
}
