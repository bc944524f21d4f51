//! # sqlstring
//!
//! A programmatic SQL statement builder. It assembles SQL text from
//! structured inputs and never talks to a database: hand the rendered string
//! to whatever client executes your SQL.
//!
//! This crate provides:
//! - [`SqlString`], an append-only fragment buffer with quoting helpers
//! - Statement builders for SELECT, compound SELECT, INSERT, UPDATE, DELETE,
//!   CREATE TABLE, CREATE INDEX and transaction control
//! - A [`QuoteStyle`] toggle between `'` and `"` for quoted literals
//!
//! Predicates are opaque strings written verbatim. Quoting wraps a value in
//! the quote character and nothing more; it is not an injection defense.
//!
//! ## Example
//!
//! ```rust
//! use sqlstring::{Insert, QuoteStyle, Select};
//!
//! let mut select = Select::new(QuoteStyle::Single);
//! select
//!     .column("c1")
//!     .column("c2")
//!     .from("t2")
//!     .where_clause("c2 = 'ID2'")
//!     .group_by("c2")
//!     .limit(10, 50);
//!
//! assert_eq!(
//!     select.render(),
//!     "SELECT c1, c2 FROM t2 WHERE c2 = 'ID2' GROUP BY c2 LIMIT 10 OFFSET 50"
//! );
//!
//! let mut insert = Insert::new(QuoteStyle::Single);
//! insert.table("t1").select(select);
//!
//! assert_eq!(
//!     insert.render(),
//!     "INSERT INTO t1 SELECT c1, c2 FROM t2 WHERE c2 = 'ID2' GROUP BY c2 LIMIT 10 OFFSET 50"
//! );
//! ```
//!
//! ## Rendering quirks
//!
//! - [`Select`] and [`Update`] always write `WHERE`, even with an empty
//!   predicate. [`Delete`] and [`CreateIndex`] omit it.
//! - [`CreateTable`] writes a column as `<name> <type>`. A primary key
//!   adds `  PRIMARY KEY ` and a default adds `  DEFAULT <value>`, so those
//!   keywords are preceded by two spaces.
//! - [`Delete`] writes a space after the table name and another before
//!   `WHERE`.

pub mod builder;
pub mod ddl;
pub mod dialect;
mod error;

pub use builder::{
    Compound, ConflictResolution, Delete, Insert, Junction, Select, SelectModifier, SqlString,
    Transaction, TransactionKind, Update,
};
pub use ddl::{ColumnDefinition, CreateIndex, CreateTable, DefaultValue, ForeignKey};
pub use dialect::QuoteStyle;
pub use error::{Error, Result};
