//! Statement builders.
//!
//! Every builder is a plain accumulator: construct it, call its `&mut self`
//! methods in any order, then call `render()` as often as needed. Rendering
//! reuses an internal [`SqlString`] scratch buffer that is cleared first, so
//! repeated renders of an unchanged builder produce identical text.
//!
//! # Example
//!
//! ```rust
//! use sqlstring::builder::{Delete, Select};
//! use sqlstring::QuoteStyle;
//!
//! let mut select = Select::new(QuoteStyle::Single);
//! select.column("id").from("users").where_clause("active = 1");
//! assert_eq!(select.render(), "SELECT id FROM users WHERE active = 1");
//!
//! let mut delete = Delete::new(QuoteStyle::Single);
//! delete.table("sessions");
//! assert_eq!(delete.render(), "DELETE FROM sessions ");
//! ```

mod compound;
mod delete;
mod fragment;
mod insert;
mod options;
mod select;
mod transaction;
mod update;

pub use compound::Compound;
pub use delete::Delete;
pub use fragment::SqlString;
pub use insert::Insert;
pub use options::{ConflictResolution, Junction, SelectModifier};
pub use select::Select;
pub use transaction::{Transaction, TransactionKind};
pub use update::Update;
