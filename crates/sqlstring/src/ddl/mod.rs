//! Schema definition builders: CREATE TABLE and CREATE INDEX.

mod create_index;
mod create_table;

pub use create_index::CreateIndex;
pub use create_table::{ColumnDefinition, CreateTable, DefaultValue, ForeignKey};
