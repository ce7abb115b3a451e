//! Data model for column-oriented tables

mod schema;
mod table;

pub use schema::{CellType, Column};
pub use table::{CellValue, TabularData};
