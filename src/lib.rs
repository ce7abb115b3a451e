//! tabfmt - Validate column-oriented tables and render them as text
//!
//! A table is an ordered mapping of column names to equally long columns.
//! Once validated it can be rendered in any of the [`TableFormat`] styles:
//! markdown, box-drawn grids, HTML, LaTeX, wiki markups and more.

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod sample;

pub use config::{Config, TableFormat};
pub use error::TableError;
pub use model::{CellValue, TabularData};
pub use output::{render, save_to_file};
pub use sample::SampleGenerator;
