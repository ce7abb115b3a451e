//! Parser layer for loading tables from files

mod csv;
mod json;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Result};
use log::debug;

use crate::model::TabularData;

pub use self::csv::CsvParser;
pub use self::json::JsonParser;

/// Trait for parsing tabular data files
pub trait Parser: Send + Sync {
    /// Parse a file into a validated table
    fn parse(&self, path: &Path) -> Result<TabularData>;

    /// Check if this parser can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool;
}

/// Factory for picking a parser from the file extension
pub struct ParserFactory {
    parsers: Vec<Box<dyn Parser>>,
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserFactory {
    /// Create a new parser factory with all supported parsers
    pub fn new() -> Self {
        Self {
            parsers: vec![Box::new(CsvParser), Box::new(JsonParser)],
        }
    }

    /// Get a parser for the given file path.
    ///
    /// Files without an extension are sniffed by content.
    pub fn get_parser(&self, path: &Path) -> Result<&dyn Parser> {
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext.to_lowercase(),
            None => detect_format(path).unwrap_or("csv").to_string(),
        };

        for parser in &self.parsers {
            if parser.supports_extension(&ext) {
                return Ok(parser.as_ref());
            }
        }

        bail!("Unsupported file format: {}", ext)
    }

    /// Parse a file using the appropriate parser
    pub fn parse(&self, path: &Path) -> Result<TabularData> {
        let parser = self.get_parser(path)?;
        let table = parser.parse(path)?;
        debug!(
            "loaded {} columns x {} rows from {}",
            table.column_count(),
            table.row_count(),
            path.display()
        );
        Ok(table)
    }
}

/// Detect file format from the first non-blank line
pub fn detect_format(path: &Path) -> Option<&'static str> {
    let file = File::open(path).ok()?;
    let reader = BufReader::new(file);

    for line in reader.lines() {
        let line = line.ok()?;
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') || trimmed.starts_with('{') {
            return Some("json");
        }
        return Some("csv");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_dispatch() {
        let factory = ParserFactory::new();
        assert!(factory.get_parser(Path::new("a.CSV")).is_ok());
        assert!(factory.get_parser(Path::new("a.json")).is_ok());
        let err = factory.get_parser(Path::new("a.parquet")).err().unwrap();
        assert!(err.to_string().contains("Unsupported file format: parquet"));
    }

    #[test]
    fn test_sniff_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data");
        std::fs::write(&path, "\n  {\"a\": [1, 2]}\n").unwrap();
        assert_eq!(detect_format(&path), Some("json"));

        let table = ParserFactory::new().parse(&path).unwrap();
        assert_eq!(table.row_count(), 2);

        std::fs::write(&path, "a,b\n1,2\n").unwrap();
        assert_eq!(detect_format(&path), Some("csv"));
    }
}
