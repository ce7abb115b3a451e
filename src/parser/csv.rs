//! CSV file parser

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;

use crate::model::{CellValue, TabularData};

use super::Parser;

/// Parser for CSV files (tab-delimited for `.tsv`)
pub struct CsvParser;

impl Parser for CsvParser {
    fn parse(&self, path: &Path) -> Result<TabularData> {
        let file =
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
        let delimiter = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
            _ => b',',
        };
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(BufReader::new(file));

        let headers = csv_reader
            .headers()
            .context("Failed to read CSV headers")?
            .clone();

        let mut columns: Vec<(String, Vec<CellValue>)> = Vec::with_capacity(headers.len());
        for name in headers.iter() {
            if columns.iter().any(|(existing, _)| existing == name) {
                bail!("Duplicate column in CSV header: {}", name);
            }
            columns.push((name.to_string(), Vec::new()));
        }

        for (line_num, result) in csv_reader.records().enumerate() {
            let line = line_num + 2; // 1-indexed, after the header
            let record = result.with_context(|| format!("Failed to read CSV row {}", line))?;

            if record.len() > columns.len() {
                bail!(
                    "CSV row {} has {} fields but the header has {}",
                    line,
                    record.len(),
                    columns.len()
                );
            }

            // Short rows are padded with nulls
            for (i, (_, values)) in columns.iter_mut().enumerate() {
                values.push(record.get(i).map_or(CellValue::Null, parse_cell_value));
            }
        }

        let data: IndexMap<String, Vec<CellValue>> = columns.into_iter().collect();
        Ok(TabularData::new(data)?)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "csv" | "tsv" | "txt")
    }
}

/// Parse a string value into a CellValue with type inference
fn parse_cell_value(s: &str) -> CellValue {
    let trimmed = s.trim();

    // Check for empty/null
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") || trimmed == "NA" {
        return CellValue::Null;
    }

    if trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("yes") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("no") {
        return CellValue::Bool(false);
    }

    if let Ok(i) = trimmed.parse::<i64>() {
        return CellValue::Int(i);
    }

    if let Ok(f) = trimmed.parse::<f64>() {
        return CellValue::Float(f);
    }

    if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return CellValue::Date(date);
    }

    // ISO 8601, with either separator
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return CellValue::DateTime(dt);
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return CellValue::DateTime(dt);
    }

    CellValue::String(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(contents: &str, file_name: &str) -> Result<TabularData> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(file_name);
        std::fs::write(&path, contents).unwrap();
        CsvParser.parse(&path)
    }

    #[test]
    fn test_parse_cell_value() {
        assert_eq!(parse_cell_value(""), CellValue::Null);
        assert_eq!(parse_cell_value("null"), CellValue::Null);
        assert_eq!(parse_cell_value("true"), CellValue::Bool(true));
        assert_eq!(parse_cell_value("false"), CellValue::Bool(false));
        assert_eq!(parse_cell_value("42"), CellValue::Int(42));
        assert_eq!(parse_cell_value("3.14"), CellValue::Float(3.14));
        assert_eq!(
            parse_cell_value("2024-02-29"),
            CellValue::Date(chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        assert_eq!(parse_cell_value("hello"), CellValue::from("hello"));
    }

    #[test]
    fn test_columns_from_records() {
        let table = parse_str("Name,Age\nAlice,30\nBob\n", "people.csv").unwrap();
        assert_eq!(table.column_names().collect::<Vec<_>>(), ["Name", "Age"]);
        assert_eq!(
            table.values("Age").unwrap(),
            [CellValue::Int(30), CellValue::Null]
        );
    }

    #[test]
    fn test_tsv_delimiter() {
        let table = parse_str("a\tb\n1\tx\n", "data.tsv").unwrap();
        assert_eq!(table.values("b").unwrap(), [CellValue::from("x")]);
    }

    #[test]
    fn test_long_row_rejected() {
        let err = parse_str("a,b\n1,2,3\n", "bad.csv").unwrap_err();
        assert!(err.to_string().contains("CSV row 2 has 3 fields"));
    }

    #[test]
    fn test_duplicate_header_rejected() {
        let err = parse_str("a,a\n1,2\n", "dup.csv").unwrap_err();
        assert!(err.to_string().contains("Duplicate column"));
    }
}
