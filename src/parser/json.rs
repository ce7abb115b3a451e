//! JSON parser for column mappings and record arrays

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

use crate::model::{CellValue, TabularData};

use super::Parser;

/// Parser for JSON files.
///
/// Accepts either an object mapping column names to arrays of values, or an
/// array of record objects.
pub struct JsonParser;

impl Parser for JsonParser {
    fn parse(&self, path: &Path) -> Result<TabularData> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open JSON file: {}", path.display()))?;
        let reader = BufReader::new(file);

        let value: Value =
            serde_json::from_reader(reader).context("Failed to parse JSON file")?;

        match value {
            Value::Object(obj) if obj.values().all(Value::is_array) => from_column_object(obj),
            Value::Object(obj) => from_records(vec![Value::Object(obj)]),
            Value::Array(arr) => from_records(arr),
            _ => bail!("JSON must be an object of columns or an array of records"),
        }
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "json")
    }
}

/// `{"col": [..], ...}`: the column mapping as given, validated for shape
fn from_column_object(obj: serde_json::Map<String, Value>) -> Result<TabularData> {
    let mut data = IndexMap::with_capacity(obj.len());
    for (name, values) in obj {
        let Value::Array(values) = values else {
            bail!("Column {} is not an array", name);
        };
        data.insert(name, values.iter().map(|v| json_value_to_cell(Some(v))).collect());
    }
    Ok(TabularData::new(data)?)
}

/// `[{"col": v, ...}, ...]`: columns are the union of keys in first-seen order
fn from_records(array: Vec<Value>) -> Result<TabularData> {
    let mut column_names: IndexSet<String> = IndexSet::new();
    for item in &array {
        match item {
            Value::Object(obj) => column_names.extend(obj.keys().cloned()),
            other => bail!("Expected an array of objects, found {}", other),
        }
    }

    let mut data: IndexMap<String, Vec<CellValue>> = column_names
        .iter()
        .map(|name| (name.clone(), Vec::with_capacity(array.len())))
        .collect();

    for item in &array {
        if let Value::Object(obj) = item {
            for (name, values) in data.iter_mut() {
                values.push(json_value_to_cell(obj.get(name)));
            }
        }
    }

    Ok(TabularData::new(data)?)
}

fn json_value_to_cell(value: Option<&Value>) -> CellValue {
    match value {
        None | Some(Value::Null) => CellValue::Null,
        Some(Value::Bool(b)) => CellValue::Bool(*b),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                CellValue::Int(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        Some(Value::String(s)) => {
            if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                return CellValue::Date(date);
            }
            if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
                return CellValue::DateTime(dt);
            }
            CellValue::String(s.clone())
        }
        // Nested structures are kept as their JSON text
        Some(nested) => CellValue::String(nested.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;

    fn parse_str(contents: &str) -> Result<TabularData> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.json");
        std::fs::write(&path, contents).unwrap();
        JsonParser.parse(&path)
    }

    #[test]
    fn test_column_object_keeps_order() {
        let table = parse_str(r#"{"Name": ["Alice", "Bob"], "Age": [30, 45]}"#).unwrap();
        assert_eq!(table.column_names().collect::<Vec<_>>(), ["Name", "Age"]);
        assert_eq!(table.values("Age").unwrap(), [CellValue::Int(30), CellValue::Int(45)]);
    }

    #[test]
    fn test_column_object_shape_checked() {
        let err = parse_str(r#"{"Name": ["Alice"], "Age": [30, 45]}"#).unwrap_err();
        let shape = err.downcast_ref::<TableError>().unwrap();
        assert_eq!(shape.column(), Some("Age"));
    }

    #[test]
    fn test_records_fill_missing_with_null() {
        let table = parse_str(r#"[{"a": 1}, {"b": "x", "a": 2.5}]"#).unwrap();
        assert_eq!(table.column_names().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(table.values("b").unwrap(), [CellValue::Null, CellValue::from("x")]);
        assert_eq!(table.values("a").unwrap(), [CellValue::Int(1), CellValue::Float(2.5)]);
    }

    #[test]
    fn test_nested_values_kept_as_json() {
        let table = parse_str(r#"[{"tags": ["a", "b"], "meta": {"k": true}}]"#).unwrap();
        assert_eq!(table.values("tags").unwrap(), [CellValue::from(r#"["a","b"]"#)]);
        assert_eq!(table.values("meta").unwrap(), [CellValue::from(r#"{"k":true}"#)]);
    }

    #[test]
    fn test_scalar_rejected() {
        assert!(parse_str("42").is_err());
        assert!(parse_str("[1, 2]").is_err());
    }
}
