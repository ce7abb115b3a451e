//! Validated column-oriented table and its cell values

use std::borrow::Cow;

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;

use super::schema::{CellType, Column};
use crate::error::TableError;

/// A cell value with type information
#[derive(Debug, Clone)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => true,
            (CellValue::Bool(a), CellValue::Bool(b)) => a == b,
            (CellValue::Int(a), CellValue::Int(b)) => a == b,
            (CellValue::Float(a), CellValue::Float(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (CellValue::String(a), CellValue::String(b)) => a == b,
            (CellValue::Date(a), CellValue::Date(b)) => a == b,
            (CellValue::DateTime(a), CellValue::DateTime(b)) => a == b,
            _ => false,
        }
    }
}

impl CellValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Text shown in a rendered cell; null renders as an empty cell
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            CellValue::Null => Cow::Borrowed(""),
            CellValue::Bool(b) => Cow::Owned(b.to_string()),
            CellValue::Int(i) => Cow::Owned(i.to_string()),
            CellValue::Float(f) => Cow::Owned(f.to_string()),
            CellValue::String(s) => Cow::Borrowed(s.as_str()),
            CellValue::Date(d) => Cow::Owned(d.to_string()),
            CellValue::DateTime(dt) => Cow::Owned(dt.to_string()),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

/// A table validated to have columns of equal length.
///
/// Columns keep their insertion order. Once built the table cannot be
/// mutated; renderers only borrow it.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularData {
    data: IndexMap<String, Vec<CellValue>>,
    columns: Vec<Column>,
    row_count: usize,
}

impl TabularData {
    /// Validate a column mapping.
    ///
    /// Every column must hold as many values as the first one; the first
    /// column that does not is reported. An empty mapping is a valid table
    /// with no columns and no rows.
    pub fn new(data: IndexMap<String, Vec<CellValue>>) -> Result<Self, TableError> {
        let row_count = data.values().next().map_or(0, Vec::len);

        if let Some((name, values)) = data.iter().find(|(_, v)| v.len() != row_count) {
            return Err(TableError::InvalidShape {
                column: name.clone(),
                expected: row_count,
                found: values.len(),
            });
        }

        let columns = data
            .iter()
            .enumerate()
            .map(|(i, (name, values))| Column::with_type(name.clone(), i, CellType::infer(values)))
            .collect();

        Ok(Self {
            data,
            columns,
            row_count,
        })
    }

    /// Build from `(name, values)` pairs, rejecting repeated names
    pub fn from_columns<I, K, V, C>(columns: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = C>,
        C: Into<CellValue>,
    {
        let mut data = IndexMap::new();
        for (name, values) in columns {
            let name = name.into();
            if data.contains_key(&name) {
                return Err(TableError::DuplicateColumn(name));
            }
            data.insert(name, values.into_iter().map(Into::into).collect());
        }
        Self::new(data)
    }

    /// Column metadata in insertion order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get column metadata by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.data.get_index_of(name).map(|i| &self.columns[i])
    }

    /// Values of a column by name
    pub fn values(&self, name: &str) -> Option<&[CellValue]> {
        self.data.get(name).map(Vec::as_slice)
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.data.len()
    }

    /// True when the table has no columns
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Rows formed by zipping the columns, in row order
    pub fn rows(&self) -> impl Iterator<Item = Vec<&CellValue>> + '_ {
        (0..self.row_count).map(move |i| self.data.values().map(|col| &col[i]).collect())
    }

    /// The underlying column mapping
    pub fn as_map(&self) -> &IndexMap<String, Vec<CellValue>> {
        &self.data
    }

    /// Consume the table, returning the column mapping
    pub fn into_inner(self) -> IndexMap<String, Vec<CellValue>> {
        self.data
    }
}
