//! Rendering tables into text formats

mod grid;
mod html;
mod latex;
mod markup;
mod ruled;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;
use unicode_width::UnicodeWidthStr;

use crate::config::TableFormat;
use crate::error::TableError;
use crate::model::TabularData;

pub use grid::{GridOutput, GridStyle};
pub use html::HtmlOutput;
pub use latex::{LatexFlavor, LatexOutput};
pub use markup::{MarkupOutput, MarkupStyle};
pub use ruled::{RuleSet, RuledOutput};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render a non-empty table to a writer
    fn render(&self, table: &TabularData, writer: &mut dyn Write) -> io::Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter for a table format
    pub fn create(format: TableFormat) -> Box<dyn OutputFormatter> {
        match format {
            TableFormat::Plain => Box::new(GridOutput::new(GridStyle::Blank)),
            TableFormat::Simple => Box::new(RuledOutput::new(RuleSet::SIMPLE)),
            TableFormat::Github | TableFormat::Pipe => Box::new(GridOutput::new(GridStyle::Markdown)),
            TableFormat::Grid | TableFormat::Pretty => Box::new(GridOutput::new(GridStyle::Ascii)),
            TableFormat::SimpleGrid => Box::new(GridOutput::new(GridStyle::Modern)),
            TableFormat::RoundedGrid => Box::new(RuledOutput::new(RuleSet::ROUNDED_GRID)),
            TableFormat::HeavyGrid => Box::new(RuledOutput::new(RuleSet::HEAVY_GRID)),
            TableFormat::MixedGrid => Box::new(RuledOutput::new(RuleSet::MIXED_GRID)),
            TableFormat::DoubleGrid => Box::new(RuledOutput::new(RuleSet::DOUBLE_GRID)),
            TableFormat::FancyGrid => Box::new(GridOutput::new(GridStyle::Extended)),
            TableFormat::Outline => Box::new(RuledOutput::new(RuleSet::OUTLINE)),
            TableFormat::SimpleOutline => Box::new(GridOutput::new(GridStyle::Sharp)),
            TableFormat::RoundedOutline => Box::new(GridOutput::new(GridStyle::Rounded)),
            TableFormat::HeavyOutline => Box::new(RuledOutput::new(RuleSet::HEAVY_OUTLINE)),
            TableFormat::MixedOutline => Box::new(RuledOutput::new(RuleSet::MIXED_OUTLINE)),
            TableFormat::DoubleOutline => Box::new(RuledOutput::new(RuleSet::DOUBLE_OUTLINE)),
            TableFormat::FancyOutline => Box::new(RuledOutput::new(RuleSet::FANCY_OUTLINE)),
            TableFormat::Orgtbl => Box::new(RuledOutput::new(RuleSet::ORGTBL)),
            TableFormat::Presto => Box::new(GridOutput::new(GridStyle::Psql)),
            TableFormat::Psql => Box::new(RuledOutput::new(RuleSet::PSQL)),
            TableFormat::Rst => Box::new(GridOutput::new(GridStyle::ReStructuredText)),
            TableFormat::Asciidoc => Box::new(MarkupOutput::new(MarkupStyle::Asciidoc)),
            TableFormat::Jira => Box::new(MarkupOutput::new(MarkupStyle::Jira)),
            TableFormat::Mediawiki => Box::new(MarkupOutput::new(MarkupStyle::Mediawiki)),
            TableFormat::Moinmoin => Box::new(MarkupOutput::new(MarkupStyle::Moinmoin)),
            TableFormat::Youtrack => Box::new(MarkupOutput::new(MarkupStyle::Youtrack)),
            TableFormat::Textile => Box::new(MarkupOutput::new(MarkupStyle::Textile)),
            TableFormat::Tsv => Box::new(MarkupOutput::new(MarkupStyle::Tsv)),
            TableFormat::Html => Box::new(HtmlOutput::new()),
            TableFormat::UnsafeHtml => Box::new(HtmlOutput::unescaped()),
            TableFormat::Latex => Box::new(LatexOutput::new(LatexFlavor::Escaped)),
            TableFormat::LatexRaw => Box::new(LatexOutput::new(LatexFlavor::Raw)),
            TableFormat::LatexBooktabs => Box::new(LatexOutput::new(LatexFlavor::Booktabs)),
            TableFormat::LatexLongtable => Box::new(LatexOutput::new(LatexFlavor::Longtable)),
        }
    }
}

/// Write a table in the given format. A table without columns writes nothing.
pub fn write_table(table: &TabularData, format: TableFormat, writer: &mut dyn Write) -> io::Result<()> {
    if table.is_empty() {
        return Ok(());
    }
    OutputFactory::create(format).render(table, writer)
}

/// Render a table to a string
pub fn render(table: &TabularData, format: TableFormat) -> Result<String, TableError> {
    let mut buf = Vec::new();
    write_table(table, format, &mut buf)?;
    String::from_utf8(buf).map_err(|e| TableError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Render a table and write it to `path`, replacing any existing file.
///
/// The file is closed on every exit path. A failure part way through leaves
/// whatever was already written.
pub fn save_to_file(table: &TabularData, path: &Path, format: TableFormat) -> Result<(), TableError> {
    let rendered = render(table, format)?;
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    debug!("wrote {} bytes of {} table to {}", rendered.len(), format, path.display());
    Ok(())
}

/// Display strings for every cell, plus per-column layout hints
pub(crate) struct Cells {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub numeric: Vec<bool>,
}

impl Cells {
    pub fn from_table(table: &TabularData) -> Self {
        Self {
            headers: table.column_names().map(str::to_string).collect(),
            rows: table
                .rows()
                .map(|row| row.iter().map(|c| c.display().into_owned()).collect())
                .collect(),
            numeric: table
                .columns()
                .iter()
                .map(|c| c.inferred_type.is_numeric())
                .collect(),
        }
    }

    /// Display width of each column, header included. Multiline cells are
    /// as wide as their longest line.
    pub fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| line_width(h)).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(line_width(cell));
            }
        }
        widths
    }
}

fn line_width(text: &str) -> usize {
    text.lines().map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Pad `cell` to `width` display columns
pub(crate) fn align(cell: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    if right {
        format!("{fill}{cell}")
    } else {
        format!("{cell}{fill}")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::CellValue;

    pub fn people() -> TabularData {
        TabularData::from_columns([
            ("Name", vec![CellValue::from("Alice"), CellValue::from("Bob")]),
            ("Age", vec![CellValue::from(30), CellValue::from(45)]),
        ])
        .unwrap()
    }

    /// Split a markdown pipe table back into header and body cells,
    /// unescaping `\|` inside cells
    pub fn parse_markdown(text: &str) -> (Vec<String>, Vec<Vec<String>>) {
        let split = |line: &str| -> Vec<String> {
            let inner = line.trim().trim_start_matches('|');
            let inner = inner.strip_suffix('|').unwrap_or(inner);
            let mut cells = vec![String::new()];
            let mut chars = inner.chars().peekable();
            while let Some(c) = chars.next() {
                match c {
                    '\\' if chars.peek() == Some(&'|') => {
                        chars.next();
                        cells.last_mut().unwrap().push('|');
                    }
                    '|' => cells.push(String::new()),
                    _ => cells.last_mut().unwrap().push(c),
                }
            }
            cells.iter().map(|c| c.trim().to_string()).collect()
        };
        let mut lines = text.lines().filter(|l| !l.trim().is_empty());
        let headers = lines.next().map(split).unwrap_or_default();
        let rows = lines
            .filter(|l| !l.chars().all(|c| matches!(c, '|' | '-' | ':' | ' ')))
            .map(split)
            .collect();
        (headers, rows)
    }

    #[test]
    fn test_github_scenario() {
        let text = render(&people(), TableFormat::Github).unwrap();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("| Name"));
        assert_eq!(first.split_whitespace().collect::<Vec<_>>(), ["|", "Name", "|", "Age", "|"]);

        let (headers, rows) = parse_markdown(&text);
        assert_eq!(headers, ["Name", "Age"]);
        assert_eq!(rows, [["Alice", "30"], ["Bob", "45"]]);
    }

    #[test]
    fn test_markdown_round_trip_keeps_cell_strings() {
        let table = TabularData::from_columns([
            ("word", vec![CellValue::from("x"), CellValue::from("longer text")]),
            ("flag", vec![CellValue::from(true), CellValue::Null]),
            ("ratio", vec![CellValue::from(0.5), CellValue::from(12.25)]),
        ])
        .unwrap();

        let (headers, rows) = parse_markdown(&render(&table, TableFormat::Pipe).unwrap());
        assert_eq!(headers, ["word", "flag", "ratio"]);
        assert_eq!(rows, [["x", "true", "0.5"], ["longer text", "", "12.25"]]);
    }

    #[test]
    fn test_header_only_table() {
        let table = TabularData::from_columns([("email", Vec::<CellValue>::new())]).unwrap();
        let text = render(&table, TableFormat::Github).unwrap();
        assert!(text.contains("email"));
        let (headers, rows) = parse_markdown(&text);
        assert_eq!(headers, ["email"]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_empty_table_renders_empty_string() {
        let table = TabularData::new(Default::default()).unwrap();
        for format in TableFormat::ALL {
            assert_eq!(render(&table, format).unwrap(), "", "{format}");
        }
    }

    #[test]
    fn test_every_format_includes_headers_and_values() {
        let table = people();
        for format in TableFormat::ALL {
            let text = render(&table, format).unwrap();
            for needle in ["Name", "Age", "Alice", "Bob", "30", "45"] {
                assert!(text.contains(needle), "{format} output lacks {needle}:\n{text}");
            }
            assert!(text.ends_with('\n'), "{format}");
            let alice = text.find("Alice").unwrap();
            let bob = text.find("Bob").unwrap();
            assert!(alice < bob, "{format} reordered rows");
        }
    }

    #[test]
    fn test_save_to_file_matches_render() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.md");
        let table = people();

        std::fs::write(&path, "stale contents that are much longer than the table").unwrap();
        save_to_file(&table, &path, TableFormat::Grid).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render(&table, TableFormat::Grid).unwrap());
    }

    #[test]
    fn test_save_to_file_surfaces_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("table.md");

        let err = save_to_file(&people(), &path, TableFormat::Github).unwrap_err();
        match err {
            TableError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_widths_use_display_width() {
        let table = TabularData::from_columns([("city", vec!["東京", "Oslo"])]).unwrap();
        let cells = Cells::from_table(&table);
        assert_eq!(cells.widths(), [4]);
        assert_eq!(align("東京", 6, false), "東京  ");
        assert_eq!(align("7", 3, true), "  7");
    }

    #[test]
    fn test_widths_measure_longest_line() {
        let table = TabularData::from_columns([("note", vec!["first\nsecond line", "x"])]).unwrap();
        assert_eq!(Cells::from_table(&table).widths(), [11]);
    }
}
