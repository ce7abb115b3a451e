//! Box and grid styles drawn by `tabled`

use std::io::{self, Write};

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

use crate::model::TabularData;

use super::OutputFormatter;

/// Preset `tabled` styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridStyle {
    Blank,
    Markdown,
    Ascii,
    Modern,
    Extended,
    Sharp,
    Rounded,
    Psql,
    ReStructuredText,
}

/// Table output through the `tabled` builder
pub struct GridOutput {
    style: GridStyle,
}

impl GridOutput {
    pub fn new(style: GridStyle) -> Self {
        Self { style }
    }
}

impl OutputFormatter for GridOutput {
    fn render(&self, table: &TabularData, writer: &mut dyn Write) -> io::Result<()> {
        // A bare pipe would end a markdown cell early
        let escape = |text: &str| match self.style {
            GridStyle::Markdown => text.replace('|', "\\|"),
            _ => text.to_string(),
        };

        let mut builder = Builder::default();
        builder.push_record(table.column_names().map(|name| escape(name)));
        for row in table.rows() {
            builder.push_record(row.iter().map(|c| escape(&c.display())));
        }

        let mut grid = builder.build();
        match self.style {
            GridStyle::Blank => grid.with(Style::blank()),
            GridStyle::Markdown => grid.with(Style::markdown()),
            GridStyle::Ascii => grid.with(Style::ascii()),
            GridStyle::Modern => grid.with(Style::modern()),
            GridStyle::Extended => grid.with(Style::extended()),
            GridStyle::Sharp => grid.with(Style::sharp()),
            GridStyle::Rounded => grid.with(Style::rounded()),
            GridStyle::Psql => grid.with(Style::psql()),
            GridStyle::ReStructuredText => grid.with(Style::re_structured_text()),
        };

        for column in table.columns().iter().filter(|c| c.inferred_type.is_numeric()) {
            grid.with(Modify::new(Columns::single(column.index)).with(Alignment::right()));
        }

        writeln!(writer, "{grid}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;
    use crate::output::tests::{parse_markdown, people};

    fn draw(style: GridStyle) -> String {
        let mut buf = Vec::new();
        GridOutput::new(style).render(&people(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_markdown_lines() {
        let text = draw(GridStyle::Markdown);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.starts_with('|') && l.ends_with('|')));
        assert!(lines[1].contains("---"));
    }

    #[test]
    fn test_numbers_right_aligned() {
        let text = draw(GridStyle::Ascii);
        // "Age" sets the column width, so two-digit numbers get one leading space of fill
        assert!(text.contains("|  30 |"), "{text}");
        assert!(text.contains("| Alice |"), "{text}");
    }

    #[test]
    fn test_box_styles_draw_borders() {
        assert!(draw(GridStyle::Modern).starts_with('┌'));
        assert!(draw(GridStyle::Rounded).starts_with('╭'));
        assert!(draw(GridStyle::Ascii).starts_with('+'));
    }

    #[test]
    fn test_markdown_escapes_pipes() {
        let table = TabularData::from_columns([
            ("a|b", vec![CellValue::from("B|ob"), CellValue::from("plain")]),
            ("n", vec![CellValue::from(1), CellValue::from(2)]),
        ])
        .unwrap();
        let mut buf = Vec::new();
        GridOutput::new(GridStyle::Markdown).render(&table, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("B\\|ob"), "{text}");
        let (headers, rows) = parse_markdown(&text);
        assert_eq!(headers, ["a|b", "n"]);
        assert_eq!(rows, [["B|ob", "1"], ["plain", "2"]]);
    }

    #[test]
    fn test_pipes_left_alone_outside_markdown() {
        let table = TabularData::from_columns([("name", vec!["B|ob"])]).unwrap();
        let mut buf = Vec::new();
        GridOutput::new(GridStyle::Ascii).render(&table, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("| B|ob |"), "{text}");
        assert!(!text.contains('\\'));
    }
}
