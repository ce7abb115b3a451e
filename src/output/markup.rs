//! Wiki, issue-tracker and plain delimited markups

use std::io::{self, Write};

use crate::model::TabularData;

use super::{Cells, OutputFormatter};

/// Line-oriented table markups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupStyle {
    Asciidoc,
    Jira,
    Mediawiki,
    Moinmoin,
    Textile,
    Tsv,
    Youtrack,
}

/// Table output for line-oriented markups
pub struct MarkupOutput {
    style: MarkupStyle,
}

impl MarkupOutput {
    pub fn new(style: MarkupStyle) -> Self {
        Self { style }
    }

    fn write_mediawiki(&self, cells: &Cells, writer: &mut dyn Write) -> io::Result<()> {
        let cell = |text: &str, right: bool| {
            if right {
                format!("align=\"right\"| {text}")
            } else {
                text.to_string()
            }
        };
        let line = |values: &[String]| -> Vec<String> {
            values
                .iter()
                .zip(&cells.numeric)
                .map(|(v, &right)| cell(v.as_str(), right))
                .collect()
        };

        writeln!(writer, "{{| class=\"wikitable\" style=\"text-align: left;\"")?;
        writeln!(writer, "|-")?;
        writeln!(writer, "! {}", line(cells.headers.as_slice()).join(" !! "))?;
        for row in &cells.rows {
            writeln!(writer, "|-")?;
            writeln!(writer, "| {}", line(row.as_slice()).join(" || "))?;
        }
        writeln!(writer, "|}}")
    }

    fn write_asciidoc(&self, cells: &Cells, writer: &mut dyn Write) -> io::Result<()> {
        let cols: Vec<String> = cells
            .widths()
            .iter()
            .zip(&cells.numeric)
            .map(|(w, &right)| format!("{}{}", w + 2, if right { '>' } else { '<' }))
            .collect();

        writeln!(writer, "[cols=\"{}\",options=\"header\"]", cols.join(","))?;
        writeln!(writer, "|====")?;
        writeln!(writer, "| {}", cells.headers.join(" | "))?;
        for row in &cells.rows {
            writeln!(writer, "| {}", row.join(" | "))?;
        }
        writeln!(writer, "|====")
    }

    fn write_textile(&self, cells: &Cells, writer: &mut dyn Write) -> io::Result<()> {
        let header: String = cells.headers.iter().map(|h| format!("|_. {h} ")).collect();
        writeln!(writer, "{header}|")?;
        for row in &cells.rows {
            let line: String = row
                .iter()
                .zip(&cells.numeric)
                .map(|(v, &right)| format!("|{}. {v} ", if right { '>' } else { '<' }))
                .collect();
            writeln!(writer, "{line}|")?;
        }
        Ok(())
    }

    fn write_moinmoin(&self, cells: &Cells, writer: &mut dyn Write) -> io::Result<()> {
        let header: Vec<String> = cells.headers.iter().map(|h| format!("''' {h} '''")).collect();
        writeln!(writer, "|| {} ||", header.join(" || "))?;
        for row in &cells.rows {
            writeln!(writer, "|| {} ||", row.join(" || "))?;
        }
        Ok(())
    }

    /// Markups that differ only in their delimiters
    fn write_delimited(
        &self,
        cells: &Cells,
        header: (&str, &str, &str),
        body: (&str, &str, &str),
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        let (open, sep, close) = header;
        writeln!(writer, "{open}{}{close}", cells.headers.join(sep))?;
        let (open, sep, close) = body;
        for row in &cells.rows {
            writeln!(writer, "{open}{}{close}", row.join(sep))?;
        }
        Ok(())
    }
}

impl OutputFormatter for MarkupOutput {
    fn render(&self, table: &TabularData, writer: &mut dyn Write) -> io::Result<()> {
        let cells = Cells::from_table(table);
        match self.style {
            MarkupStyle::Mediawiki => self.write_mediawiki(&cells, writer),
            MarkupStyle::Asciidoc => self.write_asciidoc(&cells, writer),
            MarkupStyle::Textile => self.write_textile(&cells, writer),
            MarkupStyle::Jira => {
                self.write_delimited(&cells, ("|| ", " || ", " ||"), ("| ", " | ", " |"), writer)
            }
            MarkupStyle::Youtrack => {
                self.write_delimited(&cells, ("||  ", "  ||  ", "  ||"), ("|  ", "  |  ", "  |"), writer)
            }
            MarkupStyle::Moinmoin => self.write_moinmoin(&cells, writer),
            MarkupStyle::Tsv => self.write_delimited(&cells, ("", "\t", ""), ("", "\t", ""), writer),
        }
    }
}
