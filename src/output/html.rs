//! HTML table output

use std::borrow::Cow;
use std::io::{self, Write};

use crate::model::TabularData;

use super::{Cells, OutputFormatter};

/// HTML `<table>` output
pub struct HtmlOutput {
    escape: bool,
}

impl HtmlOutput {
    pub fn new() -> Self {
        Self { escape: true }
    }

    /// Cell contents are written as-is, so they may carry markup
    pub fn unescaped() -> Self {
        Self { escape: false }
    }

    fn text<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.escape {
            html_escape(s)
        } else {
            Cow::Borrowed(s)
        }
    }

    fn write_row(
        &self,
        tag: &str,
        cells: &[String],
        numeric: &[bool],
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        write!(writer, "<tr>")?;
        for (cell, &right) in cells.iter().zip(numeric) {
            if right {
                write!(writer, "<{tag} style=\"text-align: right;\">{}</{tag}>", self.text(cell))?;
            } else {
                write!(writer, "<{tag}>{}</{tag}>", self.text(cell))?;
            }
        }
        writeln!(writer, "</tr>")
    }
}

impl Default for HtmlOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for HtmlOutput {
    fn render(&self, table: &TabularData, writer: &mut dyn Write) -> io::Result<()> {
        let cells = Cells::from_table(table);

        writeln!(writer, "<table>")?;
        writeln!(writer, "<thead>")?;
        self.write_row("th", &cells.headers, &cells.numeric, writer)?;
        writeln!(writer, "</thead>")?;
        writeln!(writer, "<tbody>")?;
        for row in &cells.rows {
            self.write_row("td", row, &cells.numeric, writer)?;
        }
        writeln!(writer, "</tbody>")?;
        writeln!(writer, "</table>")?;
        Ok(())
    }
}

/// Escape HTML special characters
fn html_escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#x27;"),
    )
}
