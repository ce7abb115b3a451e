//! LaTeX tabular output

use std::io::{self, Write};

use crate::model::TabularData;

use super::{align, Cells, OutputFormatter};

/// Which LaTeX environment and rules to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatexFlavor {
    /// `tabular` with `\hline`, special characters escaped
    Escaped,
    /// `tabular` with `\hline`, cells written verbatim
    Raw,
    /// `tabular` with booktabs rules
    Booktabs,
    /// `longtable` with a repeating header
    Longtable,
}

/// LaTeX table output
pub struct LatexOutput {
    flavor: LatexFlavor,
}

impl LatexOutput {
    pub fn new(flavor: LatexFlavor) -> Self {
        Self { flavor }
    }

    fn rules(&self) -> (&'static str, &'static str, &'static str) {
        match self.flavor {
            LatexFlavor::Booktabs => ("\\toprule", "\\midrule", "\\bottomrule"),
            _ => ("\\hline", "\\hline", "\\hline"),
        }
    }

    /// Cell text as it appears in the source, escaped unless raw
    fn source_text(&self, cell: &str) -> String {
        match self.flavor {
            LatexFlavor::Raw => cell.to_string(),
            _ => latex_escape(cell),
        }
    }

    fn write_row(
        &self,
        cells: &[String],
        widths: &[usize],
        numeric: &[bool],
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        let parts: Vec<String> = cells
            .iter()
            .zip(widths)
            .zip(numeric)
            .map(|((cell, &width), &right)| align(cell, width, right))
            .collect();
        writeln!(writer, " {} \\\\", parts.join(" & "))
    }
}

impl OutputFormatter for LatexOutput {
    fn render(&self, table: &TabularData, writer: &mut dyn Write) -> io::Result<()> {
        let mut cells = Cells::from_table(table);
        // Columns line up on the text actually written
        for cell in cells.headers.iter_mut().chain(cells.rows.iter_mut().flatten()) {
            *cell = self.source_text(cell);
        }
        let widths = cells.widths();
        let spec: String = cells.numeric.iter().map(|&n| if n { 'r' } else { 'l' }).collect();
        let env = match self.flavor {
            LatexFlavor::Longtable => "longtable",
            _ => "tabular",
        };
        let (top, mid, bottom) = self.rules();

        writeln!(writer, "\\begin{{{env}}}{{{spec}}}")?;
        writeln!(writer, "{top}")?;
        self.write_row(&cells.headers, &widths, &cells.numeric, writer)?;
        writeln!(writer, "{mid}")?;
        if self.flavor == LatexFlavor::Longtable {
            writeln!(writer, "\\endhead")?;
        }
        for row in &cells.rows {
            self.write_row(row, &widths, &cells.numeric, writer)?;
        }
        writeln!(writer, "{bottom}")?;
        writeln!(writer, "\\end{{{env}}}")?;
        Ok(())
    }
}

/// Escape characters with special meaning in LaTeX
fn latex_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '^' => out.push_str("\\^{}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '\\' => out.push_str("\\textbackslash{}"),
            '<' => out.push_str("\\ensuremath{<}"),
            '>' => out.push_str("\\ensuremath{>}"),
            _ => out.push(c),
        }
    }
    out
}
