//! Column-aligned tables drawn from a set of rule characters

use std::io::{self, Write};

use crate::model::TabularData;

use super::{align, Cells, OutputFormatter};

/// One horizontal rule: left edge, fill, column junction, right edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub left: &'static str,
    pub fill: &'static str,
    pub junction: &'static str,
    pub right: &'static str,
}

const fn rule(left: &'static str, fill: &'static str, junction: &'static str, right: &'static str) -> Rule {
    Rule {
        left,
        fill,
        junction,
        right,
    }
}

/// Characters used to draw a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    pub top: Option<Rule>,
    pub below_header: Option<Rule>,
    pub between_rows: Option<Rule>,
    pub bottom: Option<Rule>,
    /// Left edge, column separator, right edge
    pub vertical: (&'static str, &'static str, &'static str),
    /// Spaces on each side of a cell
    pub padding: usize,
}

impl RuleSet {
    pub const SIMPLE: RuleSet = RuleSet {
        top: None,
        below_header: Some(rule("", "-", "  ", "")),
        between_rows: None,
        bottom: None,
        vertical: ("", "  ", ""),
        padding: 0,
    };

    pub const OUTLINE: RuleSet = RuleSet {
        top: Some(rule("+", "-", "+", "+")),
        below_header: Some(rule("+", "=", "+", "+")),
        between_rows: None,
        bottom: Some(rule("+", "-", "+", "+")),
        vertical: ("|", "|", "|"),
        padding: 1,
    };

    pub const ROUNDED_GRID: RuleSet = RuleSet {
        top: Some(rule("╭", "─", "┬", "╮")),
        below_header: Some(rule("├", "─", "┼", "┤")),
        between_rows: Some(rule("├", "─", "┼", "┤")),
        bottom: Some(rule("╰", "─", "┴", "╯")),
        vertical: ("│", "│", "│"),
        padding: 1,
    };

    pub const HEAVY_GRID: RuleSet = RuleSet {
        top: Some(rule("┏", "━", "┳", "┓")),
        below_header: Some(rule("┣", "━", "╋", "┫")),
        between_rows: Some(rule("┣", "━", "╋", "┫")),
        bottom: Some(rule("┗", "━", "┻", "┛")),
        vertical: ("┃", "┃", "┃"),
        padding: 1,
    };

    pub const MIXED_GRID: RuleSet = RuleSet {
        top: Some(rule("┍", "━", "┯", "┑")),
        below_header: Some(rule("┝", "━", "┿", "┥")),
        between_rows: Some(rule("├", "─", "┼", "┤")),
        bottom: Some(rule("┕", "━", "┷", "┙")),
        vertical: ("│", "│", "│"),
        padding: 1,
    };

    pub const DOUBLE_GRID: RuleSet = RuleSet {
        top: Some(rule("╔", "═", "╦", "╗")),
        below_header: Some(rule("╠", "═", "╬", "╣")),
        between_rows: Some(rule("╠", "═", "╬", "╣")),
        bottom: Some(rule("╚", "═", "╩", "╝")),
        vertical: ("║", "║", "║"),
        padding: 1,
    };

    pub const HEAVY_OUTLINE: RuleSet = RuleSet {
        between_rows: None,
        ..RuleSet::HEAVY_GRID
    };

    pub const MIXED_OUTLINE: RuleSet = RuleSet {
        between_rows: None,
        ..RuleSet::MIXED_GRID
    };

    pub const DOUBLE_OUTLINE: RuleSet = RuleSet {
        between_rows: None,
        ..RuleSet::DOUBLE_GRID
    };

    pub const FANCY_OUTLINE: RuleSet = RuleSet {
        top: Some(rule("╒", "═", "╤", "╕")),
        below_header: Some(rule("╞", "═", "╪", "╡")),
        between_rows: None,
        bottom: Some(rule("╘", "═", "╧", "╛")),
        vertical: ("│", "│", "│"),
        padding: 1,
    };

    pub const ORGTBL: RuleSet = RuleSet {
        top: None,
        below_header: Some(rule("|", "-", "+", "|")),
        between_rows: None,
        bottom: None,
        vertical: ("|", "|", "|"),
        padding: 1,
    };

    pub const PSQL: RuleSet = RuleSet {
        top: Some(rule("+", "-", "+", "+")),
        below_header: Some(rule("|", "-", "+", "|")),
        between_rows: None,
        bottom: Some(rule("+", "-", "+", "+")),
        vertical: ("|", "|", "|"),
        padding: 1,
    };
}

/// Table output drawn from a [`RuleSet`]
pub struct RuledOutput {
    rules: RuleSet,
}

impl RuledOutput {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    fn write_rule(&self, rule: &Rule, widths: &[usize], writer: &mut dyn Write) -> io::Result<()> {
        let segments: Vec<String> = widths
            .iter()
            .map(|w| rule.fill.repeat(w + 2 * self.rules.padding))
            .collect();
        writeln!(writer, "{}{}{}", rule.left, segments.join(rule.junction), rule.right)
    }

    /// Write one table row. Multiline cells span several physical lines and
    /// shorter cells are filled with blanks below their text.
    fn write_cells(
        &self,
        cells: &[String],
        widths: &[usize],
        numeric: &[bool],
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        let (left, inner, right) = self.rules.vertical;
        let pad = " ".repeat(self.rules.padding);
        let split: Vec<Vec<&str>> = cells.iter().map(|c| cell_lines(c)).collect();
        let height = split.iter().map(Vec::len).max().unwrap_or(1);
        let last = cells.len().saturating_sub(1);
        // Without a right edge the last column needs no fill after its text
        let open_end = right.is_empty() && self.rules.padding == 0;

        for n in 0..height {
            let segments: Vec<String> = split
                .iter()
                .zip(widths)
                .zip(numeric)
                .enumerate()
                .map(|(i, ((lines, &width), &right_align))| {
                    let text = lines.get(n).copied().unwrap_or("");
                    if i == last && open_end && !right_align {
                        text.to_string()
                    } else {
                        format!("{pad}{}{pad}", align(text, width, right_align))
                    }
                })
                .collect();
            writeln!(writer, "{left}{}{right}", segments.join(inner))?;
        }
        Ok(())
    }
}

/// Physical lines of a cell; an empty cell still occupies one line
fn cell_lines(cell: &str) -> Vec<&str> {
    let lines: Vec<&str> = cell.lines().collect();
    if lines.is_empty() {
        vec![""]
    } else {
        lines
    }
}

impl OutputFormatter for RuledOutput {
    fn render(&self, table: &TabularData, writer: &mut dyn Write) -> io::Result<()> {
        let cells = Cells::from_table(table);
        let widths = cells.widths();

        if let Some(top) = &self.rules.top {
            self.write_rule(top, &widths, writer)?;
        }

        self.write_cells(&cells.headers, &widths, &cells.numeric, writer)?;
        if let Some(sep) = &self.rules.below_header {
            self.write_rule(sep, &widths, writer)?;
        }

        for (i, row) in cells.rows.iter().enumerate() {
            if i > 0 {
                if let Some(sep) = &self.rules.between_rows {
                    self.write_rule(sep, &widths, writer)?;
                }
            }
            self.write_cells(row, &widths, &cells.numeric, writer)?;
        }

        if let Some(bottom) = &self.rules.bottom {
            self.write_rule(bottom, &widths, writer)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;
    use crate::output::tests::people;

    fn draw(rules: RuleSet) -> String {
        let mut buf = Vec::new();
        RuledOutput::new(rules).render(&people(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_psql_layout() {
        let expected = "\
+-------+-----+
| Name  | Age |
|-------+-----|
| Alice |  30 |
| Bob   |  45 |
+-------+-----+
";
        assert_eq!(draw(RuleSet::PSQL), expected);
    }

    #[test]
    fn test_simple_layout() {
        let expected = "\
Name   Age
-----  ---
Alice   30
Bob     45
";
        assert_eq!(draw(RuleSet::SIMPLE), expected);
    }

    #[test]
    fn test_grid_draws_rule_between_rows() {
        let text = draw(RuleSet::HEAVY_GRID);
        assert_eq!(text.lines().count(), 7);
        assert!(text.starts_with("┏━━━━━━━┳━━━━━┓"));

        let outline = draw(RuleSet::HEAVY_OUTLINE);
        assert_eq!(outline.lines().count(), 6);
    }

    #[test]
    fn test_multiline_cells_keep_borders_aligned() {
        let table = TabularData::from_columns([
            ("Name", vec![CellValue::from("Al\nice"), CellValue::from("Bob")]),
            ("Age", vec![CellValue::from(30), CellValue::from(45)]),
        ])
        .unwrap();
        let mut buf = Vec::new();
        RuledOutput::new(RuleSet::PSQL).render(&table, &mut buf).unwrap();

        let expected = "\
+------+-----+
| Name | Age |
|------+-----|
| Al   |  30 |
| ice  |     |
| Bob  |  45 |
+------+-----+
";
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn test_cell_whitespace_is_kept() {
        let table = TabularData::from_columns([
            ("id", vec![CellValue::from("1")]),
            ("note", vec![CellValue::from("  pad  ")]),
        ])
        .unwrap();
        let mut buf = Vec::new();
        RuledOutput::new(RuleSet::SIMPLE).render(&table, &mut buf).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "id  note\n--  -------\n1     pad  \n");
    }
}
