//! Configuration handling for tabfmt

use std::fmt;
use std::path::PathBuf;

use crate::error::TableError;

/// Output style for a rendered table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TableFormat {
    Plain,
    Simple,
    #[default]
    Github,
    Grid,
    SimpleGrid,
    RoundedGrid,
    HeavyGrid,
    MixedGrid,
    DoubleGrid,
    FancyGrid,
    Outline,
    SimpleOutline,
    RoundedOutline,
    HeavyOutline,
    MixedOutline,
    DoubleOutline,
    FancyOutline,
    Pipe,
    Orgtbl,
    Asciidoc,
    Jira,
    Presto,
    Pretty,
    Psql,
    Rst,
    Mediawiki,
    Moinmoin,
    Youtrack,
    Html,
    UnsafeHtml,
    Latex,
    LatexRaw,
    LatexBooktabs,
    LatexLongtable,
    Textile,
    Tsv,
}

impl TableFormat {
    /// Every supported format, in the order they are listed to users
    pub const ALL: [TableFormat; 36] = [
        TableFormat::Plain,
        TableFormat::Simple,
        TableFormat::Github,
        TableFormat::Grid,
        TableFormat::SimpleGrid,
        TableFormat::RoundedGrid,
        TableFormat::HeavyGrid,
        TableFormat::MixedGrid,
        TableFormat::DoubleGrid,
        TableFormat::FancyGrid,
        TableFormat::Outline,
        TableFormat::SimpleOutline,
        TableFormat::RoundedOutline,
        TableFormat::HeavyOutline,
        TableFormat::MixedOutline,
        TableFormat::DoubleOutline,
        TableFormat::FancyOutline,
        TableFormat::Pipe,
        TableFormat::Orgtbl,
        TableFormat::Asciidoc,
        TableFormat::Jira,
        TableFormat::Presto,
        TableFormat::Pretty,
        TableFormat::Psql,
        TableFormat::Rst,
        TableFormat::Mediawiki,
        TableFormat::Moinmoin,
        TableFormat::Youtrack,
        TableFormat::Html,
        TableFormat::UnsafeHtml,
        TableFormat::Latex,
        TableFormat::LatexRaw,
        TableFormat::LatexBooktabs,
        TableFormat::LatexLongtable,
        TableFormat::Textile,
        TableFormat::Tsv,
    ];

    /// Canonical name of the format
    pub fn name(self) -> &'static str {
        match self {
            TableFormat::Plain => "plain",
            TableFormat::Simple => "simple",
            TableFormat::Github => "github",
            TableFormat::Grid => "grid",
            TableFormat::SimpleGrid => "simple_grid",
            TableFormat::RoundedGrid => "rounded_grid",
            TableFormat::HeavyGrid => "heavy_grid",
            TableFormat::MixedGrid => "mixed_grid",
            TableFormat::DoubleGrid => "double_grid",
            TableFormat::FancyGrid => "fancy_grid",
            TableFormat::Outline => "outline",
            TableFormat::SimpleOutline => "simple_outline",
            TableFormat::RoundedOutline => "rounded_outline",
            TableFormat::HeavyOutline => "heavy_outline",
            TableFormat::MixedOutline => "mixed_outline",
            TableFormat::DoubleOutline => "double_outline",
            TableFormat::FancyOutline => "fancy_outline",
            TableFormat::Pipe => "pipe",
            TableFormat::Orgtbl => "orgtbl",
            TableFormat::Asciidoc => "asciidoc",
            TableFormat::Jira => "jira",
            TableFormat::Presto => "presto",
            TableFormat::Pretty => "pretty",
            TableFormat::Psql => "psql",
            TableFormat::Rst => "rst",
            TableFormat::Mediawiki => "mediawiki",
            TableFormat::Moinmoin => "moinmoin",
            TableFormat::Youtrack => "youtrack",
            TableFormat::Html => "html",
            TableFormat::UnsafeHtml => "unsafehtml",
            TableFormat::Latex => "latex",
            TableFormat::LatexRaw => "latex_raw",
            TableFormat::LatexBooktabs => "latex_booktabs",
            TableFormat::LatexLongtable => "latex_longtable",
            TableFormat::Textile => "textile",
            TableFormat::Tsv => "tsv",
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for TableFormat {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        TableFormat::ALL
            .into_iter()
            .find(|format| format.name() == wanted)
            .ok_or_else(|| TableError::UnknownFormat(s.to_string()))
    }
}

/// Where the table data comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Source {
    /// Built-in demonstration table
    #[default]
    Demo,
    /// CSV or JSON file on disk
    File(PathBuf),
    /// Generated fake data for the named fields
    Fake(Vec<String>),
}

/// Configuration for a render run
#[derive(Debug, Clone)]
pub struct Config {
    /// Table data source
    pub source: Source,
    /// Output style
    pub format: TableFormat,
    /// Optional file to write the rendered table to
    pub output_file: Option<PathBuf>,
    /// Number of rows to generate for fake data
    pub rows: usize,
    /// Seed for reproducible fake data
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: Source::Demo,
            format: TableFormat::default(),
            output_file: None,
            rows: 5,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new Config reading from the given source
    pub fn new(source: Source) -> Self {
        Self {
            source,
            ..Default::default()
        }
    }

    /// Set output format
    pub fn with_format(mut self, format: TableFormat) -> Self {
        self.format = format;
        self
    }

    /// Write the rendered table to a file as well
    pub fn with_output_file(mut self, path: PathBuf) -> Self {
        self.output_file = Some(path);
        self
    }

    /// Set the generated row count
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Seed the fake data generator
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names_parse_back() {
        for format in TableFormat::ALL {
            assert_eq!(format.name().parse::<TableFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_format_parse_is_lenient_about_case_and_dashes() {
        assert_eq!("GitHub".parse::<TableFormat>().unwrap(), TableFormat::Github);
        assert_eq!(
            "latex-booktabs".parse::<TableFormat>().unwrap(),
            TableFormat::LatexBooktabs
        );
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = "markdown2".parse::<TableFormat>().unwrap_err();
        assert!(matches!(err, TableError::UnknownFormat(ref name) if name == "markdown2"));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.format, TableFormat::Github);
        assert_eq!(config.source, Source::Demo);
        assert_eq!(config.rows, 5);

        let config = Config::new(Source::Fake(vec!["email".into()]))
            .with_rows(0)
            .with_seed(7)
            .with_format(TableFormat::Html);
        assert_eq!(config.rows, 0);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.format, TableFormat::Html);
    }
}
