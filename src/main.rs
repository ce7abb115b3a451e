//! tabfmt - Render column-oriented tables as text

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tabfmt::config::{Config, Source, TableFormat};
use tabfmt::model::TabularData;
use tabfmt::output::{render, save_to_file};
use tabfmt::parser::ParserFactory;
use tabfmt::sample::{demo_table, SampleGenerator};

/// Validate a column-oriented table and render it as markdown, HTML, LaTeX and more
#[derive(Parser, Debug)]
#[command(name = "tabfmt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV or JSON file to render (the built-in demo table when omitted)
    #[arg(conflicts_with = "fake")]
    input: Option<PathBuf>,

    /// Table format (see --list-formats)
    #[arg(short, long, default_value = "github")]
    format: TableFormat,

    /// Also write the rendered table to this file, replacing it
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Generate fake data for these fields instead of reading input (comma-separated)
    #[arg(long, value_delimiter = ',')]
    fake: Vec<String>,

    /// Number of rows to generate with --fake
    #[arg(short = 'n', long, default_value_t = 5)]
    rows: usize,

    /// Seed for reproducible fake data
    #[arg(long)]
    seed: Option<u64>,

    /// Print the supported table formats and exit
    #[arg(long)]
    list_formats: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        let source = match (self.input, self.fake.is_empty()) {
            (Some(path), _) => Source::File(path),
            (None, false) => Source::Fake(self.fake),
            (None, true) => Source::Demo,
        };

        let mut config = Config::new(source)
            .with_format(self.format)
            .with_rows(self.rows);
        if let Some(path) = self.output {
            config = config.with_output_file(path);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_formats {
        for format in TableFormat::ALL {
            println!("{}", format);
        }
        return Ok(());
    }

    let config = cli.into_config();
    let table = load_table(&config)?;

    let rendered = render(&table, config.format)?;
    print!("{}", rendered);

    if let Some(path) = &config.output_file {
        save_to_file(&table, path, config.format)
            .with_context(|| format!("Failed to write table to {}", path.display()))?;
        info!("wrote {} table to {}", config.format, path.display());
    }

    Ok(())
}

fn load_table(config: &Config) -> Result<TabularData> {
    match &config.source {
        Source::Demo => Ok(demo_table()?),
        Source::File(path) => ParserFactory::new()
            .parse(path)
            .with_context(|| format!("Failed to load table: {}", path.display())),
        Source::Fake(fields) => {
            let mut generator = config
                .seed
                .map_or_else(SampleGenerator::new, SampleGenerator::with_seed);
            Ok(generator.generate(fields.as_slice(), config.rows)?)
        }
    }
}
