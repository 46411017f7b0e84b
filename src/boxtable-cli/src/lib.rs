//! Boxtable CLI - renders delimited text as a box-drawing table.

mod args;
mod input;

use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use boxtable_core::{ConfigFile, TableConfig, TableRenderer};

pub use args::Args;
pub use input::{Records, read_records, split_record};

/// Installs the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `level`.
pub fn setup_logging(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

/// Resolves the table configuration.
///
/// Precedence: command-line flags, then the config file, then `BOXTABLE_*`
/// environment variables, then defaults. Each layer only overrides the keys
/// it sets.
pub fn load_config(args: &Args) -> Result<TableConfig> {
    load_config_with(args, |key| std::env::var(key).ok())
}

/// [`load_config`] with the environment supplied by `lookup`.
pub fn load_config_with(
    args: &Args,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<TableConfig> {
    let mut config = TableConfig::default()
        .with_overrides(lookup)
        .context("failed to load config from environment")?;

    if let Some(path) = &args.config {
        let file = ConfigFile::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?;
        config = config.with_file(&file);
    }

    if let Some(padding) = args.padding {
        config.padding = padding;
    }

    debug!(?config, "resolved table config");
    Ok(config)
}

/// Builds a renderer from parsed records and headlines.
pub fn build_table(config: &TableConfig, records: Records, headlines: &[String]) -> TableRenderer {
    let mut table = TableRenderer::from_config(config);
    for headline in headlines {
        table.add_headline(headline);
    }
    table.add_header_columns(records.header);
    for row in records.rows {
        table.add_content_cells(row);
    }
    table
}

/// Reads the input, renders the table and writes it to the output.
pub fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;

    let records = match args.input_path() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_records(BufReader::new(file), args.delimiter)?
        }
        None => read_records(io::stdin().lock(), args.delimiter)?,
    };

    let table = build_table(&config, records, &args.headlines);

    match &args.output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            table.print_to(&mut file)?;
            info!("Wrote table to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            table.print_to(&mut stdout)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
