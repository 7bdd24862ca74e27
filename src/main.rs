use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod embed;
mod symbol;

use config::{Config, Target};

#[derive(Parser)]
#[command(name = "embed-bin")]
#[command(version)]
#[command(about = "Embed a binary file as a C/C++ byte array and length constant")]
struct Cli {
    /// Binary file to embed
    input: PathBuf,

    /// Symbol name for the array; the length constant is named <SYMBOL>_len
    symbol: String,

    /// Source file to create or overwrite
    output: PathBuf,

    /// Optional JSON config file controlling the output dialect and layout
    #[arg(long, env = "EMBED_BIN_CONFIG", value_name = "FILE")]
    config_path: Option<PathBuf>,

    /// Output dialect (overrides the config file)
    #[arg(long, value_enum)]
    target: Option<Target>,

    /// Byte values per initializer row (overrides the config file)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    row_width: Option<u16>,

    /// Enable debug logging on stderr
    #[arg(long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(target) = cli.target {
        config.target = target;
    }
    if let Some(width) = cli.row_width {
        config.layout.row_width = usize::from(width);
    }

    config.validate().context("Invalid embed settings")?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = resolve_config(&cli)?;
    tracing::debug!(
        dialect = ?config.target,
        row_width = config.layout.row_width,
        size_type = config.size_type(),
        "resolved embed settings"
    );

    let summary = embed::embed(&cli.input, &cli.symbol, &cli.output, &config)?;
    tracing::info!(
        bytes = summary.byte_count,
        array = %summary.array_symbol,
        length = %summary.length_symbol,
        output = %cli.output.display(),
        "embedded binary"
    );

    Ok(())
}
