//! meminit CLI entry point.
//!
//! Writes a memory initialization image: one fixed-width uppercase hex
//! word per line. Settings come from built-in defaults, then an optional
//! TOML config file, then command-line flags or their environment variables.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use meminit_common::config::parse_fill;
use meminit_common::{ConfigFile, ImageConfig};

/// Generate a hexadecimal memory initialization file.
#[derive(Debug, Parser)]
#[command(name = "meminit", version, about)]
struct Cli {
    /// TOML config file with an `[image]` table.
    #[arg(short, long, env = "MEMINIT_CONFIG")]
    config: Option<PathBuf>,

    /// Output file path [default: src/reuse/init_ram_zeros.mem].
    #[arg(short, long, env = "MEMINIT_OUTPUT")]
    output: Option<PathBuf>,

    /// Number of memory words (lines) [default: 2048].
    #[arg(short = 'n', long, env = "MEMINIT_LINES")]
    lines: Option<u64>,

    /// Word width in bits, a positive multiple of 4 [default: 64].
    #[arg(short, long, env = "MEMINIT_WIDTH")]
    width: Option<u32>,

    /// Value of every word, decimal or 0x-prefixed hex [default: 0].
    #[arg(short, long, env = "MEMINIT_FILL", value_parser = parse_fill)]
    fill: Option<u128>,
}

impl Cli {
    /// Layer flags over the config file (if any) over the defaults.
    fn resolve(self) -> anyhow::Result<ImageConfig> {
        let mut config = match &self.config {
            Some(path) => {
                ConfigFile::from_file(path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))?
                    .image
            }
            None => ImageConfig::default(),
        };

        if let Some(output) = self.output {
            config = config.with_output(output);
        }
        if let Some(lines) = self.lines {
            config = config.with_lines(lines);
        }
        if let Some(width) = self.width {
            config = config.with_width(width);
        }
        if let Some(fill) = self.fill {
            config = config.with_fill(fill);
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,meminit=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Cli::parse().resolve()?;

    info!(
        output = %config.output.display(),
        lines = config.lines,
        width = config.width,
        fill = %format!("{:#X}", config.fill),
        "Configuration loaded"
    );

    let report = meminit_core::generate(&config)
        .with_context(|| format!("Failed to generate {}", config.output.display()))?;

    info!(
        lines = report.lines,
        bytes = report.bytes,
        duration_ms = report.duration.as_millis(),
        "Done"
    );

    Ok(())
}
