use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod output;

use output::ColorMode;
use sightline_core::store::{self, StorePaths};

/// Sightline CLI - inspect and snapshot a sighting validation run without the TUI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print review progress for the working table
    Stats {
        /// Path to the scraped sightings dataset
        #[arg(long)]
        data: Option<PathBuf>,

        /// Path to the validation save file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Also list every URL group with its progress
        #[arg(long)]
        urls: bool,
    },

    /// Write a snapshot of the current working table to a CSV file
    Export {
        /// Path to the scraped sightings dataset
        #[arg(long)]
        data: Option<PathBuf>,

        /// Path to the validation save file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Output path for the snapshot
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Stats {
            data,
            save,
            no_color,
            urls,
        } => stats(resolve_paths(data, save), ColorMode(!no_color), urls),
        Command::Export { data, save, output } => {
            export(resolve_paths(data, save), output)
        }
    }
}

fn resolve_paths(data: Option<PathBuf>, save: Option<PathBuf>) -> StorePaths {
    StorePaths {
        data: data.unwrap_or_else(|| PathBuf::from(store::DEFAULT_DATA_PATH)),
        save: save.unwrap_or_else(|| PathBuf::from(store::DEFAULT_SAVE_PATH)),
    }
}

fn stats(paths: StorePaths, color: ColorMode, urls: bool) -> anyhow::Result<()> {
    let table = store::load(&paths)
        .with_context(|| format!("could not load sighting data from {}", paths.data.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::print_stats(&mut out, &table, color)?;
    if urls {
        output::print_url_groups(&mut out, &table, color)?;
    }
    out.flush()?;
    Ok(())
}

fn export(paths: StorePaths, output: Option<PathBuf>) -> anyhow::Result<()> {
    let table = store::load(&paths)
        .with_context(|| format!("could not load sighting data from {}", paths.data.display()))?;

    let path = output.unwrap_or_else(|| PathBuf::from(store::SNAPSHOT_FILENAME));
    store::export_snapshot(&table, &path)
        .with_context(|| format!("could not write snapshot to {}", path.display()))?;

    println!("Exported {} rows to {}", table.len(), path.display());
    Ok(())
}
