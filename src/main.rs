use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use textprint::config::Config;
use textprint::output::terminal;
use textprint::pipeline::{chunk_texts, DriftSeries};

/// textprint: stylometric text fingerprints.
///
/// Computes a statistical fingerprint of a text sample and compares
/// fingerprints across samples to spot authorship similarity or drift.
#[derive(Parser)]
#[command(name = "textprint", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the normalized form of the input text
    Normalize {
        /// Read from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Compute the fingerprint of the input text
    Fingerprint {
        /// Read from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print the full record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fingerprint two files and compare them
    Compare {
        /// First sample (the iterated side of each cosine)
        a: PathBuf,

        /// Second sample
        b: PathBuf,

        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },

    /// Split the input into fixed-size token chunks, one per line
    Chunk {
        /// Read from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,

        /// Tokens per chunk
        #[arg(long)]
        size: usize,
    },

    /// Track drift across the input's lines (or token chunks)
    Drift {
        /// Read from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,

        /// Split into chunks of this many tokens instead of by line
        #[arg(long)]
        size: Option<usize>,

        /// Print the series as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("textprint=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let engine = config.engine();

    match cli.command {
        Commands::Normalize { file } => {
            let text = read_input(file.as_deref())?;
            println!("{}", engine.normalizer().normalize(&text));
        }

        Commands::Fingerprint { file, json } => {
            let text = read_input(file.as_deref())?;
            let fingerprint = engine.fingerprint(&text);
            if fingerprint.is_empty() {
                warn!("Input is empty; every vector in the fingerprint is empty");
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&fingerprint)?);
            } else {
                terminal::display_fingerprint(&fingerprint, config.top_keys);
            }
        }

        Commands::Compare { a, b, json } => {
            let text_a = read_input(Some(a.as_path()))?;
            let text_b = read_input(Some(b.as_path()))?;
            let fp_a = engine.fingerprint(&text_a);
            let fp_b = engine.fingerprint(&text_b);
            let comparison = textprint::compare(&fp_a, &fp_b);

            info!(
                a = %a.display(),
                b = %b.display(),
                mean_similarity = comparison.mean_similarity(),
                "Compared fingerprints"
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                terminal::display_comparison(&comparison);
            }
        }

        Commands::Chunk { file, size } => {
            let text = read_input(file.as_deref())?;
            for chunk in chunk_texts(&[text], size)? {
                println!("{chunk}");
            }
        }

        Commands::Drift { file, size, json } => {
            let text = read_input(file.as_deref())?;
            let snippets: Vec<String> = match size {
                Some(size) => chunk_texts(&[text], size)?,
                None => text
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect(),
            };

            if snippets.is_empty() {
                println!("No snippets to analyze.");
                return Ok(());
            }

            let pb = ProgressBar::new(snippets.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("  Fingerprinting [{bar:30}] {pos}/{len}")
                    .context("Invalid progress bar template")?,
            );
            let series = DriftSeries::from_snippets_with(&engine, &snippets, |_| pb.inc(1));
            pb.finish_and_clear();

            if json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                terminal::display_drift(&series, 16);
                if series.len() < 2 {
                    println!(
                        "{}",
                        "Drift needs at least two snippets to compare.".dimmed()
                    );
                }
            }
        }
    }

    Ok(())
}

/// Read the whole input as UTF-8 text. Non-UTF-8 input is rejected here,
/// before it reaches the engine.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {} as UTF-8 text", path.display())),
        None => io::read_to_string(io::stdin()).context("Failed to read stdin as UTF-8 text"),
    }
}
