// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PageWords — estimate the word count of books from scanned pages.
//
// Entry point. Initialises logging, loads persisted state, and dispatches
// subcommands.

mod commands;
mod services;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pagewords_core::PagewordsError;
use pagewords_core::human_errors::humanize_error;

use commands::book::BookAction;
use commands::history::HistoryAction;
use commands::settings::ConfigAction;
use services::app_services::AppServices;
use services::data_dir;

#[derive(Parser, Debug)]
#[command(name = "pagewords")]
#[command(
    version,
    about = "Estimate how many words are in a book from a few scanned pages",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Where the library and settings are stored (default: $PAGEWORDS_DATA_DIR,
    /// then the XDG data directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fast word estimate for page images (not added to the book)
    Estimate {
        /// Page images (JPEG, PNG, TIFF, ...)
        #[arg(required = true)]
        images: Vec<PathBuf>,

        /// Words per detected line (default from config)
        #[arg(short, long)]
        words_per_line: Option<f64>,

        /// Longest page side analysed, in pixels (default from config)
        #[arg(long)]
        max_dimension: Option<u32>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count words in text produced by an OCR engine
    OcrCount {
        /// Plain-text OCR output
        text_file: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Work on the book in progress
    Book {
        #[command(subcommand)]
        action: BookAction,
    },

    /// Saved books
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Export the library (current book and history) as JSON
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// View or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let dir = data_dir::data_dir(cli.data_dir);
    let mut svc = AppServices::open(dir);

    match cli.command {
        Commands::Estimate {
            images,
            words_per_line,
            max_dimension,
            json,
        } => commands::quick::estimate(&svc, &images, words_per_line, max_dimension, json),
        Commands::OcrCount { text_file, json } => commands::quick::ocr_count(&text_file, json),
        Commands::Book { action } => commands::book::run(&mut svc, action),
        Commands::History { action } => commands::history::run(&mut svc, action),
        Commands::Export { output } => commands::history::export(&svc, output.as_deref()),
        Commands::Config { action } => commands::settings::run(&mut svc, action),
    }
}

/// Print an error, in plain English when it is one of ours.
fn report(err: &anyhow::Error) {
    match err.chain().find_map(|e| e.downcast_ref::<PagewordsError>()) {
        Some(domain) => {
            let human = humanize_error(domain);
            eprintln!("{}", human.message);
            eprintln!("{}", human.suggestion);
            tracing::debug!(error = %err, severity = ?human.severity, "command failed");
        }
        None => eprintln!("error: {err:#}"),
    }
}
