// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The book in progress — title, page total, scanned pages, and saving it
// to the history.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use pagewords_core::book::Book;
use pagewords_core::config::DefaultMethod;
use tracing::info;

use super::{describe_scan, to_index};
use crate::services::analysis::{analyze_image, analyze_ocr_text};
use crate::services::app_services::AppServices;

/// How a page added to the book is counted.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MethodArg {
    /// Estimate from a page image's line structure.
    Fast,
    /// Count words in a text file produced by an OCR engine.
    Ocr,
}

impl From<DefaultMethod> for MethodArg {
    fn from(method: DefaultMethod) -> Self {
        match method {
            DefaultMethod::Fast => Self::Fast,
            DefaultMethod::Ocr => Self::Ocr,
        }
    }
}

impl From<MethodArg> for DefaultMethod {
    fn from(method: MethodArg) -> Self {
        match method {
            MethodArg::Fast => Self::Fast,
            MethodArg::Ocr => Self::Ocr,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum BookAction {
    /// Show the current book, its pages, and the word estimate
    Show,
    /// Set the book title
    Title { title: String },
    /// Set the book's total page count (0 clears it)
    Pages { total: u32 },
    /// Add a scanned page to the book
    Add {
        /// Page image (fast method) or OCR text file (ocr method)
        file: PathBuf,

        /// Counting method (default from config)
        #[arg(short, long, value_enum)]
        method: Option<MethodArg>,

        /// Words per detected line (fast method)
        #[arg(short, long)]
        words_per_line: Option<f64>,
    },
    /// Remove a scanned page by its page number
    Remove { page: usize },
    /// Move the book into the history and start a new one
    Save,
    /// Discard the current book
    Reset,
}

pub fn run(svc: &mut AppServices, action: BookAction) -> Result<()> {
    match action {
        BookAction::Show => {
            print_book(&svc.library().current_book);
            return Ok(());
        }
        BookAction::Title { title } => {
            svc.library_mut().current_book.set_title(&title);
        }
        BookAction::Pages { total } => {
            svc.library_mut().current_book.set_total_pages(total);
        }
        BookAction::Add {
            file,
            method,
            words_per_line,
        } => {
            let config = svc.config();
            let method = method.unwrap_or_else(|| config.default_method.into());
            let scan = match method {
                MethodArg::Fast => {
                    let wpl = config.resolve_words_per_line(words_per_line);
                    analyze_image(&file, wpl, config.max_dimension)
                }
                MethodArg::Ocr => analyze_ocr_text(&file),
            }
            .with_context(|| format!("failed to analyse {}", file.display()))?;

            println!("Added page: {}", describe_scan(&scan));
            svc.library_mut().current_book.add_scan(scan);
        }
        BookAction::Remove { page } => {
            let removed = svc.library_mut().current_book.remove_scan(to_index(page)?)?;
            println!("Removed page {page}: {}", describe_scan(&removed));
        }
        BookAction::Save => {
            let saved = svc.library_mut().save_current_book(chrono::Utc::now())?;
            println!("Saved \"{}\": {}", saved.display_title(), saved.summary_line());
        }
        BookAction::Reset => {
            svc.library_mut().reset_current_book();
            println!("Current book cleared.");
        }
    }
    svc.save_library()?;
    info!("book updated");
    Ok(())
}

fn print_book(book: &Book) {
    let stats = book.stats();
    println!("{}", book.display_title());
    match book.total_pages {
        Some(total) => println!("Total pages:   {total}"),
        None => println!("Total pages:   --"),
    }
    println!("Pages scanned: {}", stats.pages_scanned);
    println!(
        "Avg words:     {}",
        stats
            .average_words
            .map_or_else(|| "--".to_string(), |a| a.to_string())
    );
    println!(
        "Total words:   {}",
        stats
            .estimated_total
            .map_or_else(|| "--".to_string(), |t| t.to_string())
    );

    if book.scans.is_empty() {
        println!("\nNo scans yet. Add a page with `pagewords book add <FILE>`.");
        return;
    }
    println!();
    for (i, scan) in book.scans.iter().enumerate() {
        println!("Page {}: {}", i + 1, describe_scan(scan));
    }
}
