// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Saved books and JSON export.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;

use super::to_index;
use crate::services::app_services::AppServices;

#[derive(Subcommand, Debug)]
pub enum HistoryAction {
    /// List saved books, newest first
    List,
    /// Delete a saved book by its number in the list
    Delete { number: usize },
}

pub fn run(svc: &mut AppServices, action: Option<HistoryAction>) -> Result<()> {
    match action.unwrap_or(HistoryAction::List) {
        HistoryAction::List => {
            let history = &svc.library().history;
            if history.is_empty() {
                println!("No saved books yet.");
            }
            for (i, book) in history.iter().enumerate() {
                let saved = book.saved_at.unwrap_or(book.created_at);
                println!(
                    "{}. {} — {} (saved {})",
                    i + 1,
                    book.display_title(),
                    book.summary_line(),
                    saved.format("%Y-%m-%d")
                );
            }
        }
        HistoryAction::Delete { number } => {
            let removed = svc.library_mut().delete_saved_book(to_index(number)?)?;
            svc.save_library()?;
            println!("Deleted \"{}\".", removed.display_title());
        }
    }
    Ok(())
}

/// `pagewords export` — write the library as JSON to a file or stdout.
pub fn export(svc: &AppServices, output: Option<&Path>) -> Result<()> {
    let json = svc.export_json()?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write export to {}", path.display()))?;
            println!("Exported library to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
