// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// One-off page counts that are not added to a book.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::services::analysis::{analyze_ocr_text, estimate_pages};
use crate::services::app_services::AppServices;

#[derive(Serialize)]
struct PageJson<'a> {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    scan: Option<&'a pagewords_core::ScanResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// `pagewords estimate` — fast estimate of one or more pages.
///
/// Returns an error if any page failed, after reporting all of them.
pub fn estimate(
    svc: &AppServices,
    images: &[PathBuf],
    words_per_line: Option<f64>,
    max_dimension: Option<u32>,
    json: bool,
) -> Result<()> {
    let config = svc.config();
    let wpl = config.resolve_words_per_line(words_per_line);
    let max_dimension = max_dimension.unwrap_or(config.max_dimension);

    let outcomes = estimate_pages(images, wpl, max_dimension);
    let failures = outcomes.iter().filter(|o| o.result.is_err()).count();

    if json {
        let pages: Vec<PageJson<'_>> = outcomes
            .iter()
            .map(|o| PageJson {
                path: o.path.display().to_string(),
                scan: o.result.as_ref().ok(),
                error: o.result.as_ref().err().map(|e| e.to_string()),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&pages)?);
    } else {
        for outcome in &outcomes {
            match &outcome.result {
                Ok(scan) => println!(
                    "{}: {} words ({} lines, threshold {})",
                    outcome.path.display(),
                    scan.word_count,
                    scan.line_count.unwrap_or(0),
                    scan.threshold.unwrap_or(0),
                ),
                Err(e) => eprintln!("{}: {}", outcome.path.display(), e),
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} pages could not be estimated", outcomes.len());
    }
    Ok(())
}

/// `pagewords ocr-count` — count words in text produced by an OCR engine.
pub fn ocr_count(text_file: &Path, json: bool) -> Result<()> {
    let scan = analyze_ocr_text(text_file)
        .with_context(|| format!("failed to read OCR text from {}", text_file.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&scan)?);
    } else {
        println!(
            "{}: {} words ({} non-blank lines)",
            text_file.display(),
            scan.word_count,
            scan.line_count.unwrap_or(0)
        );
    }
    Ok(())
}
