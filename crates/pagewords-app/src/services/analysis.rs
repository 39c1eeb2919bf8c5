// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page analysis — turns files on disk into scan results via the fast
// estimator or externally produced OCR text.

use std::path::{Path, PathBuf};

use pagewords_core::error::Result;
use pagewords_core::types::ScanResult;
use pagewords_document::{OcrTally, PageImage, estimate};
use rayon::prelude::*;
use tracing::{info, instrument};

/// Decode, fit and estimate one page image.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn analyze_image(path: &Path, words_per_line: f64, max_dimension: u32) -> Result<ScanResult> {
    let raster = PageImage::open(path)?.fit_within(max_dimension).to_raster()?;
    let result = estimate(&raster, words_per_line)?;
    info!(
        lines = result.line_count,
        words = result.word_count,
        threshold = result.threshold,
        "page estimated"
    );
    Ok(ScanResult::from_estimate(&result, words_per_line))
}

/// Count words in a text file produced by an OCR engine.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn analyze_ocr_text(path: &Path) -> Result<ScanResult> {
    let text = std::fs::read_to_string(path)?;
    Ok(OcrTally::from_text(&text).into_scan())
}

/// Outcome for one page of a batch.
pub struct PageOutcome {
    pub path: PathBuf,
    pub result: Result<ScanResult>,
}

/// Estimate many pages in parallel, one task per page. Output order matches
/// input order; a failing page does not stop the others.
pub fn estimate_pages(paths: &[PathBuf], words_per_line: f64, max_dimension: u32) -> Vec<PageOutcome> {
    paths
        .par_iter()
        .map(|path| PageOutcome {
            path: path.clone(),
            result: analyze_image(path, words_per_line, max_dimension),
        })
        .collect()
}
