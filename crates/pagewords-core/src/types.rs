// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for PageWords.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a scanned page result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScanId(pub Uuid);

impl ScanId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ScanId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ScanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(pub Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Output of one fast line estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Number of text lines detected on the page.
    pub line_count: u32,
    /// Adaptive dark-pixel threshold, rounded to the nearest integer.
    pub threshold: u8,
    /// `max(1, round(line_count * words_per_line))`.
    pub word_count: u32,
}

/// How a page's word count was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EstimateMethod {
    /// Line-structure estimate with a words-per-line multiplier.
    Fast { words_per_line: f64 },
    /// Words counted from text produced by an external OCR engine.
    Ocr,
}

impl EstimateMethod {
    /// Label shown next to a scan in listings.
    pub fn label(&self) -> String {
        match self {
            Self::Fast { words_per_line } => {
                format!("Fast estimate ({} words/line)", words_per_line)
            }
            Self::Ocr => "OCR word count".to_string(),
        }
    }
}

/// One analysed page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub id: ScanId,
    pub method: EstimateMethod,
    pub method_label: String,
    pub word_count: u32,
    /// Detected (fast) or non-blank (OCR) line count.
    pub line_count: Option<u32>,
    /// Adaptive threshold used by the fast estimator.
    pub threshold: Option<u8>,
    /// Leading excerpt of the OCR text.
    pub ocr_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ScanResult {
    /// Record a fast estimate.
    pub fn from_estimate(estimate: &EstimationResult, words_per_line: f64) -> Self {
        let method = EstimateMethod::Fast { words_per_line };
        Self {
            id: ScanId::new(),
            method_label: method.label(),
            method,
            word_count: estimate.word_count,
            line_count: Some(estimate.line_count),
            threshold: Some(estimate.threshold),
            ocr_text: None,
            created_at: Utc::now(),
        }
    }

    /// Record an OCR-text count.
    pub fn from_ocr(word_count: u32, line_count: u32, excerpt: String) -> Self {
        let method = EstimateMethod::Ocr;
        Self {
            id: ScanId::new(),
            method_label: method.label(),
            method,
            word_count,
            line_count: Some(line_count),
            threshold: None,
            ocr_text: Some(excerpt),
            created_at: Utc::now(),
        }
    }
}
