// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Word and line counting over text produced by an external OCR engine.
//
// No recognition happens here: callers run whatever engine they like and
// hand over the text, and the result lands in the same shape as a fast
// estimate so books can mix both kinds of scan.

use std::sync::LazyLock;

use pagewords_core::types::ScanResult;
use regex::Regex;
use tracing::debug;

static RE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}']+").expect("valid word regex"));

/// Characters of OCR text kept alongside a scan.
pub const EXCERPT_CHARS: usize = 1200;

/// Counts derived from one page of OCR text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrTally {
    pub word_count: u32,
    pub line_count: u32,
    /// First [`EXCERPT_CHARS`] characters of the text.
    pub excerpt: String,
}

impl OcrTally {
    pub fn from_text(text: &str) -> Self {
        let tally = Self {
            word_count: count_words(text),
            line_count: count_text_lines(text),
            excerpt: text.chars().take(EXCERPT_CHARS).collect(),
        };
        debug!(
            words = tally.word_count,
            lines = tally.line_count,
            "OCR text counted"
        );
        tally
    }

    pub fn into_scan(self) -> ScanResult {
        ScanResult::from_ocr(self.word_count, self.line_count, self.excerpt)
    }
}

/// Number of maximal runs of Unicode letters (`\p{L}`), numbers (`\p{N}`)
/// and apostrophes.
///
/// Hyphens and other punctuation split words: `"well-known"` counts as two.
/// Combining marks are not letters, so they split words too.
pub fn count_words(text: &str) -> u32 {
    RE_WORD.find_iter(text).count() as u32
}

/// Number of lines containing something other than whitespace.
pub fn count_text_lines(text: &str) -> u32 {
    text.lines().filter(|l| !l.trim().is_empty()).count() as u32
}
