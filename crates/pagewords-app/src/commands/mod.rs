// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Subcommand handlers.

pub mod book;
pub mod history;
pub mod quick;
pub mod settings;

use pagewords_core::types::ScanResult;

/// Convert a 1-based page/entry number from the command line to an index.
pub(crate) fn to_index(number: usize) -> anyhow::Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("numbers start at 1"))
}

/// One-line description of a scan, e.g. `240 words · Fast estimate (10 words/line)`.
pub(crate) fn describe_scan(scan: &ScanResult) -> String {
    let mut line = format!("{} words · {}", scan.word_count, scan.method_label);
    if let Some(lines) = scan.line_count.filter(|&n| n > 0) {
        line.push_str(&format!(" · {lines} lines detected"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_numbers_are_one_based() {
        assert_eq!(to_index(1).unwrap(), 0);
        assert!(to_index(0).is_err());
    }

    #[test]
    fn describe_skips_zero_lines() {
        let scan = ScanResult::from_ocr(0, 0, String::new());
        assert_eq!(describe_scan(&scan), "0 words · OCR word count");
        let scan = ScanResult::from_ocr(12, 2, String::new());
        assert_eq!(describe_scan(&scan), "12 words · OCR word count · 2 lines detected");
    }
}
