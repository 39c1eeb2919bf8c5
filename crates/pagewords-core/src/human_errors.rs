// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages.
//
// Every technical error is mapped to plain English with a clear suggestion,
// so the command line never shows only a raw error chain.

use crate::error::PagewordsError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user must change something (pick another file, scan a page first).
    ActionRequired,
    /// Cannot be fixed by trying again — unreadable file, broken storage.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    pub severity: Severity,
}

/// Convert a `PagewordsError` into a `HumanError`.
pub fn humanize_error(err: &PagewordsError) -> HumanError {
    match err {
        PagewordsError::InvalidInput(detail) => HumanError {
            message: "That request doesn't make sense for this page.".into(),
            suggestion: format!("Check the numbers you entered and try again. ({detail})"),
            severity: Severity::ActionRequired,
        },

        PagewordsError::ImageError(detail) => HumanError {
            message: "We couldn't read that picture.".into(),
            suggestion: format!(
                "Make sure the file is a photo or scan (JPEG, PNG, TIFF...) and not damaged. ({detail})"
            ),
            severity: Severity::Permanent,
        },

        PagewordsError::EmptyBook => HumanError {
            message: "This book has no scanned pages yet.".into(),
            suggestion: "Add at least one scanned page before saving.".into(),
            severity: Severity::ActionRequired,
        },

        PagewordsError::Io(io) => HumanError {
            message: "A file couldn't be read or written.".into(),
            suggestion: format!("Check that the path exists and you have permission to use it. ({io})"),
            severity: Severity::Permanent,
        },

        PagewordsError::Serialization(detail) => HumanError {
            message: "Saved data is in an unexpected format.".into(),
            suggestion: format!("Export your books, then reset the data directory. ({detail})"),
            severity: Severity::Permanent,
        },
    }
}
