// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for PageWords.

use thiserror::Error;

/// Top-level error type for all PageWords operations.
#[derive(Debug, Error)]
pub enum PagewordsError {
    // -- Estimation errors --
    /// Precondition violation: bad dimensions, buffer size mismatch,
    /// non-positive `words_per_line`, out-of-range index.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // -- Image adapter errors --
    #[error("image processing failed: {0}")]
    ImageError(String),

    // -- Book workflow --
    #[error("book has no scanned pages")]
    EmptyBook,

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PagewordsError>;
