// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PageWords — Core types and error definitions shared across all crates.

pub mod book;
pub mod config;
pub mod error;
pub mod human_errors;
pub mod types;

pub use book::{Book, BookStats, LibraryState};
pub use config::AppConfig;
pub use error::PagewordsError;
pub use types::*;
