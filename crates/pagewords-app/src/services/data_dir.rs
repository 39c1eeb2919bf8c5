// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Data directory resolution.

use std::path::PathBuf;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "PAGEWORDS_DATA_DIR";

/// Return the application data directory. It is created lazily on first write.
///
/// Precedence: explicit override, `$PAGEWORDS_DATA_DIR`, then the XDG data
/// location.
pub fn data_dir(override_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir;
    }
    if let Some(dir) = std::env::var(DATA_DIR_ENV).ok().filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs_fallback().join("pagewords")
}

fn dirs_fallback() -> PathBuf {
    // Try XDG data dir, then fallback to home
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local").join("share");
    }
    // Last resort
    PathBuf::from(".")
}
