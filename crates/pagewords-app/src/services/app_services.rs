// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — owns the persisted library (current book and
// saved-book history) and the application config, both stored as JSON
// files in the data directory.

use std::path::{Path, PathBuf};

use pagewords_core::AppConfig;
use pagewords_core::book::LibraryState;
use pagewords_core::error::Result;
use tracing::{debug, info, instrument, warn};

/// Library state file. The version suffix changes if the layout ever does.
pub const STATE_FILE: &str = "pagewords.v1.json";
pub const CONFIG_FILE: &str = "config.json";

/// Loaded application state plus where it lives on disk.
#[derive(Debug)]
pub struct AppServices {
    data_dir: PathBuf,
    config: AppConfig,
    library: LibraryState,
}

impl AppServices {
    /// Load config and library from `data_dir`.
    ///
    /// Missing or unreadable files fall back to defaults; a damaged state
    /// file never prevents the tool from starting.
    #[instrument(skip_all, fields(path = %data_dir.display()))]
    pub fn open(data_dir: PathBuf) -> Self {
        let config = load_config(&data_dir).unwrap_or_default();
        let library = load_library(&data_dir);
        debug!(
            scans = library.current_book.scans.len(),
            saved_books = library.history.len(),
            "app services loaded"
        );
        Self {
            data_dir,
            config,
            library,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    // -- Library -------------------------------------------------------------

    pub fn library(&self) -> &LibraryState {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut LibraryState {
        &mut self.library
    }

    /// Write the library to the state file.
    pub fn save_library(&self) -> Result<()> {
        write_json(&self.data_dir, STATE_FILE, &self.library)?;
        info!("library saved");
        Ok(())
    }

    /// Pretty-printed JSON of the whole library, for export.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.library)?)
    }

    // -- Config Persistence --------------------------------------------------

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Replace the config and persist it.
    pub fn save_config(&mut self, config: AppConfig) -> Result<()> {
        self.config = config;
        write_json(&self.data_dir, CONFIG_FILE, &self.config)
    }
}

fn load_config(data_dir: &Path) -> Option<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&data) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            None
        }
    }
}

fn load_library(data_dir: &Path) -> LibraryState {
    let path = data_dir.join(STATE_FILE);
    let data = match std::fs::read_to_string(&path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return LibraryState::default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read saved state");
            return LibraryState::default();
        }
    };
    serde_json::from_str(&data).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "failed to parse saved state");
        LibraryState::default()
    })
}

fn write_json<T: serde::Serialize>(data_dir: &Path, file: &str, value: &T) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(data_dir.join(file), json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewords_core::types::ScanResult;

    #[test]
    fn fresh_directory_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let svc = AppServices::open(dir.path().join("not-yet-created"));
        assert!(svc.library().current_book.scans.is_empty());
        assert!(svc.library().history.is_empty());
        assert_eq!(svc.config(), &AppConfig::default());
    }

    #[test]
    fn library_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut svc = AppServices::open(dir.path().to_path_buf());
        svc.library_mut().current_book.set_title("Dune");
        svc.library_mut()
            .current_book
            .add_scan(ScanResult::from_ocr(310, 38, "excerpt".into()));
        svc.save_library().unwrap();

        let reopened = AppServices::open(dir.path().to_path_buf());
        assert_eq!(reopened.library(), svc.library());
    }

    #[test]
    fn corrupt_state_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(STATE_FILE), "{ not json").unwrap();
        let svc = AppServices::open(dir.path().to_path_buf());
        assert!(svc.library().history.is_empty());
    }

    #[test]
    fn config_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let mut svc = AppServices::open(dir.path().to_path_buf());
        let config = AppConfig {
            words_per_line: 12.0,
            ..AppConfig::default()
        };
        svc.save_config(config.clone()).unwrap();

        let reopened = AppServices::open(dir.path().to_path_buf());
        assert_eq!(reopened.config(), &config);
    }

    #[test]
    fn export_is_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let svc = AppServices::open(dir.path().to_path_buf());
        let json = svc.export_json().unwrap();
        let parsed: LibraryState = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, svc.library());
        assert!(json.contains('\n'));
    }
}
