// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Viewing and changing persisted settings.

use anyhow::Result;
use clap::Subcommand;

use super::book::MethodArg;
use crate::services::app_services::AppServices;

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the current settings
    Show,
    /// Default words per detected line
    SetWordsPerLine { value: f64 },
    /// Longest page side analysed, in pixels (0 = no scaling)
    SetMaxDimension { pixels: u32 },
    /// Default counting method for `book add`
    SetMethod {
        #[arg(value_enum)]
        method: MethodArg,
    },
}

pub fn run(svc: &mut AppServices, action: ConfigAction) -> Result<()> {
    let mut config = svc.config().clone();
    match action {
        ConfigAction::Show => {
            println!("data directory:  {}", svc.data_dir().display());
            println!("words per line:  {}", config.words_per_line);
            println!("max dimension:   {}", config.max_dimension);
            println!("default method:  {:?}", config.default_method);
            return Ok(());
        }
        ConfigAction::SetWordsPerLine { value } => {
            if !(value.is_finite() && value > 0.0) {
                anyhow::bail!("words per line must be a positive number, got {value}");
            }
            config.words_per_line = value;
        }
        ConfigAction::SetMaxDimension { pixels } => config.max_dimension = pixels,
        ConfigAction::SetMethod { method } => config.default_method = method.into(),
    }
    svc.save_config(config)?;
    println!("Settings saved.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewords_core::config::DefaultMethod;

    #[test]
    fn set_method_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let mut svc = AppServices::open(dir.path().to_path_buf());
        run(&mut svc, ConfigAction::SetMethod { method: MethodArg::Ocr }).unwrap();

        let reopened = AppServices::open(dir.path().to_path_buf());
        assert_eq!(reopened.config().default_method, DefaultMethod::Ocr);
    }

    #[test]
    fn bad_words_per_line_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let mut svc = AppServices::open(dir.path().to_path_buf());
        assert!(run(&mut svc, ConfigAction::SetWordsPerLine { value: -3.0 }).is_err());
        assert_eq!(svc.config().words_per_line, 10.0);
    }
}
