// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

/// Words-per-line multiplier used when neither the caller nor the config
/// supplies one.
pub const DEFAULT_WORDS_PER_LINE: f64 = 10.0;

/// Longest page side (pixels) analysed by the fast estimator.
pub const DEFAULT_MAX_DIMENSION: u32 = 1200;

/// Which counting path new scans use when none is requested explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultMethod {
    #[default]
    Fast,
    Ocr,
}

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Multiplier converting detected lines into words.
    pub words_per_line: f64,
    /// Pages are scaled down so their longer side is at most this many
    /// pixels before analysis. `0` disables scaling.
    pub max_dimension: u32,
    /// Method used by `book add` when the scan source is ambiguous.
    pub default_method: DefaultMethod,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            words_per_line: DEFAULT_WORDS_PER_LINE,
            max_dimension: DEFAULT_MAX_DIMENSION,
            default_method: DefaultMethod::Fast,
        }
    }
}

impl AppConfig {
    /// Resolve the multiplier for a request: explicit value first, then the
    /// configured one, then the built-in default. Non-positive or non-finite
    /// values are skipped at each step.
    pub fn resolve_words_per_line(&self, requested: Option<f64>) -> f64 {
        [requested, Some(self.words_per_line)]
            .into_iter()
            .flatten()
            .find(|wpl| wpl.is_finite() && *wpl > 0.0)
            .unwrap_or(DEFAULT_WORDS_PER_LINE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"words_per_line": 12}"#).unwrap();
        assert_eq!(config.words_per_line, 12.0);
        assert_eq!(config.max_dimension, DEFAULT_MAX_DIMENSION);
        assert_eq!(config.default_method, DefaultMethod::Fast);
    }

    #[test]
    fn resolve_prefers_explicit_value() {
        let config = AppConfig {
            words_per_line: 7.0,
            ..AppConfig::default()
        };
        assert_eq!(config.resolve_words_per_line(Some(9.5)), 9.5);
        assert_eq!(config.resolve_words_per_line(None), 7.0);
    }

    #[test]
    fn resolve_skips_unusable_values() {
        let config = AppConfig {
            words_per_line: 0.0,
            ..AppConfig::default()
        };
        assert_eq!(config.resolve_words_per_line(Some(-3.0)), DEFAULT_WORDS_PER_LINE);
        assert_eq!(config.resolve_words_per_line(Some(f64::NAN)), DEFAULT_WORDS_PER_LINE);
    }
}
