// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fast line estimator — counts text lines on a page from its row ink-density
// profile and converts the count into a word estimate.

use pagewords_core::error::PagewordsError;
use pagewords_core::types::EstimationResult;
use tracing::{debug, instrument};

use super::profile::{intensity_stats, row_density, smooth};
use crate::raster::RasterImage;

/// Largest accepted smoothing half-window, in rows.
pub const MAX_SMOOTHING_HALF_WINDOW: usize = 1024;

/// Tunables for line detection.
///
/// [`EstimatorParams::default`] holds the calibrated values; results are only
/// comparable across pages analysed with the same parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorParams {
    /// Lowest allowed dark-pixel threshold.
    pub threshold_floor: f64,
    /// Threshold is `mean - sigma_factor * std_dev` (before the floor).
    pub sigma_factor: f64,
    /// Smoothed row density must exceed this to be part of a line.
    pub min_density: f64,
    /// Rows on each side included in the moving average.
    pub smoothing_half_window: usize,
    /// Lower bound for the minimum line height, in rows.
    pub min_line_height_floor: u32,
    /// Minimum line height as a fraction of page height.
    pub min_line_height_ratio: f64,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            threshold_floor: 40.0,
            sigma_factor: 0.5,
            min_density: 0.05,
            smoothing_half_window: 2,
            min_line_height_floor: 4,
            min_line_height_ratio: 0.008,
        }
    }
}

impl EstimatorParams {
    /// Check that every field is usable.
    pub fn validate(&self) -> Result<(), PagewordsError> {
        let finite_non_negative = |name: &str, v: f64| {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(PagewordsError::InvalidInput(format!(
                    "{name} must be a finite non-negative number, got {v}"
                )))
            }
        };
        finite_non_negative("threshold_floor", self.threshold_floor)?;
        finite_non_negative("sigma_factor", self.sigma_factor)?;
        finite_non_negative("min_line_height_ratio", self.min_line_height_ratio)?;
        if self.threshold_floor > 255.0 {
            return Err(PagewordsError::InvalidInput(format!(
                "threshold_floor must be at most 255, got {}",
                self.threshold_floor
            )));
        }
        if self.smoothing_half_window > MAX_SMOOTHING_HALF_WINDOW {
            return Err(PagewordsError::InvalidInput(format!(
                "smoothing_half_window must be at most {MAX_SMOOTHING_HALF_WINDOW}, got {}",
                self.smoothing_half_window
            )));
        }
        if !(0.0..1.0).contains(&self.min_density) {
            return Err(PagewordsError::InvalidInput(format!(
                "min_density must be in [0, 1), got {}",
                self.min_density
            )));
        }
        Ok(())
    }

    /// `max(floor, round(height * ratio))` rows.
    pub fn min_line_height(&self, height: u32) -> u32 {
        let scaled = (f64::from(height) * self.min_line_height_ratio).round() as u32;
        scaled.max(self.min_line_height_floor)
    }
}

/// A detected text line: rows `start_row..end_row` (end exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSegment {
    pub start_row: u32,
    pub end_row: u32,
}

impl LineSegment {
    pub fn height(&self) -> u32 {
        self.end_row - self.start_row
    }
}

/// Everything computed while detecting lines on one page.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDetection {
    pub mean: f64,
    pub std_dev: f64,
    /// Unrounded threshold used to classify pixels.
    pub threshold: f64,
    pub min_line_height: u32,
    pub segments: Vec<LineSegment>,
}

impl LineDetection {
    pub fn line_count(&self) -> u32 {
        self.segments.len() as u32
    }

    /// Threshold rounded to the nearest integer intensity.
    pub fn rounded_threshold(&self) -> u8 {
        self.threshold.round().clamp(0.0, 255.0) as u8
    }
}

/// Counts text lines on page rasters.
///
/// Holds only its parameters; each call is independent, so one estimator may
/// be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct LineEstimator {
    params: EstimatorParams,
}

impl LineEstimator {
    /// Estimator with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimator with custom parameters.
    pub fn with_params(params: EstimatorParams) -> Result<Self, PagewordsError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &EstimatorParams {
        &self.params
    }

    /// Detect text lines and return the intermediate figures.
    ///
    /// 1. Global mean/std-dev of the unweighted gray value
    /// 2. Threshold `max(floor, mean - sigma_factor * std_dev)`
    /// 3. Per-row fraction of pixels below the threshold
    /// 4. Moving-average smoothing
    /// 5. Run segmentation with a minimum height
    #[instrument(skip_all, fields(width = image.width(), height = image.height()))]
    pub fn detect_lines(&self, image: &RasterImage) -> LineDetection {
        let p = &self.params;

        let stats = intensity_stats(image);
        let threshold = (stats.mean - p.sigma_factor * stats.std_dev).max(p.threshold_floor);

        let density = row_density(image, threshold);
        let smoothed = smooth(&density, p.smoothing_half_window);

        let min_line_height = p.min_line_height(image.height());
        let segments = segment_lines(&smoothed, p.min_density, min_line_height);

        debug!(
            mean = stats.mean,
            std_dev = stats.std_dev,
            threshold,
            min_line_height,
            lines = segments.len(),
            "Line detection complete"
        );

        LineDetection {
            mean: stats.mean,
            std_dev: stats.std_dev,
            threshold,
            min_line_height,
            segments,
        }
    }

    /// Estimate the page's word count as `max(1, round(lines * words_per_line))`.
    ///
    /// # Errors
    ///
    /// [`PagewordsError::InvalidInput`] if `words_per_line` is not a positive
    /// finite number. Nothing is computed in that case.
    pub fn estimate(
        &self,
        image: &RasterImage,
        words_per_line: f64,
    ) -> Result<EstimationResult, PagewordsError> {
        validate_words_per_line(words_per_line)?;

        let detection = self.detect_lines(image);
        let line_count = detection.line_count();

        Ok(EstimationResult {
            line_count,
            threshold: detection.rounded_threshold(),
            word_count: words_from_lines(line_count, words_per_line),
        })
    }
}

/// Estimate a page with the default parameters.
///
/// See [`LineEstimator::estimate`].
pub fn estimate(
    image: &RasterImage,
    words_per_line: f64,
) -> Result<EstimationResult, PagewordsError> {
    LineEstimator::new().estimate(image, words_per_line)
}

/// Estimate a page with custom parameters.
pub fn estimate_with(
    image: &RasterImage,
    words_per_line: f64,
    params: &EstimatorParams,
) -> Result<EstimationResult, PagewordsError> {
    LineEstimator::with_params(*params)?.estimate(image, words_per_line)
}

/// `max(1, round(line_count * words_per_line))`; a submitted page never
/// reports zero words.
pub fn words_from_lines(line_count: u32, words_per_line: f64) -> u32 {
    let words = (f64::from(line_count) * words_per_line).round() as u32;
    words.max(1)
}

fn validate_words_per_line(words_per_line: f64) -> Result<(), PagewordsError> {
    if words_per_line.is_finite() && words_per_line > 0.0 {
        Ok(())
    } else {
        Err(PagewordsError::InvalidInput(format!(
            "words_per_line must be a positive number, got {words_per_line}"
        )))
    }
}

/// Scan state while walking the smoothed profile top to bottom.
#[derive(Debug, Clone, Copy)]
enum RunState {
    Outside,
    InsideRun { start: usize },
}

/// Split a smoothed density profile into runs above `min_density`, keeping
/// runs at least `min_line_height` rows tall. A run still open at the last
/// row is closed at the bottom edge.
fn segment_lines(smoothed: &[f64], min_density: f64, min_line_height: u32) -> Vec<LineSegment> {
    let mut segments = Vec::new();
    let mut state = RunState::Outside;

    let close = |start: usize, end: usize, segments: &mut Vec<LineSegment>| {
        if end - start >= min_line_height as usize {
            segments.push(LineSegment {
                start_row: start as u32,
                end_row: end as u32,
            });
        }
    };

    for (y, &density) in smoothed.iter().enumerate() {
        state = match (state, density > min_density) {
            (RunState::Outside, true) => RunState::InsideRun { start: y },
            (RunState::InsideRun { start }, false) => {
                close(start, y, &mut segments);
                RunState::Outside
            }
            (unchanged, _) => unchanged,
        };
    }
    if let RunState::InsideRun { start } = state {
        close(start, smoothed.len(), &mut segments);
    }

    segments
}
