// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pagewords-document — Page analysis for PageWords.
//
// Provides the validated RGBA raster type, the fast line estimator (adaptive
// threshold, row ink-density profile, run segmentation), page image decoding
// with size bounding, and word/line counting over externally produced OCR text.

pub mod image;
pub mod raster;
pub mod scan;

// Re-export the primary items so callers can use `pagewords_document::estimate` etc.
pub use crate::image::processor::PageImage;
pub use raster::RasterImage;
pub use scan::estimate::{
    EstimatorParams, LineDetection, LineEstimator, LineSegment, estimate, estimate_with,
};
pub use scan::ocr_text::OcrTally;
