// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page scanning — fast line estimation from pixel data, and counting over
// text returned by an external OCR engine.

pub mod estimate;
pub mod ocr_text;
pub mod profile;

pub use estimate::{EstimatorParams, LineDetection, LineEstimator, LineSegment, estimate};
pub use ocr_text::OcrTally;
