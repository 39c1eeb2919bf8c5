// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — decoding page images and bounding their size for analysis.

pub mod processor;

pub use processor::{PageImage, fitted_dimensions};
