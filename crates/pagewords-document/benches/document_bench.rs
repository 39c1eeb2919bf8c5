// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the pagewords-document crate. Measures the fast
// line estimator on a synthetic page at the default analysis size, and the
// decode-and-fit step that precedes it.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, Rgba, RgbaImage};

use pagewords_document::{PageImage, RasterImage, estimate};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A 900x1200 page with 40 lines of word-shaped blocks, roughly what a
/// fitted phone photo of a paperback page looks like to the estimator.
fn synthetic_page() -> RgbaImage {
    RgbaImage::from_fn(900, 1200, |x, y| {
        let in_line = y >= 60 && y < 1140 && (y - 60) % 27 < 14;
        let in_word = (70..830).contains(&x) && x % 48 < 38;
        if in_line && in_word {
            Rgba([25, 25, 25, 255])
        } else {
            Rgba([240, 236, 228, 255])
        }
    })
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Benchmark the estimator alone on an already-decoded raster.
fn bench_estimate(c: &mut Criterion) {
    let raster = RasterImage::try_from(synthetic_page()).expect("valid raster");

    c.bench_function("estimate (900x1200)", |b| {
        b.iter(|| black_box(estimate(black_box(&raster), 10.0).expect("estimate")));
    });
}

/// Benchmark fitting an oversized page down to 1200px and converting it.
fn bench_fit_and_convert(c: &mut Criterion) {
    let big = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2400, 3200, Rgba([255; 4])));

    c.bench_function("fit_within + to_raster (2400x3200 -> 1200)", |b| {
        b.iter(|| {
            let page = PageImage::from_dynamic(black_box(big.clone())).fit_within(1200);
            black_box(page.to_raster().expect("raster"));
        });
    });
}

criterion_group!(benches, bench_estimate, bench_fit_and_convert);
criterion_main!(benches);
