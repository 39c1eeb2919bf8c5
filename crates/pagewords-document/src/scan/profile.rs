// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Intensity statistics and row ink-density profiles over a raster page.

use crate::raster::{CHANNELS, RasterImage};

/// Unweighted channel average of one RGBA pixel; alpha is ignored.
///
/// Line detection uses the plain mean, not perceptual luminance, so that
/// thresholds stay comparable with previously recorded results.
#[inline]
pub fn gray(pixel: &[u8]) -> f64 {
    (u32::from(pixel[0]) + u32::from(pixel[1]) + u32::from(pixel[2])) as f64 / 3.0
}

/// Global brightness statistics of a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityStats {
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

/// Mean and population standard deviation of [`gray`] over every pixel.
///
/// Two passes: the channel sum is accumulated exactly as an integer for the
/// mean, then squared deviations are summed in `f64`.
pub fn intensity_stats(image: &RasterImage) -> IntensityStats {
    let pixels = image.pixel_count() as f64;

    let channel_sum: u64 = image
        .as_bytes()
        .chunks_exact(CHANNELS)
        .map(|p| u64::from(p[0]) + u64::from(p[1]) + u64::from(p[2]))
        .sum();
    let mean = channel_sum as f64 / 3.0 / pixels;

    let squared: f64 = image
        .as_bytes()
        .chunks_exact(CHANNELS)
        .map(|p| {
            let d = gray(p) - mean;
            d * d
        })
        .sum();

    IntensityStats {
        mean,
        std_dev: (squared / pixels).sqrt(),
    }
}

/// Fraction of pixels in each row whose gray value is strictly below
/// `threshold`. One entry per row, each in `[0, 1]`.
pub fn row_density(image: &RasterImage, threshold: f64) -> Vec<f64> {
    let width = f64::from(image.width());
    image
        .rows()
        .map(|row| {
            let dark = row
                .chunks_exact(CHANNELS)
                .filter(|p| gray(p) < threshold)
                .count();
            dark as f64 / width
        })
        .collect()
}

/// Centred moving average with the given half-window.
///
/// Rows near the top and bottom average over their in-bounds neighbours
/// only; the profile is never padded with zeros.
pub fn smooth(profile: &[f64], half_window: usize) -> Vec<f64> {
    let last = profile.len().saturating_sub(1);
    (0..profile.len())
        .map(|y| {
            let lo = y.saturating_sub(half_window);
            let hi = y.saturating_add(half_window).min(last);
            let window = &profile[lo..=hi];
            window.iter().sum::<f64>() / window.len() as f64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn gray_ignores_alpha_and_weights_channels_equally() {
        assert!(approx(gray(&[30, 60, 90, 0]), 60.0));
        assert!(approx(gray(&[90, 30, 60, 255]), 60.0));
        assert!(approx(gray(&[255, 255, 255, 17]), 255.0));
    }

    #[test]
    fn stats_of_two_tone_image() {
        // Half black, half white: mean 127.5, sigma 127.5.
        let raster = RasterImage::from_fn(2, 1, |x, _| {
            if x == 0 { [0, 0, 0, 255] } else { [255, 255, 255, 255] }
        })
        .unwrap();
        let stats = intensity_stats(&raster);
        assert!(approx(stats.mean, 127.5));
        assert!(approx(stats.std_dev, 127.5));
    }

    #[test]
    fn uniform_image_has_zero_deviation() {
        let raster = RasterImage::from_fn(7, 5, |_, _| [200, 100, 0, 255]).unwrap();
        let stats = intensity_stats(&raster);
        assert!(approx(stats.mean, 100.0));
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn density_counts_strictly_darker_pixels() {
        // Row 0: values 10, 50, 90, 130 ; row 1: all 50.
        let raster = RasterImage::from_fn(4, 2, |x, y| {
            let v = if y == 0 { 10 + 40 * x as u8 } else { 50 };
            [v, v, v, 255]
        })
        .unwrap();
        let density = row_density(&raster, 50.0);
        assert_eq!(density, vec![0.25, 0.0]);
    }

    #[test]
    fn smoothing_edges_use_in_bounds_neighbours() {
        let profile = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0];
        let smoothed = smooth(&profile, 2);
        // Top row averages rows 0..=2 only.
        assert!(approx(smoothed[0], 1.0 / 3.0));
        assert!(approx(smoothed[1], 1.0 / 4.0));
        assert!(approx(smoothed[2], 1.0 / 5.0));
        assert!(approx(smoothed[3], 0.0));
        assert!(approx(smoothed[6], 1.0 / 3.0));
    }

    #[test]
    fn smoothing_short_profiles() {
        assert!(smooth(&[], 2).is_empty());
        assert_eq!(smooth(&[0.4], 2), vec![0.4]);
        let two = smooth(&[0.2, 0.6], 2);
        assert!(approx(two[0], 0.4) && approx(two[1], 0.4));
    }

    #[test]
    fn huge_half_window_averages_whole_profile() {
        let smoothed = smooth(&[0.0, 0.3, 0.6], usize::MAX);
        assert!(smoothed.iter().all(|&v| approx(v, 0.3)));
    }
}
