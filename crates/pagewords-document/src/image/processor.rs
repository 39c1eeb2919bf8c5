// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page image loading — decodes JPEG/PNG/TIFF/... with the `image` crate,
// scales large photos down, and hands the estimator an RGBA raster.

use image::DynamicImage;
use image::imageops::FilterType;
use pagewords_core::error::PagewordsError;
use tracing::{debug, info, instrument};

use crate::raster::RasterImage;

/// A decoded page image awaiting analysis.
///
/// Transformations consume `self` and return a new `PageImage`:
///
/// ```ignore
/// let raster = PageImage::open("page-12.jpg")?
///     .fit_within(1200)
///     .to_raster()?;
/// ```
pub struct PageImage {
    image: DynamicImage,
}

impl PageImage {
    // -- Construction ---------------------------------------------------------

    /// Load a page from a file path.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, PagewordsError> {
        let img = image::open(path.as_ref()).map_err(|err| {
            PagewordsError::ImageError(format!(
                "failed to open {}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        info!(width = img.width(), height = img.height(), "Page image loaded");
        Ok(Self { image: img })
    }

    /// Decode a page from raw encoded bytes (JPEG, PNG, etc.).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, PagewordsError> {
        let img = image::load_from_memory(data).map_err(|err| {
            PagewordsError::ImageError(format!("failed to decode image: {}", err))
        })?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Page image decoded from bytes"
        );
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    // -- Transformations ------------------------------------------------------

    /// Scale the page down so neither side exceeds `max_dimension`,
    /// preserving aspect ratio. Never upscales; `0` leaves the page as is.
    ///
    /// Line detection scales its minimum line height with page height, so
    /// pages compared against each other should be fitted to the same bound.
    #[instrument(skip(self))]
    pub fn fit_within(self, max_dimension: u32) -> Self {
        let (width, height) = (self.width(), self.height());
        let (new_w, new_h) = fitted_dimensions(width, height, max_dimension);
        if (new_w, new_h) == (width, height) {
            return self;
        }
        info!(
            from_w = width,
            from_h = height,
            new_w,
            new_h,
            "Scaling page for analysis"
        );
        Self {
            image: self.image.resize_exact(new_w, new_h, FilterType::Triangle),
        }
    }

    // -- Output ---------------------------------------------------------------

    /// Convert to the RGBA raster consumed by the line estimator.
    pub fn to_raster(&self) -> Result<RasterImage, PagewordsError> {
        RasterImage::try_from(self.image.to_rgba8())
    }
}

/// Dimensions after scaling by `min(max/w, max/h, 1)`, each rounded and
/// at least one pixel. `max_dimension == 0` disables scaling.
pub fn fitted_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    if max_dimension == 0 || width == 0 || height == 0 {
        return (width, height);
    }
    let max = f64::from(max_dimension);
    let ratio = (max / f64::from(width))
        .min(max / f64::from(height))
        .min(1.0);
    if ratio >= 1.0 {
        return (width, height);
    }
    let scale = |side: u32| ((f64::from(side) * ratio).round() as u32).max(1);
    (scale(width), scale(height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn small_pages_are_not_scaled() {
        assert_eq!(fitted_dimensions(800, 1000, 1200), (800, 1000));
        assert_eq!(fitted_dimensions(1200, 1200, 1200), (1200, 1200));
    }

    #[test]
    fn longer_side_is_capped() {
        assert_eq!(fitted_dimensions(2400, 3600, 1200), (800, 1200));
        assert_eq!(fitted_dimensions(3000, 1000, 1200), (1200, 400));
        // 1999 * (1200 / 3000) = 799.6
        assert_eq!(fitted_dimensions(1999, 3000, 1200), (800, 1200));
    }

    #[test]
    fn extreme_aspect_keeps_one_pixel() {
        assert_eq!(fitted_dimensions(10_000, 1, 1200), (1200, 1));
    }

    #[test]
    fn zero_max_disables_scaling() {
        assert_eq!(fitted_dimensions(5000, 7000, 0), (5000, 7000));
    }

    #[test]
    fn fit_within_resizes_dynamic_image() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(300, 150, Rgba([255; 4])));
        let page = PageImage::from_dynamic(img).fit_within(100);
        assert_eq!((page.width(), page.height()), (100, 50));
        let raster = page.to_raster().unwrap();
        assert_eq!(raster.as_bytes().len(), 100 * 50 * 4);
    }

    #[test]
    fn round_trips_png_bytes() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(6, 4, Rgba([10, 20, 30, 255])));
        let mut png = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let page = PageImage::from_bytes(&png).unwrap();
        assert_eq!((page.width(), page.height()), (6, 4));
    }

    #[test]
    fn garbage_bytes_are_an_image_error() {
        let result = PageImage::from_bytes(b"definitely not an image");
        assert!(matches!(result, Err(PagewordsError::ImageError(_))));
    }
}
