// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster view of a decoded page — width, height, and a row-major RGBA buffer.

use pagewords_core::error::PagewordsError;

/// Bytes per pixel in a [`RasterImage`] buffer.
pub const CHANNELS: usize = 4;

/// An immutable, validated RGBA pixel buffer.
///
/// The buffer is row-major, top to bottom, four bytes per pixel. Construction
/// guarantees `width > 0`, `height > 0` and `data.len() == width * height * 4`,
/// so every consumer may divide by either dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterImage {
    /// Wrap an RGBA buffer, validating its dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, PagewordsError> {
        if width == 0 || height == 0 {
            return Err(PagewordsError::InvalidInput(format!(
                "image dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(CHANNELS))
            .ok_or_else(|| {
                PagewordsError::InvalidInput(format!("image {}x{} is too large", width, height))
            })?;
        if data.len() != expected {
            return Err(PagewordsError::InvalidInput(format!(
                "RGBA buffer for {}x{} must be {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a raster by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> [u8; 4],
    ) -> Result<Self, PagewordsError> {
        let mut data = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self::new(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over rows; each row is `width * 4` bytes.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width as usize * CHANNELS)
    }

    /// Number of pixels (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl TryFrom<::image::RgbaImage> for RasterImage {
    type Error = PagewordsError;

    fn try_from(image: ::image::RgbaImage) -> Result<Self, Self::Error> {
        let (width, height) = image.dimensions();
        Self::new(width, height, image.into_raw())
    }
}
