// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Row-major 8-bit pixel buffer and its conversions to and from `DynamicImage`.

use image::{DynamicImage, ImageBuffer};
use pixelveil_core::error::{PixelveilError, Result};
use tracing::debug;

/// Channel layout of a [`PixelImage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Grayscale.
    L,
    /// Grayscale with alpha.
    La,
    Rgb,
    Rgba,
}

impl ColorMode {
    /// Number of 8-bit channels per pixel.
    pub fn channels(&self) -> usize {
        match self {
            ColorMode::L => 1,
            ColorMode::La => 2,
            ColorMode::Rgb => 3,
            ColorMode::Rgba => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::L => "L",
            ColorMode::La => "LA",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
        }
    }
}

/// An immutable W×H image whose pixels are stored as one flat, row-major run
/// of 8-bit samples.
///
/// The sample count always equals `width * height * mode.channels()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    width: u32,
    height: u32,
    mode: ColorMode,
    samples: Vec<u8>,
}

impl PixelImage {
    /// Wrap an existing sample buffer, checking its length.
    pub fn new(width: u32, height: u32, mode: ColorMode, samples: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(mode.channels()))
            .ok_or_else(|| {
                PixelveilError::invalid(format!(
                    "{width}x{height} {} image does not fit in memory",
                    mode.name()
                ))
            })?;
        if samples.len() != expected {
            return Err(PixelveilError::BufferMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            mode,
            samples,
        })
    }

    /// Build an image from a list of pixels given in row-major order.
    ///
    /// Every pixel must have exactly `mode.channels()` values.
    pub fn from_pixels<P: AsRef<[u8]>>(
        width: u32,
        height: u32,
        mode: ColorMode,
        pixels: &[P],
    ) -> Result<Self> {
        let channels = mode.channels();
        let mut samples = Vec::with_capacity(pixels.len() * channels);
        for (index, pixel) in pixels.iter().enumerate() {
            let pixel = pixel.as_ref();
            if pixel.len() != channels {
                return Err(PixelveilError::invalid(format!(
                    "pixel {index} has {} channels, {} mode needs {channels}",
                    pixel.len(),
                    mode.name()
                )));
            }
            samples.extend_from_slice(pixel);
        }
        Self::new(width, height, mode, samples)
    }

    /// An image with the same geometry and mode as `self` but new samples.
    pub(crate) fn with_samples(&self, samples: Vec<u8>) -> Self {
        debug_assert_eq!(samples.len(), self.samples.len());
        Self {
            width: self.width,
            height: self.height,
            mode: self.mode,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Number of pixels (W×H).
    pub fn pixel_count(&self) -> usize {
        self.samples.len() / self.mode.channels()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The raw row-major samples.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Iterate over pixels in row-major order, one channel slice per pixel.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.samples.chunks_exact(self.mode.channels())
    }

    /// Pixel at row-major index `index`, if in range.
    pub fn pixel(&self, index: usize) -> Option<&[u8]> {
        let channels = self.mode.channels();
        let start = index.checked_mul(channels)?;
        self.samples.get(start..start.checked_add(channels)?)
    }

    // -- Conversions ----------------------------------------------------------

    /// Take ownership of a decoded image.
    ///
    /// 8-bit L, LA, RGB and RGBA layouts are kept as-is. Anything else
    /// (16-bit, float) is narrowed to 8-bit RGBA when it has alpha and to
    /// 8-bit RGB otherwise.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        let (width, height) = (image.width(), image.height());
        let (mode, samples) = match image {
            DynamicImage::ImageLuma8(buf) => (ColorMode::L, buf.into_raw()),
            DynamicImage::ImageLumaA8(buf) => (ColorMode::La, buf.into_raw()),
            DynamicImage::ImageRgb8(buf) => (ColorMode::Rgb, buf.into_raw()),
            DynamicImage::ImageRgba8(buf) => (ColorMode::Rgba, buf.into_raw()),
            other => {
                debug!(color = ?other.color(), "Narrowing image to 8-bit channels");
                if other.color().has_alpha() {
                    (ColorMode::Rgba, other.to_rgba8().into_raw())
                } else {
                    (ColorMode::Rgb, other.to_rgb8().into_raw())
                }
            }
        };
        Self {
            width,
            height,
            mode,
            samples,
        }
    }

    /// Copy of this image converted to 8-bit RGB, dropping any alpha.
    pub fn to_rgb(&self) -> Self {
        if self.mode == ColorMode::Rgb {
            return self.clone();
        }
        debug!(from = self.mode.name(), "Converting image to RGB");
        let samples = self
            .pixels()
            .flat_map(|px| match px.len() {
                1 | 2 => [px[0], px[0], px[0]],
                _ => [px[0], px[1], px[2]],
            })
            .collect();
        Self {
            width: self.width,
            height: self.height,
            mode: ColorMode::Rgb,
            samples,
        }
    }

    /// Convert into an `image` crate buffer for encoding or resizing.
    pub fn to_dynamic(&self) -> Result<DynamicImage> {
        let (w, h) = (self.width, self.height);
        let raw = self.samples.clone();
        let image = match self.mode {
            ColorMode::L => ImageBuffer::from_raw(w, h, raw).map(DynamicImage::ImageLuma8),
            ColorMode::La => ImageBuffer::from_raw(w, h, raw).map(DynamicImage::ImageLumaA8),
            ColorMode::Rgb => ImageBuffer::from_raw(w, h, raw).map(DynamicImage::ImageRgb8),
            ColorMode::Rgba => ImageBuffer::from_raw(w, h, raw).map(DynamicImage::ImageRgba8),
        };
        image.ok_or(PixelveilError::BufferMismatch {
            expected: (w as usize)
                .saturating_mul(h as usize)
                .saturating_mul(self.mode.channels()),
            actual: self.samples.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn new_rejects_wrong_length() {
        let err = PixelImage::new(2, 2, ColorMode::Rgb, vec![0; 11]).unwrap_err();
        match err {
            PixelveilError::BufferMismatch { expected, actual } => {
                assert_eq!(expected, 12);
                assert_eq!(actual, 11);
            }
            other => panic!("unexpected error variant: {other}"),
        }
    }

    #[test]
    fn new_rejects_overflowing_dimensions() {
        let err = PixelImage::new(u32::MAX, u32::MAX, ColorMode::Rgba, Vec::new()).unwrap_err();
        assert!(matches!(err, PixelveilError::InvalidArgument(_)));

        // 2^31 x 2^31 x 4 wraps to zero on 64-bit; an empty buffer must not pass.
        let err = PixelImage::new(1 << 31, 1 << 31, ColorMode::Rgba, Vec::new()).unwrap_err();
        assert!(matches!(err, PixelveilError::InvalidArgument(_)));
    }

    #[test]
    fn from_pixels_checks_channel_count() {
        let err = PixelImage::from_pixels(1, 1, ColorMode::Rgba, &[[1u8, 2, 3]]).unwrap_err();
        assert!(matches!(err, PixelveilError::InvalidArgument(_)));
    }

    #[test]
    fn pixels_iterate_row_major() {
        let img = PixelImage::from_pixels(
            2,
            2,
            ColorMode::Rgb,
            &[[1u8, 1, 1], [2, 2, 2], [3, 3, 3], [4, 4, 4]],
        )
        .unwrap();
        let firsts: Vec<u8> = img.pixels().map(|px| px[0]).collect();
        assert_eq!(firsts, vec![1, 2, 3, 4]);
        assert_eq!(img.pixel(3), Some(&[4u8, 4, 4][..]));
        assert_eq!(img.pixel(4), None);
        assert_eq!(img.pixel(usize::MAX), None);
        assert_eq!(img.pixel(usize::MAX / 3), None);
    }

    #[test]
    fn empty_image_is_valid() {
        let img = PixelImage::new(0, 0, ColorMode::Rgb, Vec::new()).unwrap();
        assert!(img.is_empty());
        assert_eq!(img.pixels().count(), 0);
    }

    #[test]
    fn dynamic_round_trip_keeps_layout() {
        let mut buf = RgbImage::new(3, 2);
        buf.put_pixel(2, 1, Rgb([9, 8, 7]));
        let img = PixelImage::from_dynamic(DynamicImage::ImageRgb8(buf.clone()));
        assert_eq!(img.mode(), ColorMode::Rgb);
        assert_eq!(img.pixel(5), Some(&[9u8, 8, 7][..]));

        let back = img.to_dynamic().unwrap();
        assert_eq!(back.to_rgb8(), buf);
    }

    #[test]
    fn sixteen_bit_is_narrowed() {
        let wide = DynamicImage::new_rgb16(4, 4);
        let img = PixelImage::from_dynamic(wide);
        assert_eq!(img.mode(), ColorMode::Rgb);
        assert_eq!(img.samples().len(), 4 * 4 * 3);
    }

    #[test]
    fn gray_converts_to_rgb() {
        let gray = GrayImage::from_pixel(2, 1, Luma([77u8]));
        let img = PixelImage::from_dynamic(DynamicImage::ImageLuma8(gray)).to_rgb();
        assert_eq!(img.mode(), ColorMode::Rgb);
        assert_eq!(img.samples(), &[77, 77, 77, 77, 77, 77]);
    }

    #[test]
    fn rgba_to_rgb_drops_alpha() {
        let img = PixelImage::from_pixels(1, 1, ColorMode::Rgba, &[[1u8, 2, 3, 4]]).unwrap();
        assert_eq!(img.to_rgb().samples(), &[1, 2, 3]);
    }
}
