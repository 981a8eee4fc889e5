// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor: load, transform, preview and save a single image. Decoding
// and encoding go through the `image` crate; the pixel work is delegated to
// the `transform` module.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageError, ImageFormat};
use pixelveil_core::error::{PixelveilError, Result};
use pixelveil_core::types::TransformConfig;
use tracing::{debug, info, instrument};

use crate::pixel::PixelImage;
use crate::transform;

/// File extensions accepted by the open dialog.
pub const INPUT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

/// Image pipeline operating on a single in-memory image.
///
/// All operations are non-destructive: each transform consumes `self` and
/// returns a new `ImageProcessor` wrapping the transformed image, enabling
/// method chaining.
///
/// ```ignore
/// ImageProcessor::open("photo.jpg")?
///     .convert_to_rgb()
///     .apply(&TransformConfig::xor(Mode::Encrypt, 42))?
///     .save("scrambled.png")?;
/// ```
#[derive(Debug, Clone)]
pub struct ImageProcessor {
    image: PixelImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Decode an image file. The format is sniffed from the file contents.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|err| decode_error(path, err))?;
        info!(
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            "Image loaded"
        );
        Ok(Self::from_dynamic(img))
    }

    /// Create a processor from raw encoded bytes (PNG, JPEG, BMP, ...).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data)
            .map_err(|err| PixelveilError::ImageDecode(err.to_string()))?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Image decoded from bytes"
        );
        Ok(Self::from_dynamic(img))
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self {
            image: PixelImage::from_dynamic(image),
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn as_pixels(&self) -> &PixelImage {
        &self.image
    }

    // -- Transformations (consume self, return new Self) ----------------------

    /// Normalise to 8-bit RGB, dropping alpha.
    pub fn convert_to_rgb(self) -> Self {
        Self {
            image: self.image.to_rgb(),
        }
    }

    /// Run whichever transform `config` selects.
    pub fn apply(self, config: &TransformConfig) -> Result<Self> {
        Ok(Self {
            image: transform::apply(&self.image, config)?,
        })
    }

    // -- Output ---------------------------------------------------------------

    /// A copy scaled down to fit within `max_edge` × `max_edge`, preserving
    /// aspect ratio. Images that already fit are returned at full size.
    pub fn thumbnail(&self, max_edge: u32) -> Result<DynamicImage> {
        if self.image.is_empty() {
            return Err(PixelveilError::invalid("cannot preview an empty image"));
        }
        let img = self.image.to_dynamic()?;
        if img.width() <= max_edge && img.height() <= max_edge {
            return Ok(img);
        }
        let thumb = img.thumbnail(max_edge, max_edge);
        debug!(
            width = thumb.width(),
            height = thumb.height(),
            "Thumbnail generated"
        );
        Ok(thumb)
    }

    /// PNG-encoded thumbnail for on-screen previews.
    pub fn preview_png(&self, max_edge: u32) -> Result<Vec<u8>> {
        encode_to_format(&self.thumbnail(max_edge)?, ImageFormat::Png)
    }

    /// Write the image to a file. The format is inferred from the file extension.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image
            .to_dynamic()?
            .save(path)
            .map_err(|err| encode_error(path, err))?;
        info!(
            width = self.image.width(),
            height = self.image.height(),
            "Image saved"
        );
        Ok(())
    }

    /// Like [`save`](Self::save), but appends `default_extension` when `path`
    /// has no extension. Returns the path actually written.
    pub fn save_with_default_extension(
        &self,
        path: impl AsRef<Path>,
        default_extension: &str,
    ) -> Result<PathBuf> {
        let target = with_default_extension(path.as_ref(), default_extension);
        self.save(&target)?;
        Ok(target)
    }
}

/// `path` unchanged if it has an extension, otherwise with `extension` added.
pub fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
    let mut target = path.to_path_buf();
    if target.extension().is_none() {
        target.set_extension(extension);
    }
    target
}

fn decode_error(path: &Path, err: ImageError) -> PixelveilError {
    match err {
        ImageError::IoError(io) => PixelveilError::Io(io),
        other => PixelveilError::ImageDecode(format!("{}: {}", path.display(), other)),
    }
}

fn encode_error(path: &Path, err: ImageError) -> PixelveilError {
    match err {
        ImageError::IoError(io) => PixelveilError::Io(io),
        other => PixelveilError::ImageEncode(format!("{}: {}", path.display(), other)),
    }
}

/// Encode a `DynamicImage` into the specified format, returning the raw bytes.
fn encode_to_format(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    image
        .write_to(&mut cursor, format)
        .map_err(|err| PixelveilError::ImageEncode(err.to_string()))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::ColorMode;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use pixelveil_core::error::ErrorKind;
    use pixelveil_core::types::Mode;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 10) as u8, (y * 10) as u8, ((x + y) * 3) as u8])
        })
    }

    #[test]
    fn png_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.png");
        gradient(7, 5).save(&path).unwrap();

        let loaded = ImageProcessor::open(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (7, 5));
        assert_eq!(loaded.as_pixels().mode(), ColorMode::Rgb);

        let out = dir.path().join("out.png");
        let xor = TransformConfig::xor(Mode::Encrypt, 123);
        loaded.clone().apply(&xor).unwrap().save(&out).unwrap();

        let restored = ImageProcessor::open(&out).unwrap().apply(&xor).unwrap();
        assert_eq!(restored.as_pixels(), loaded.as_pixels());
    }

    #[test]
    fn bmp_input_is_supported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.bmp");
        gradient(4, 4).save(&path).unwrap();

        let loaded = ImageProcessor::open(&path).unwrap().convert_to_rgb();
        assert_eq!(loaded.as_pixels().samples(), gradient(4, 4).as_raw().as_slice());
    }

    #[test]
    fn missing_extension_defaults_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let proc = ImageProcessor::from_dynamic(DynamicImage::ImageRgb8(gradient(3, 3)));

        let written = proc
            .save_with_default_extension(dir.path().join("result"), "png")
            .unwrap();
        assert_eq!(written.extension().and_then(|e| e.to_str()), Some("png"));
        assert!(written.exists());

        let bytes = std::fs::read(&written).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn explicit_extension_is_kept() {
        let path = with_default_extension(Path::new("/tmp/out.bmp"), "png");
        assert_eq!(path, PathBuf::from("/tmp/out.bmp"));
    }

    #[test]
    fn open_missing_file_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageProcessor::open(dir.path().join("nope.png")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = ImageProcessor::from_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, PixelveilError::ImageDecode(_)));
    }

    #[test]
    fn unknown_output_extension_fails() {
        let dir = tempfile::tempdir().unwrap();
        let proc = ImageProcessor::from_dynamic(DynamicImage::ImageRgb8(gradient(2, 2)));
        let err = proc.save(dir.path().join("out.notaformat")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn rgba_alpha_survives_xor_and_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        let rgba = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 128]));
        ImageProcessor::from_dynamic(DynamicImage::ImageRgba8(rgba))
            .apply(&TransformConfig::xor(Mode::Encrypt, 5))
            .unwrap()
            .save(&path)
            .unwrap();

        let decoded = ImageProcessor::from_bytes(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(decoded.as_pixels().mode(), ColorMode::Rgba);
        assert_eq!(decoded.as_pixels().pixel(0), Some(&[15u8, 17, 27, 128][..]));
    }

    #[test]
    fn thumbnail_fits_bounds() {
        let proc = ImageProcessor::from_dynamic(DynamicImage::ImageRgb8(gradient(400, 100)));
        let thumb = proc.thumbnail(200).unwrap();
        assert!(thumb.width() <= 200 && thumb.height() <= 200);
        assert_eq!(thumb.width(), 200);

        let small = ImageProcessor::from_dynamic(DynamicImage::ImageRgb8(gradient(20, 10)));
        let same = small.thumbnail(200).unwrap();
        assert_eq!((same.width(), same.height()), (20, 10));
    }

    #[test]
    fn empty_image_has_no_preview() {
        let empty = ImageProcessor::from_dynamic(DynamicImage::new_rgb8(0, 0));
        assert!(empty.as_pixels().is_empty());
        assert!(empty.preview_png(200).is_err());
    }

    #[test]
    fn chained_swap_reverses_pixel_order() {
        let original = ImageProcessor::from_dynamic(DynamicImage::ImageRgb8(gradient(3, 1)));
        let swapped = original
            .clone()
            .apply(&TransformConfig::swap(Mode::Encrypt))
            .unwrap();
        let before = original.as_pixels();
        let after = swapped.as_pixels();
        assert_eq!(after.pixel(0), before.pixel(2));
        assert_eq!(after.pixel(2), before.pixel(0));
        assert_eq!((swapped.width(), swapped.height()), (3, 1));
    }

    #[test]
    fn chained_apply_round_trips() {
        let original = ImageProcessor::from_dynamic(DynamicImage::ImageRgb8(gradient(6, 4)));
        let restored = original
            .clone()
            .apply(&TransformConfig::swap(Mode::Encrypt))
            .unwrap()
            .apply(&TransformConfig::swap(Mode::Decrypt))
            .unwrap();
        assert_eq!(restored.as_pixels(), original.as_pixels());
    }
}
