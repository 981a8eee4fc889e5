// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixel-order reversal.

use tracing::{info, instrument};

use crate::pixel::PixelImage;

/// Return a copy of `image` with its pixel sequence reversed: output pixel `i`
/// is input pixel `N - 1 - i`.
///
/// Channels inside a pixel keep their order. Applying this twice gives back the
/// original image.
#[instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn reverse_pixels(image: &PixelImage) -> PixelImage {
    info!(mode = image.mode().name(), "Reversing pixel order");
    let channels = image.mode().channels();
    let mut samples = Vec::with_capacity(image.samples().len());
    for pixel in image.samples().rchunks_exact(channels) {
        samples.extend_from_slice(pixel);
    }
    image.with_samples(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::ColorMode;

    #[test]
    fn two_pixels_swap_places() {
        let img =
            PixelImage::from_pixels(2, 1, ColorMode::Rgb, &[[10u8, 20, 30], [40, 50, 60]]).unwrap();
        let out = reverse_pixels(&img);
        assert_eq!(out.samples(), &[40, 50, 60, 10, 20, 30]);
        // Input untouched.
        assert_eq!(img.samples(), &[10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn rows_are_not_reversed_independently() {
        let img = PixelImage::from_pixels(2, 2, ColorMode::L, &[[1u8], [2], [3], [4]]).unwrap();
        assert_eq!(reverse_pixels(&img).samples(), &[4, 3, 2, 1]);
    }

    #[test]
    fn twice_is_identity() {
        let samples: Vec<u8> = (0..(5 * 3 * 4)).map(|v| (v * 7 % 251) as u8).collect();
        let img = PixelImage::new(5, 3, ColorMode::Rgba, samples).unwrap();
        assert_eq!(reverse_pixels(&reverse_pixels(&img)), img);
    }

    #[test]
    fn geometry_and_mode_preserved() {
        let img = PixelImage::new(4, 3, ColorMode::La, vec![1; 24]).unwrap();
        let out = reverse_pixels(&img);
        assert_eq!((out.width(), out.height(), out.mode()), (4, 3, ColorMode::La));
    }

    #[test]
    fn empty_image_stays_empty() {
        let img = PixelImage::new(0, 0, ColorMode::Rgb, Vec::new()).unwrap();
        let out = reverse_pixels(&img);
        assert_eq!((out.width(), out.height()), (0, 0));
        assert!(out.samples().is_empty());
    }
}
