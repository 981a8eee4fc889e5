// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pixelveil-image: Pixel buffers and transforms for Pixelveil.
//
// Provides the row-major pixel buffer (`PixelImage`), the two self-inverse
// transforms (pixel-order reversal and channel XOR) with a dispatcher driven by
// `TransformConfig`, and an `ImageProcessor` that loads, previews and saves
// images through the `image` crate.

pub mod pixel;
pub mod processor;
pub mod transform;

// Re-export the primary items so callers can use `pixelveil_image::PixelImage` etc.
pub use pixel::{ColorMode, PixelImage};
pub use processor::ImageProcessor;
pub use transform::{apply, reverse_pixels, xor_channels, xor_channels_with};
