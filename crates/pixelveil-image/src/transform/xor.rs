// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-channel XOR with a single-byte key.

use pixelveil_core::error::Result;
use pixelveil_core::types::XorKey;
use tracing::{debug, info, instrument};

use crate::pixel::PixelImage;

/// Only the colour channels are keyed; alpha and anything after it is copied.
const KEYED_CHANNELS: usize = 3;

/// XOR the first three channels of every pixel with `key`.
///
/// Fails with `InvalidArgument` when `key` is outside `0..=255`.
pub fn xor_channels(image: &PixelImage, key: i64) -> Result<PixelImage> {
    let key = XorKey::new(key)?;
    Ok(xor_channels_with(image, key))
}

/// [`xor_channels`] with an already validated key.
///
/// Images with fewer than three channels per pixel (L, LA) are returned
/// unchanged.
#[instrument(skip_all, fields(width = image.width(), height = image.height(), key = %key))]
pub fn xor_channels_with(image: &PixelImage, key: XorKey) -> PixelImage {
    let channels = image.mode().channels();
    if channels < KEYED_CHANNELS {
        debug!(mode = image.mode().name(), "No colour channels to key, passing through");
        return image.clone();
    }

    info!(mode = image.mode().name(), "Applying channel XOR");
    let k = key.value();
    let mut samples = image.samples().to_vec();
    for pixel in samples.chunks_exact_mut(channels) {
        for value in &mut pixel[..KEYED_CHANNELS] {
            *value ^= k;
        }
    }
    image.with_samples(samples)
}
