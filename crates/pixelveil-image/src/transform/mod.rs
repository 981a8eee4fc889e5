// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Transform module: the two self-inverse pixel transforms and the dispatcher
// that picks one from a `TransformConfig`.

pub mod reverse;
pub mod xor;

use pixelveil_core::error::Result;
use pixelveil_core::types::{Method, TransformConfig};
use tracing::instrument;

use crate::pixel::PixelImage;

pub use reverse::reverse_pixels;
pub use xor::{xor_channels, xor_channels_with};

/// Run the transform selected by `config` and return the new image.
///
/// `config.mode` is a label and does not influence the result; the key is only
/// read for [`Method::Xor`].
#[instrument(skip(image), fields(method = %config.method, mode = %config.mode))]
pub fn apply(image: &PixelImage, config: &TransformConfig) -> Result<PixelImage> {
    match config.method {
        Method::Swap => Ok(reverse_pixels(image)),
        Method::Xor => Ok(xor_channels_with(image, config.xor_key()?)),
    }
}
