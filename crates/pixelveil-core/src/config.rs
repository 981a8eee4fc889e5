// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration. Held in memory only; nothing is written to disk.

use crate::types::{Method, Mode};

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Longest edge of preview thumbnails, in pixels.
    pub preview_max_edge: u32,
    /// Normalise every opened image to 8-bit RGB.
    pub convert_to_rgb: bool,
    /// Extension appended to output paths that have none.
    pub default_output_extension: String,
    /// Initial value of the method selector.
    pub default_method: Method,
    /// Initial value of the mode selector.
    pub default_mode: Mode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preview_max_edge: 200,
            convert_to_rgb: true,
            default_output_extension: "png".into(),
            default_method: Method::Swap,
            default_mode: Mode::Encrypt,
        }
    }
}
