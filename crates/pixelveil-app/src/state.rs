// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state: one reactive signal for the Dioxus UI.

use std::path::PathBuf;

use pixelveil_core::AppConfig;
use pixelveil_core::types::{Method, Mode};
use pixelveil_image::ImageProcessor;

/// Shared state accessible to all components via `use_context`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application settings.
    pub config: AppConfig,
    /// Selected transform.
    pub method: Method,
    /// Selected encrypt/decrypt label.
    pub mode: Mode,
    /// Raw text of the key field, validated only when Run is pressed.
    pub key_text: String,
    /// Path of the opened image.
    pub input_path: Option<PathBuf>,
    /// The opened image, already normalised per `config`.
    pub input: Option<ImageProcessor>,
    /// PNG data URL shown in the preview area.
    pub preview: Option<String>,
    /// Status message for user feedback.
    pub status_message: Option<String>,
}

impl AppState {
    /// Initial state with selectors set from `config`.
    pub fn new(config: AppConfig) -> Self {
        Self {
            method: config.default_method,
            mode: config.default_mode,
            config,
            key_text: String::new(),
            input_path: None,
            input: None,
            preview: None,
            status_message: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
