// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Session steps behind the workbench buttons: open, run, save. None of these
// touch the UI, so every failure comes back as a `PixelveilError` for the page
// to report.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use pixelveil_core::AppConfig;
use pixelveil_core::error::{PixelveilError, Result};
use pixelveil_core::types::{Method, Mode, TransformConfig};
use pixelveil_image::ImageProcessor;
use tracing::{info, instrument};

/// Result of a successful run, before it is saved.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub config: TransformConfig,
    pub result: ImageProcessor,
}

/// Open an image and normalise it according to `config`.
pub fn open_image(path: &Path, config: &AppConfig) -> Result<ImageProcessor> {
    let processor = ImageProcessor::open(path)?;
    if config.convert_to_rgb {
        Ok(processor.convert_to_rgb())
    } else {
        Ok(processor)
    }
}

/// PNG thumbnail of `processor` as a `data:` URL for an `img` element.
pub fn preview_data_url(processor: &ImageProcessor, max_edge: u32) -> Result<String> {
    let png = processor.preview_png(max_edge)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

/// Validate the selector values and key text, then transform `input`.
///
/// The input is cloned; the opened image stays as it was so the user can run
/// again with different settings.
#[instrument(skip_all, fields(method = %method, mode = %mode))]
pub fn run(
    input: Option<&ImageProcessor>,
    method: Method,
    mode: Mode,
    key_text: &str,
) -> Result<RunOutcome> {
    let input = input.ok_or(PixelveilError::NoImageLoaded)?;
    let config = TransformConfig::from_inputs(method, mode, key_text)?;
    let result = input.clone().apply(&config)?;
    info!("Transform complete");
    Ok(RunOutcome { config, result })
}

/// Save a result, adding the configured extension when the path has none.
pub fn save_result(result: &ImageProcessor, path: &Path, config: &AppConfig) -> Result<PathBuf> {
    result.save_with_default_extension(path, &config.default_output_extension)
}

/// Text of the success dialog, e.g. "Encryption complete!".
pub fn completion_message(mode: Mode, path: &Path) -> String {
    format!(
        "{}ion complete!\nSaved to:\n{}",
        mode.title(),
        path.display()
    )
}
