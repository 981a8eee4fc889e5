// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Native file pickers and message boxes via `rfd`. These block the calling
// event handler until the user answers.

use std::path::PathBuf;

use pixelveil_core::error::PixelveilError;
use pixelveil_core::human_errors::{Severity, humanize_error};
use pixelveil_image::processor::INPUT_EXTENSIONS;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

/// Ask for an image to open.
pub fn pick_input() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Open Image")
        .add_filter("Image Files", INPUT_EXTENSIONS)
        .pick_file()
}

/// Ask where to save the result. `None` when the user cancels.
pub fn pick_output(default_extension: &str) -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Save Result")
        .add_filter("PNG files", &[default_extension])
        .set_file_name(format!("result.{default_extension}"))
        .save_file()
}

/// Show `err` in a message box, warning or error depending on severity.
pub fn report_error(err: &PixelveilError) {
    let human = humanize_error(err);
    let (level, title) = match human.severity {
        Severity::Warning => (MessageLevel::Warning, "Warning"),
        Severity::Error => (MessageLevel::Error, "Error"),
    };
    tracing::warn!(error = %err, "operation failed");
    let _ = MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(human.body())
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn show_info(title: &str, body: &str) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(body)
        .set_buttons(MessageButtons::Ok)
        .show();
}
