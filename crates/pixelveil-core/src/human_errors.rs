// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the dialog boxes.
//
// Every technical error is mapped to plain English with a clear suggestion.
// Severity decides whether the UI shows a warning or an error dialog.

use crate::error::PixelveilError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user can fix it (open an image, correct the key).
    Warning,
    /// Cannot be fixed from inside the app: a damaged file or a full disk.
    Error,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (dialog title line).
    pub message: String,
    /// What the user should try (dialog body).
    pub suggestion: String,
    /// Severity level (drives the dialog icon).
    pub severity: Severity,
}

impl HumanError {
    /// Message and suggestion joined for a single dialog body.
    pub fn body(&self) -> String {
        format!("{}\n\n{}", self.message, self.suggestion)
    }
}

/// Convert a `PixelveilError` into a `HumanError`.
pub fn humanize_error(err: &PixelveilError) -> HumanError {
    match err {
        PixelveilError::InvalidArgument(detail) => humanize_invalid_argument(detail),

        PixelveilError::BufferMismatch { .. } => HumanError {
            message: "The image data is incomplete.".into(),
            suggestion: "Try opening the image again, or re-save it as a PNG first.".into(),
            severity: Severity::Error,
        },

        PixelveilError::ImageDecode(_) => HumanError {
            message: "Failed to load image.".into(),
            suggestion: "The file may be damaged or in an unusual format. Try a PNG, JPEG or BMP file.".into(),
            severity: Severity::Error,
        },

        PixelveilError::ImageEncode(detail) => HumanError {
            message: "Operation failed.".into(),
            suggestion: format!("The result could not be written. Try saving it as a .png file. ({detail})"),
            severity: Severity::Error,
        },

        PixelveilError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Try choosing the file again.".into(),
                    severity: Severity::Warning,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "The app doesn't have permission to use that file.".into(),
                    suggestion: "Check the file permissions, or pick a different folder.".into(),
                    severity: Severity::Warning,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your disk may be full.".into(),
                    severity: Severity::Error,
                }
            }
        }

        PixelveilError::NoImageLoaded => HumanError {
            message: "Please open an image first.".into(),
            suggestion: "Use \"Open Image\" to pick a PNG, JPEG or BMP file.".into(),
            severity: Severity::Warning,
        },
    }
}

/// Argument errors are always the user's to fix; pick the wording by detail.
fn humanize_invalid_argument(detail: &str) -> HumanError {
    let lower = detail.to_ascii_lowercase();

    if lower.contains("key") {
        HumanError {
            message: "Key must be an integer between 0 and 255.".into(),
            suggestion: format!("Enter a whole number from 0 to 255 in the XOR key field. ({detail})"),
            severity: Severity::Warning,
        }
    } else if lower.contains("method") || lower.contains("mode") {
        HumanError {
            message: "Unknown option selected.".into(),
            suggestion: format!("Choose one of the listed options and try again. ({detail})"),
            severity: Severity::Warning,
        }
    } else {
        HumanError {
            message: "Operation failed.".into(),
            suggestion: detail.to_owned(),
            severity: Severity::Warning,
        }
    }
}
