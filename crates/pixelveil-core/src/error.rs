// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Pixelveil.

use thiserror::Error;

/// Top-level error type for all Pixelveil operations.
#[derive(Debug, Error)]
pub enum PixelveilError {
    // -- Argument errors --
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("sample buffer has {actual} bytes, expected {expected}")]
    BufferMismatch { expected: usize, actual: usize },

    // -- Codec errors --
    #[error("failed to decode image: {0}")]
    ImageDecode(String),

    #[error("failed to encode image: {0}")]
    ImageEncode(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    // -- Presentation --
    #[error("no image has been opened")]
    NoImageLoaded,
}

/// Coarse classification of a [`PixelveilError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad key, label or buffer supplied by the caller.
    InvalidArgument,
    /// The codec or file system failed to read or write.
    IoFailure,
    /// An operation needs an image and none is loaded.
    MissingInput,
}

impl PixelveilError {
    /// Shorthand for building a [`PixelveilError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Which [`ErrorKind`] this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) | Self::BufferMismatch { .. } => ErrorKind::InvalidArgument,
            Self::ImageDecode(_) | Self::ImageEncode(_) | Self::Io(_) => ErrorKind::IoFailure,
            Self::NoImageLoaded => ErrorKind::MissingInput,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PixelveilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(
            PixelveilError::invalid("key").kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            PixelveilError::BufferMismatch { expected: 3, actual: 2 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            PixelveilError::ImageDecode("bad header".into()).kind(),
            ErrorKind::IoFailure
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(PixelveilError::from(io).kind(), ErrorKind::IoFailure);
        assert_eq!(PixelveilError::NoImageLoaded.kind(), ErrorKind::MissingInput);
    }

    #[test]
    fn display_includes_detail() {
        let err = PixelveilError::invalid("key 300 is outside 0..=255");
        assert_eq!(err.to_string(), "invalid argument: key 300 is outside 0..=255");
    }
}
