// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Pixelveil.

use std::fmt;
use std::str::FromStr;

use crate::error::{PixelveilError, Result};

/// Which pixel transform to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Reverse the order of every pixel in the image.
    #[default]
    Swap,
    /// XOR the first three channels of every pixel with a key.
    Xor,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Swap, Method::Xor];

    /// Lowercase label used by the method selector.
    pub fn label(&self) -> &'static str {
        match self {
            Method::Swap => "swap",
            Method::Xor => "xor",
        }
    }

    /// Whether this method needs a key.
    pub fn needs_key(&self) -> bool {
        matches!(self, Method::Xor)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Method {
    type Err = PixelveilError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "swap" => Ok(Method::Swap),
            "xor" => Ok(Method::Xor),
            other => Err(PixelveilError::invalid(format!("unknown method '{other}'"))),
        }
    }
}

/// Encrypt/decrypt label.
///
/// Both transforms are self-inverse, so the mode never changes what is done
/// to the pixels. It only shows up in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Encrypt,
    Decrypt,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Encrypt, Mode::Decrypt];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Encrypt => "encrypt",
            Mode::Decrypt => "decrypt",
        }
    }

    /// Capitalised label, e.g. "Encrypt".
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Encrypt => "Encrypt",
            Mode::Decrypt => "Decrypt",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = PixelveilError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encrypt" => Ok(Mode::Encrypt),
            "decrypt" => Ok(Mode::Decrypt),
            other => Err(PixelveilError::invalid(format!("unknown mode '{other}'"))),
        }
    }
}

/// A validated XOR key in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XorKey(u8);

impl XorKey {
    /// Validate an integer key. Anything outside `0..=255` is rejected.
    pub fn new(value: i64) -> Result<Self> {
        u8::try_from(value).map(XorKey).map_err(|_| {
            PixelveilError::invalid(format!("key {value} is outside the range 0..=255"))
        })
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for XorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a key field into an integer without range checking.
///
/// Only plain decimal digits are accepted; a leading `+` or `-` is rejected.
pub fn parse_key(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PixelveilError::invalid("a key is required for the xor method"));
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PixelveilError::invalid(format!(
            "key '{trimmed}' must be an integer between 0 and 255"
        )));
    }
    trimmed.parse::<i64>().map_err(|_| {
        PixelveilError::invalid(format!(
            "key '{trimmed}' must be an integer between 0 and 255"
        ))
    })
}

/// Everything a single transform run needs, captured once from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformConfig {
    pub method: Method,
    pub mode: Mode,
    /// Raw key; only read when `method` is [`Method::Xor`].
    pub key: Option<i64>,
}

impl TransformConfig {
    pub fn swap(mode: Mode) -> Self {
        Self {
            method: Method::Swap,
            mode,
            key: None,
        }
    }

    pub fn xor(mode: Mode, key: i64) -> Self {
        Self {
            method: Method::Xor,
            mode,
            key: Some(key),
        }
    }

    /// Build a config from selector values and the raw key field text.
    ///
    /// The key text is ignored for [`Method::Swap`].
    pub fn from_inputs(method: Method, mode: Mode, key_text: &str) -> Result<Self> {
        match method {
            Method::Swap => Ok(Self::swap(mode)),
            Method::Xor => Ok(Self::xor(mode, parse_key(key_text)?)),
        }
    }

    /// The validated key for [`Method::Xor`].
    pub fn xor_key(&self) -> Result<XorKey> {
        match self.key {
            Some(value) => XorKey::new(value),
            None => Err(PixelveilError::invalid("a key is required for the xor method")),
        }
    }
}
