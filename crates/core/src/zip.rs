//! Validated ZIP code newtype.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Five digits, optionally followed by a dash and four more (ZIP+4).
static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("valid regex"));

/// ZIP validation failure.
///
/// Returned as a value and recovered locally by the presentation layer as an
/// inline message; it never propagates as a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ZipError {
    /// Input does not match the 5-digit (optionally +4) pattern.
    #[error("invalid ZIP code format")]
    InvalidFormat,
}

/// A validated US ZIP code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ZipCode(String);

impl ZipCode {
    /// Validate and wrap user input. Surrounding whitespace is tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`ZipError::InvalidFormat`] when the trimmed input is not a
    /// 5-digit ZIP or ZIP+4.
    pub fn parse(input: &str) -> Result<Self, ZipError> {
        let trimmed = input.trim();
        if ZIP_RE.is_match(trimmed) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(ZipError::InvalidFormat)
        }
    }

    /// The validated ZIP string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ZipCode {
    type Err = ZipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
