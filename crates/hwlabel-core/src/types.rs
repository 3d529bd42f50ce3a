//! Core types for hwlabel-core.
//!
//! This module defines the value produced by the normalizer: the
//! [`ExtractionResult`] and the two validated field types it carries,
//! [`HardwareId`] and [`BootTick`].

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Formatted output when neither field was found.
pub const NO_DATA_PLACEHOLDER: &str = "(No se encontraron datos válidos)";

/// Error returned when a string is not a well-formed label field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{field} must be exactly {expected} characters, got {actual}")]
    Length {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{field} must be uppercase hexadecimal, found {found:?}")]
    NotHex { field: &'static str, found: char },
}

fn validate(field: &'static str, expected: usize, value: &str) -> Result<(), FieldError> {
    if let Some(found) = value
        .chars()
        .find(|c| !matches!(c, '0'..='9' | 'A'..='F'))
    {
        return Err(FieldError::NotHex { field, found });
    }
    if value.len() != expected {
        return Err(FieldError::Length {
            field,
            expected,
            actual: value.len(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Field newtypes
// ---------------------------------------------------------------------------

/// A 12-character uppercase hexadecimal hardware identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HardwareId(String);

impl HardwareId {
    pub const LEN: usize = 12;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for HardwareId {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate("hardware id", Self::LEN, s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<&str> for HardwareId {
    type Error = FieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for HardwareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HardwareId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A 2-character uppercase hexadecimal boot tick.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BootTick(String);

impl BootTick {
    pub const LEN: usize = 2;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for BootTick {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate("boot tick", Self::LEN, s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<&str> for BootTick {
    type Error = FieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for BootTick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BootTick {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// ExtractionResult
// ---------------------------------------------------------------------------

/// Fields recovered from one block of recognized label text.
///
/// Either field may be `None`; the normalizer fills in whatever it finds.
/// The formatted output is derived on demand and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// The recognized text exactly as it was handed to the normalizer.
    pub raw_text: String,
    pub hardware_id: Option<HardwareId>,
    pub boot_tick: Option<BootTick>,
}

impl ExtractionResult {
    pub fn new(
        raw_text: impl Into<String>,
        hardware_id: Option<HardwareId>,
        boot_tick: Option<BootTick>,
    ) -> Self {
        Self {
            raw_text: raw_text.into(),
            hardware_id,
            boot_tick,
        }
    }

    /// `true` when at least one of the two fields was found.
    pub fn is_valid(&self) -> bool {
        self.hardware_id.is_some() || self.boot_tick.is_some()
    }

    /// Display form: id and tick on separate lines, whichever is present,
    /// or [`NO_DATA_PLACEHOLDER`] when nothing was found.
    pub fn formatted_output(&self) -> String {
        self.formatted_with(NO_DATA_PLACEHOLDER)
    }

    /// Same as [`formatted_output`](Self::formatted_output) with a caller
    /// supplied placeholder for the empty case.
    pub fn formatted_with(&self, placeholder: &str) -> String {
        match (&self.hardware_id, &self.boot_tick) {
            (Some(id), Some(tick)) => format!("{id}\n{tick}"),
            (Some(id), None) => id.to_string(),
            (None, Some(tick)) => tick.to_string(),
            (None, None) => placeholder.to_string(),
        }
    }
}

impl fmt::Display for ExtractionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted_output())
    }
}
