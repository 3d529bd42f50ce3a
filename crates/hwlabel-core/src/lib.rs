//! hwlabel-core — label text normalizer for hwlabel.
//!
//! This crate turns OCR output read off a device label into the two values
//! printed on it: a 12-character hardware id and a 2-character boot tick.
//!
//! # Architecture
//!
//! ```text
//! RecognizedLine[] ──► layout ──► text ──► normalizer ──► ExtractionResult
//! ```
//!
//! Everything here is synchronous and pure except [`config::Config::load`].

pub mod config;
pub mod layout;
pub mod normalizer;
pub mod types;

pub use layout::{assemble_text, BoundingBox, RecognizedLine};
pub use normalizer::normalize;
pub use types::{BootTick, ExtractionResult, FieldError, HardwareId, NO_DATA_PLACEHOLDER};
