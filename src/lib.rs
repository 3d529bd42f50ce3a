//! hwlabel — extract hardware ids and boot ticks from device label OCR text.
//!
//! The normalizer itself lives in [`hwlabel_core`]. This crate adds the
//! command-line plumbing around it as public modules so that integration
//! tests can import them directly.
//!
//! # Pipeline
//!
//! ```text
//! file / stdin ──► input ──► hwlabel_core::normalize ──► render ──► stdout
//! ```

pub mod input;
pub mod render;
