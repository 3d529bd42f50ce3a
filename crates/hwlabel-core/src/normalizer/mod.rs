//! Normalizer — turns raw recognized label text into an [`ExtractionResult`].
//!
//! Each field is recovered by an ordered list of strategies, each a pure
//! function returning `Option`; the first one to produce a value wins.
//!
//! ```text
//! hardware id: label ──► MAC-like pattern
//! boot tick:   label ──► loose "boot"/"arranque" mention ──► standalone pair
//! ```
//!
//! The normalizer never fails: text with nothing recognisable yields a
//! result with both fields empty.

pub mod boot_tick;
pub mod confusion;
pub mod hardware_id;
pub mod pairs;

pub use confusion::{correct_confusions, hex_only};
pub use pairs::{delimited_pairs, last_delimited_pair};

use crate::types::ExtractionResult;

/// Split `raw` on line breaks, trim each line, and drop the empty ones.
pub fn clean_lines(raw: &str) -> Vec<&str> {
    raw.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Extract the hardware id and boot tick from recognized label text.
pub fn normalize(raw: &str) -> ExtractionResult {
    let lines = clean_lines(raw);
    let hardware_id = hardware_id::extract(&lines);
    let boot_tick = boot_tick::extract(&lines);

    tracing::debug!(
        lines = lines.len(),
        hardware_id = ?hardware_id.as_ref().map(|id| id.as_str()),
        boot_tick = ?boot_tick.as_ref().map(|t| t.as_str()),
        "normalized label text"
    );

    ExtractionResult::new(raw, hardware_id, boot_tick)
}
