//! Hardware-ID extraction strategies.

use super::confusion::hex_only;
use crate::types::HardwareId;
use regex::Regex;
use std::sync::LazyLock;

static LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(unique\s*hardware\s*id|hardward\s*id|hardware\s*id|id\s*[úu]nico\s*de\s*hardware)\s*[:=]?\s*(.*)",
    )
    .expect("hardware id label regex is valid")
});

/// Six or more hex pairs, each optionally followed by `:`, `-` or whitespace.
static MAC_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[0-9A-Fa-f]{2}[:\s-]?){6,}").expect("hex run regex is valid")
});

/// Accept `hex` when it holds at least a full id, truncating the excess.
fn accept(hex: &str) -> Option<HardwareId> {
    hex.get(..HardwareId::LEN)?.parse().ok()
}

/// Strategy 1: a line carrying one of the known labels.
///
/// The value is read from the rest of the label line; when that is too short
/// the following line is used in its place.
pub fn from_label(lines: &[&str]) -> Option<HardwareId> {
    lines.iter().enumerate().find_map(|(i, line)| {
        let caps = LABEL.captures(line)?;
        let mut hex = hex_only(caps.get(2).map_or("", |m| m.as_str()));
        if hex.len() < HardwareId::LEN {
            if let Some(next) = lines.get(i + 1) {
                hex = hex_only(next);
            }
        }
        let id = accept(&hex)?;
        tracing::debug!(line = i, %id, "hardware id found by label");
        Some(id)
    })
}

/// Strategy 2: an unlabeled MAC-address-like run anywhere in the text.
pub fn from_pattern(lines: &[&str]) -> Option<HardwareId> {
    lines.iter().enumerate().find_map(|(i, line)| {
        MAC_LIKE.find_iter(line).find_map(|m| {
            let id = accept(&hex_only(m.as_str()))?;
            tracing::debug!(line = i, %id, "hardware id found by pattern");
            Some(id)
        })
    })
}

/// Run the strategies in priority order.
pub fn extract(lines: &[&str]) -> Option<HardwareId> {
    from_label(lines).or_else(|| from_pattern(lines))
}
