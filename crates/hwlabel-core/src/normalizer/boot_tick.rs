//! Boot-tick extraction strategies.
//!
//! OCR tends to scatter the tick around its label: sometimes left of it on
//! the same row, sometimes after it, sometimes on the neighbouring row. The
//! candidate order below is load-bearing for real label layouts and must not
//! be reshuffled.

use super::pairs::{last_delimited_pair, sole_pair};
use crate::types::{BootTick, HardwareId};
use regex::Regex;
use std::sync::LazyLock;

static LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(boot\s*tick|marca\s*de\s*arranque)\s*[:=]?\s*(.*)")
        .expect("boot tick label regex is valid")
});

static LOOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)boot|arranque").expect("loose boot regex is valid"));

fn tick(candidate: &str) -> Option<BootTick> {
    last_delimited_pair(candidate)?.parse().ok()
}

fn neighbour<'a>(lines: &[&'a str], i: usize, next: bool) -> Option<&'a str> {
    if next {
        lines.get(i + 1).copied()
    } else {
        i.checked_sub(1).and_then(|p| lines.get(p).copied())
    }
}

/// Strategy 1: a line carrying `boot tick` or `marca de arranque`.
///
/// Candidates per label line: text before the label, text after it, the
/// next line, the previous line.
pub fn from_label(lines: &[&str]) -> Option<BootTick> {
    lines.iter().enumerate().find_map(|(i, line)| {
        let caps = LABEL.captures(line)?;
        let label_start = caps.get(0).map_or(0, |m| m.start());
        let after = caps.get(2).map_or("", |m| m.as_str());

        let found = tick(&line[..label_start])
            .or_else(|| tick(after))
            .or_else(|| neighbour(lines, i, true).and_then(tick))
            .or_else(|| neighbour(lines, i, false).and_then(tick))?;
        tracing::debug!(line = i, tick = %found, "boot tick found by label");
        Some(found)
    })
}

/// Strategy 2: the first line mentioning `boot` or `arranque` at all.
///
/// Candidates: text before the first `:`, text after it, the next line, the
/// previous line. A line without `:` only contributes its neighbours.
pub fn from_loose_mention(lines: &[&str]) -> Option<BootTick> {
    let i = lines.iter().position(|line| LOOSE.is_match(line))?;
    let (before, after) = lines[i].split_once(':').unwrap_or(("", ""));

    let found = tick(before)
        .or_else(|| tick(after))
        .or_else(|| neighbour(lines, i, true).and_then(tick))
        .or_else(|| neighbour(lines, i, false).and_then(tick))?;
    tracing::debug!(line = i, tick = %found, "boot tick found by loose mention");
    Some(found)
}

/// Strategy 3: text shaped exactly like a formatted output, either a lone
/// pair or a hardware id row followed by a pair row. Anything else, such as
/// a lot number on its own row, is not a tick.
pub fn from_standalone(lines: &[&str]) -> Option<BootTick> {
    let last = match lines {
        [only] => only,
        [id, last] if id.parse::<HardwareId>().is_ok() => last,
        _ => return None,
    };
    let found: BootTick = sole_pair(last)?.parse().ok()?;
    tracing::trace!(tick = %found, "boot tick found standalone");
    Some(found)
}

/// Run the strategies in priority order.
pub fn extract(lines: &[&str]) -> Option<BootTick> {
    from_label(lines)
        .or_else(|| from_loose_mention(lines))
        .or_else(|| from_standalone(lines))
}
