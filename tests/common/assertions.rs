//! Domain-specific assertion macros for hwlabel harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* field was wrong and *what* text it came from.

use hwlabel_core::ExtractionResult;

// ---------------------------------------------------------------------------
// Field assertions
// ---------------------------------------------------------------------------

/// Assert that a result carries a specific hardware id (or none).
///
/// ```rust
/// assert_hardware_id!(result, Some("A1B2C3D4E5F6"));
/// ```
#[macro_export]
macro_rules! assert_hardware_id {
    ($result:expr, $expected:expr) => {{
        let result: &hwlabel_core::ExtractionResult = &$result;
        let expected: Option<&str> = $expected;
        let actual = result.hardware_id.as_ref().map(|id| id.as_str());
        if actual != expected {
            panic!(
                "assert_hardware_id! failed:\n  expected: {:?}\n  actual:   {:?}\n  raw: {:?}",
                expected, actual, result.raw_text
            );
        }
    }};
}

/// Assert that a result carries a specific boot tick (or none).
#[macro_export]
macro_rules! assert_boot_tick {
    ($result:expr, $expected:expr) => {{
        let result: &hwlabel_core::ExtractionResult = &$result;
        let expected: Option<&str> = $expected;
        let actual = result.boot_tick.as_ref().map(|t| t.as_str());
        if actual != expected {
            panic!(
                "assert_boot_tick! failed:\n  expected: {:?}\n  actual:   {:?}\n  raw: {:?}",
                expected, actual, result.raw_text
            );
        }
    }};
}

/// Assert that nothing was extracted and the placeholder is shown.
#[macro_export]
macro_rules! assert_no_data {
    ($result:expr) => {{
        let result: &hwlabel_core::ExtractionResult = &$result;
        if result.is_valid() {
            panic!(
                "assert_no_data! failed: found {:?} / {:?}\n  raw: {:?}",
                result.hardware_id, result.boot_tick, result.raw_text
            );
        }
        pretty_assertions::assert_eq!(
            result.formatted_output(),
            hwlabel_core::NO_DATA_PLACEHOLDER
        );
    }};
}

// ---------------------------------------------------------------------------
// Invariant helpers
// ---------------------------------------------------------------------------

fn is_upper_hex(s: &str, len: usize) -> bool {
    s.len() == len && s.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F'))
}

/// Assert the shape invariants every result must satisfy, whatever the input.
pub fn assert_field_invariants(result: &ExtractionResult) {
    if let Some(id) = &result.hardware_id {
        assert!(
            is_upper_hex(id.as_str(), 12),
            "hardware id {:?} is not 12 uppercase hex chars (raw: {:?})",
            id,
            result.raw_text
        );
    }
    if let Some(tick) = &result.boot_tick {
        assert!(
            is_upper_hex(tick.as_str(), 2),
            "boot tick {:?} is not 2 uppercase hex chars (raw: {:?})",
            tick,
            result.raw_text
        );
    }
    assert_eq!(
        result.is_valid(),
        result.hardware_id.is_some() || result.boot_tick.is_some()
    );
}
