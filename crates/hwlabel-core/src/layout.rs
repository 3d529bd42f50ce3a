//! Reading-order assembly of recognized lines.
//!
//! OCR engines report lines grouped by block, not in the order a person
//! reads a label. [`assemble_text`] sorts them top-to-bottom, then
//! left-to-right, and joins them into the newline-separated text the
//! normalizer expects.

use serde::Deserialize;

/// Bounding box of a recognized line, in image pixels.
///
/// The origin is signed: boxes clipped at the image edge may start above or
/// left of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A single line of OCR output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecognizedLine {
    pub text: String,
    #[serde(default)]
    pub bbox: BoundingBox,
}

impl RecognizedLine {
    pub fn new(text: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            text: text.into(),
            bbox,
        }
    }
}

/// Sort by top edge, then left edge. Ties keep their input order.
pub fn sort_reading_order(lines: &mut [RecognizedLine]) {
    lines.sort_by_key(|l| (l.bbox.y, l.bbox.x));
}

/// Join lines in reading order, one per row of output.
pub fn assemble_text(lines: &[RecognizedLine]) -> String {
    let mut ordered = lines.to_vec();
    sort_reading_order(&mut ordered);
    let joined = ordered
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    joined.trim_end().to_string()
}
