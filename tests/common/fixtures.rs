//! Static label corpora used across harnesses.
//!
//! Each entry is `(recognized text, expected hardware id, expected boot tick)`.
//! The texts mimic what an OCR pass over a netbook label returns: labels in
//! English or Spanish, values wrapped to the next row, stray `*` marks and
//! look-alike glyphs.

pub type LabelCase = (&'static str, Option<&'static str>, Option<&'static str>);

/// Clean English labels, one field per row.
pub const CORPUS_ENGLISH: &[LabelCase] = &[
    (
        "Unique Hardware ID: A1B2C3D4E5F6\nBoot Tick: 7F",
        Some("A1B2C3D4E5F6"),
        Some("7F"),
    ),
    (
        "Hardware ID = 9C-8B-7A-65-43-21\nboot tick = 10",
        Some("9C8B7A654321"),
        Some("10"),
    ),
    (
        "Hardward ID: 00 11 22 33 44 55",
        Some("001122334455"),
        None,
    ),
];

/// Spanish labels.
pub const CORPUS_SPANISH: &[LabelCase] = &[
    (
        "ID único de hardware: 00 1A 2B 3C 4D 5E\nMarca de arranque: 0A *",
        Some("001A2B3C4D5E"),
        Some("0A"),
    ),
    (
        "id unico de hardware:\nDE:AD:BE:EF:00:01\nMarca de arranque:\n* 2C *",
        Some("DEADBEEF0001"),
        Some("2C"),
    ),
];

/// Layout noise: wrapped values, values left of their label, confusions,
/// unlabeled ids and loose mentions.
pub const CORPUS_NOISY: &[LabelCase] = &[
    (
        "Conectar Igualdad\nHardware ID:\nA1:B2:C3:D4:E5:F6\nBoot Tick:\n* 3C *",
        Some("A1B2C3D4E5F6"),
        Some("3C"),
    ),
    (
        "4E Boot Tick\nUnique Hardware ID: 9C-8B-7A-65-43-21",
        Some("9C8B7A654321"),
        Some("4E"),
    ),
    (
        "Hardware ID: A1:O5:I2:33:44:55\nMarca de arranque: O7 *",
        Some("A10512334455"),
        Some("07"),
    ),
    (
        "Netbook\nNet 00:1A:2B:3C:4D:5E",
        Some("001A2B3C4D5E"),
        None,
    ),
    (
        "Boot: 3C\nHardware ID: 112233445566",
        Some("112233445566"),
        Some("3C"),
    ),
];

/// Text with nothing to extract.
pub const CORPUS_EMPTY: &[LabelCase] = &[
    ("", None, None),
    ("Hola mundo", None, None),
    ("\n\n   \n", None, None),
    ("Hardware ID: A1B2C3D4E5F", None, None),
];

/// Every corpus concatenated.
pub fn all_cases() -> Vec<LabelCase> {
    [CORPUS_ENGLISH, CORPUS_SPANISH, CORPUS_NOISY, CORPUS_EMPTY]
        .concat()
}

/// `n` synthetic label texts for throughput tests, cycling through the
/// layouts above with distinct ids.
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let id = format!("{:012X}", i * 7919);
            let tick = format!("{:02X}", i % 256);
            match i % 3 {
                0 => format!("Unique Hardware ID: {id}\nBoot Tick: {tick}"),
                1 => format!("Hardware ID:\n{id}\nMarca de arranque:\n* {tick} *"),
                _ => format!("{tick} Boot Tick\nNet {}", mac(&id)),
            }
        })
        .collect()
}

/// Format a 12-character id as colon-separated pairs.
pub fn mac(id: &str) -> String {
    id.as_bytes()
        .chunks(2)
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(":")
}
