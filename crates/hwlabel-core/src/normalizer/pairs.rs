//! Delimited hex-pair search used by the boot-tick extractor.

use super::confusion::correct_confusions;

fn is_upper_hex(c: char) -> bool {
    matches!(c, '0'..='9' | 'A'..='F')
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

/// All two-character hex tokens in `input` that are bounded on both sides by
/// whitespace, `-`, or the ends of the string.
///
/// Boundaries are not consumed: in `"7F 3A"` both tokens are returned. A pair
/// inside a longer run such as `"7F3A"` is not a delimited pair. Only
/// uppercase hex counts; callers uppercase first.
pub fn delimited_pairs(input: &str) -> Vec<&str> {
    let indices: Vec<(usize, char)> = input.char_indices().collect();
    let mut pairs = Vec::new();

    for w in 0..indices.len().saturating_sub(1) {
        let (start, first) = indices[w];
        let (_, second) = indices[w + 1];
        if !is_upper_hex(first) || !is_upper_hex(second) {
            continue;
        }
        let open = w == 0 || is_separator(indices[w - 1].1);
        let close = indices.get(w + 2).map_or(true, |&(_, c)| is_separator(c));
        if open && close {
            // Both chars are ASCII, so the pair spans exactly two bytes.
            pairs.push(&input[start..start + 2]);
        }
    }

    pairs
}

/// Clean a boot-tick candidate and return its last delimited pair.
///
/// Cleaning is: confusion correction, `*` removal, trimming, uppercasing.
pub fn last_delimited_pair(candidate: &str) -> Option<String> {
    let cleaned = correct_confusions(candidate)
        .replace('*', "")
        .trim()
        .to_uppercase();
    delimited_pairs(&cleaned).last().map(|p| p.to_string())
}

/// `Some(pair)` when the cleaned candidate is a single delimited pair and
/// nothing else.
pub fn sole_pair(candidate: &str) -> Option<String> {
    let cleaned = correct_confusions(candidate)
        .replace('*', "")
        .trim()
        .to_uppercase();
    match delimited_pairs(&cleaned).as_slice() {
        [only] if only.len() == cleaned.len() => Some(only.to_string()),
        _ => None,
    }
}
