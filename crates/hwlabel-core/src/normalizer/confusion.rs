//! OCR character-confusion correction.
//!
//! Label fonts make `0`/`O` and `1`/`I`/`l`/`|` hard to tell apart. The
//! rewrite is only applied where the glyph stands apart from surrounding
//! letters, so words such as `BOOT` or `Install` keep their letters and real
//! hex letters are never touched.

fn is_hex(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Rewrite every char matching `target` to `with` unless `veto(prev, next)`
/// holds. `prev`/`next` are read from the input, not the output.
fn rewrite(
    input: &str,
    target: impl Fn(char) -> bool,
    with: char,
    veto: impl Fn(Option<char>, Option<char>) -> bool,
) -> String {
    let chars: Vec<char> = input.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            if target(c) && !veto(prev, next) {
                with
            } else {
                c
            }
        })
        .collect()
}

/// Replace look-alike glyphs with the hex digit they most likely are, and
/// normalise dash variants to `-`.
///
/// - `o`/`O` → `0` unless preceded by a hex digit or followed by a letter.
/// - `I`/`l`/`|` → `1` unless a letter sits on either side.
/// - `–`, `—`, `−` → `-`.
pub fn correct_confusions(input: &str) -> String {
    let zeros = rewrite(
        input,
        |c| matches!(c, 'o' | 'O'),
        '0',
        |prev, next| prev.is_some_and(is_hex) || next.is_some_and(is_letter),
    );
    let ones = rewrite(
        &zeros,
        |c| matches!(c, 'I' | 'l' | '|'),
        '1',
        |prev, next| prev.is_some_and(is_letter) || next.is_some_and(is_letter),
    );
    ones.chars()
        .map(|c| match c {
            '–' | '—' | '−' => '-',
            other => other,
        })
        .collect()
}

/// Confusion-correct `input`, keep only hex digits, and uppercase them.
pub fn hex_only(input: &str) -> String {
    correct_confusions(input)
        .chars()
        .filter(|c| c.is_ascii_hexdigit())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
