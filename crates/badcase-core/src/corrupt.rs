//! Text-level corruption helpers shared by the domain injectors.

use rand::Rng;

/// Byte offset of the character midpoint of `s`.
///
/// Char-aware so splicing never lands inside a multi-byte sequence.
fn char_midpoint(s: &str) -> usize {
    let count = s.chars().count();
    s.char_indices()
        .nth(count / 2)
        .map_or(s.len(), |(offset, _)| offset)
}

/// Insert `insert` at the character midpoint of `s`.
pub(crate) fn splice_midpoint(s: &str, insert: &str) -> String {
    let mid = char_midpoint(s);
    format!("{}{}{}", &s[..mid], insert, &s[mid..])
}

/// Replace every occurrence of one randomly chosen character of `s` with a
/// control/replacement character. No-op on an empty string.
pub(crate) fn replace_random_char<R: Rng>(rng: &mut R, s: &str) -> String {
    // The replacement glyph is listed twice to keep the three-way selection
    // weights of the operator catalog.
    const REPLACEMENTS: [char; 3] = ['\u{0}', '\u{fffd}', '\u{fffd}'];
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return s.to_string();
    }
    let victim = chars[rng.gen_range(0..chars.len())];
    let replacement = REPLACEMENTS[rng.gen_range(0..REPLACEMENTS.len())];
    s.replace(victim, &replacement.to_string())
}
