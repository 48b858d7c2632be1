//! Filler-text supplier.
//!
//! Thin wrapper over the `fake` lorem fakers plus a few numeric helpers.
//! The rest of the engine treats this module as an opaque source of
//! plausible, non-empty natural-language tokens; every function takes the
//! caller's RNG so a seeded [`rand::rngs::StdRng`] keeps generation
//! deterministic.

use fake::faker::lorem::en::{Sentence, Word, Words};
use fake::Fake;
use rand::Rng;

/// One lowercase lorem word.
#[must_use]
pub fn word<R: Rng>(rng: &mut R) -> String {
    Word().fake_with_rng::<String, _>(rng)
}

/// `n` lorem words.
#[must_use]
pub fn words<R: Rng>(rng: &mut R, n: usize) -> Vec<String> {
    Words(n..n + 1).fake_with_rng::<Vec<String>, _>(rng)
}

/// One sentence: capitalized, period-terminated.
#[must_use]
pub fn sentence<R: Rng>(rng: &mut R) -> String {
    Sentence(4..10).fake_with_rng::<String, _>(rng)
}

/// A short text blob of 3-5 sentences joined by spaces.
#[must_use]
pub fn text<R: Rng>(rng: &mut R) -> String {
    let n = rng.gen_range(3..=5);
    (0..n).map(|_| sentence(rng)).collect::<Vec<_>>().join(" ")
}

/// A random non-negative integer rendered as a string.
#[must_use]
pub fn number<R: Rng>(rng: &mut R) -> String {
    rng.gen_range(0..100_000u32).to_string()
}

/// `n` random lowercase hex digits.
#[must_use]
pub fn hex<R: Rng>(rng: &mut R, n: usize) -> String {
    const DIGITS: &[u8] = b"0123456789abcdef";
    (0..n)
        .map(|_| DIGITS[rng.gen_range(0..DIGITS.len())] as char)
        .collect()
}

/// Compact text: lorem words glued together without spaces, truncated to at
/// most `max_chars` characters. Always non-empty for `max_chars >= 1`.
#[must_use]
pub fn compact_text<R: Rng>(rng: &mut R, max_chars: usize) -> String {
    let mut out = String::new();
    while out.len() < max_chars {
        out.push_str(&word(rng));
    }
    // Lorem words are ASCII, so the byte index is a char boundary.
    out.truncate(max_chars);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn tokens_are_never_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            assert!(!word(&mut rng).is_empty());
            assert!(!sentence(&mut rng).is_empty());
            assert!(!text(&mut rng).is_empty());
            assert!(!number(&mut rng).is_empty());
        }
    }

    #[test]
    fn sentences_terminate_with_a_period() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..20 {
            assert!(sentence(&mut rng).ends_with('.'));
        }
    }

    #[test]
    fn words_returns_requested_count() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(words(&mut rng, 3).len(), 3);
        assert_eq!(words(&mut rng, 5).len(), 5);
    }

    #[test]
    fn hex_has_length_and_charset() {
        let mut rng = StdRng::seed_from_u64(4);
        let h = hex(&mut rng, 4);
        assert_eq!(h.len(), 4);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn compact_text_respects_bound() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let t = compact_text(&mut rng, 10);
            assert!(!t.is_empty());
            assert!(t.len() <= 10);
            assert!(!t.contains(' '));
        }
    }
}
