//! Formula-domain atom generator.
//!
//! Two catalogs: raw broken math expressions, and broken LaTeX wrappers
//! that embed an expression or pose text as math.

use crate::filler;
use rand::Rng;

const GREEK: [&str; 3] = ["α", "β", "γ"];
const SYMBOLS: &[u8] = b"+-*/=()[]{}^_";

/// Generate one broken math expression.
///
/// Guaranteed non-empty; the defect is one of: unclosed brace exponent,
/// unclosed radical, type-mismatched fraction, unicode assignment, symbol
/// soup, or text standing in for numerals.
#[must_use]
pub fn broken_expression<R: Rng>(rng: &mut R) -> String {
    match rng.gen_range(0..6) {
        // Unclosed brace exponent
        0 => format!("x^{{{}", rng.gen_range(1..=10)),
        // Unclosed radical
        1 => format!("sqrt({}", rng.gen_range(1..=100)),
        // Type-mismatched fraction
        2 => "\\frac{1}{'hello'}".to_string(),
        // Greek unicode assignment
        3 => format!(
            "{} = {}",
            GREEK[rng.gen_range(0..GREEK.len())],
            filler::number(rng)
        ),
        // Symbol soup
        4 => (0..10)
            .map(|_| SYMBOLS[rng.gen_range(0..SYMBOLS.len())] as char)
            .collect(),
        // Text where numerals belong
        _ => format!("{} + {}", filler::word(rng), filler::word(rng)),
    }
}

/// Generate one broken LaTeX formula.
#[must_use]
pub fn broken_latex<R: Rng>(rng: &mut R) -> String {
    match rng.gen_range(0..5) {
        // Display-math wrapper around a broken expression
        0 => format!("\\[ {} \\]", broken_expression(rng)),
        // Prose posing as inline math
        1 => format!("${}$", filler::sentence(rng)),
        // Environment missing its \end argument
        2 => format!("\\begin{{equation}}{}\\end", filler::number(rng)),
        // Invalid command
        3 => format!("\\{}{{{}}}", filler::word(rng), filler::number(rng)),
        // Non-numeric radicand
        _ => format!("\\sqrt{{{}}}", filler::compact_text(rng, 10)),
    }
}
