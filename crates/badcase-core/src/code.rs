//! Code-domain atom generator and corruption injector.
//!
//! Each language has a fixed ordered catalog of defect templates; one is
//! selected by index from the caller's RNG and instantiated with fresh
//! filler tokens. No call is required to repeat a template, even for the
//! same inputs.

use crate::corrupt;
use crate::filler;
use rand::Rng;

/// Code subformats with a broken-snippet catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeLang {
    /// Python-flavored defects: unclosed calls, bad indentation, fake imports.
    Python,
    /// JavaScript-flavored defects: typographic quotes, unclosed functions.
    Javascript,
    /// HTML-flavored defects: invalid tags, truncated DOCTYPE, mismatched close.
    Html,
}

impl CodeLang {
    /// All languages, used when a snippet wants a random subformat.
    pub const ALL: [CodeLang; 3] = [CodeLang::Python, CodeLang::Javascript, CodeLang::Html];

    /// Resolve a language name; anything unrecognized falls back to Python.
    #[inline]
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "javascript" => CodeLang::Javascript,
            "html" => CodeLang::Html,
            _ => CodeLang::Python,
        }
    }
}

/// Generate one broken snippet in the given language.
///
/// The returned string is non-empty and contains at least one structural
/// defect relative to well-formed code of that language.
#[must_use]
pub fn broken_snippet<R: Rng>(rng: &mut R, lang: CodeLang) -> String {
    match lang {
        CodeLang::Python => broken_python(rng),
        CodeLang::Javascript => broken_javascript(rng),
        CodeLang::Html => broken_html(rng),
    }
}

/// Broken snippet in a random language with one noise operator applied.
#[must_use]
pub fn noisy_snippet<R: Rng>(rng: &mut R) -> String {
    let lang = CodeLang::ALL[rng.gen_range(0..CodeLang::ALL.len())];
    let snippet = broken_snippet(rng, lang);
    with_noise(rng, &snippet)
}

/// Apply exactly one random text-level mutation to a snippet.
///
/// Operators: splice a filler sentence at the char midpoint, swap one
/// existing character for a control/replacement character, or append
/// slash-joined filler words.
#[must_use]
pub fn with_noise<R: Rng>(rng: &mut R, snippet: &str) -> String {
    match rng.gen_range(0..3) {
        0 => corrupt::splice_midpoint(snippet, &filler::sentence(rng)),
        1 => corrupt::replace_random_char(rng, snippet),
        _ => format!("{} {}", snippet, filler::words(rng, 3).join("/")),
    }
}

fn broken_python<R: Rng>(rng: &mut R) -> String {
    match rng.gen_range(0..6) {
        // Unclosed call
        0 => format!("print('{}'", filler::word(rng)),
        // Bare assignment posing as a statement
        1 => format!("{} = {}", filler::word(rng), rng.gen_range(1..=100)),
        // Illegal two-space indent with a prose body
        2 => {
            let cond = if rng.gen_bool(0.5) { "True" } else { "False" };
            format!("if {}:\n  {}", cond, filler::sentence(rng))
        }
        // Fabricated module and method call
        3 => format!(
            "import {}; {}.{}()",
            filler::word(rng),
            filler::word(rng),
            filler::word(rng)
        ),
        // Malformed hex literal
        4 => format!("0x{}", filler::hex(rng, 4)),
        // Missing closing paren and argument
        _ => format!(
            "{}({}={}",
            filler::word(rng),
            filler::word(rng),
            filler::word(rng)
        ),
    }
}

fn broken_javascript<R: Rng>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        // Typographic quotes instead of ASCII ones
        0 => format!("console.log(\u{2018}{}\u{2019})", filler::sentence(rng)),
        // Unclosed function body
        1 => format!(
            "function {}({}) {{ {} ",
            filler::word(rng),
            filler::word(rng),
            filler::sentence(rng)
        ),
        // Template literal interpolating a bare word
        _ => format!("let {} = `${{{}}}`", filler::word(rng), filler::word(rng)),
    }
}

fn broken_html<R: Rng>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        // Made-up tag with one attribute
        0 => format!(
            "<{} {}='{}'>",
            filler::word(rng),
            filler::word(rng),
            filler::word(rng)
        ),
        // Truncated DOCTYPE
        1 => format!("<!DOCTYPE {}", filler::word(rng).to_uppercase()),
        // Mismatched closing tag
        _ => format!("<div>{}</{}>", filler::sentence(rng), filler::word(rng)),
    }
}
