//! Document Assembler.
//!
//! Builds one multi-paragraph document per call: each paragraph slot is
//! dispatched between a fenced/quoted corrupted atom (Kind A), an inline
//! atom surrounded by filler (Kind B), or pure filler laced with domain
//! keywords (Kind C), with domain-specific thresholds. A structural-error
//! block may then be spliced in at a random position.

use crate::types::Domain;
use crate::{code, filler, formula, table};
use rand::Rng;

/// Default paragraph count when the caller does not specify one.
pub const DEFAULT_NUM_PARAGRAPHS: usize = 3;

const CODE_KEYWORDS: [&str; 5] = ["NULL", "NaN", "<script>", "++i", "0xDEADBEEF"];
const FORMULA_KEYWORDS: [&str; 3] = ["±", "×", "÷"];
const TABLE_KEYWORDS: [&str; 5] = ["COLUMN", "ROW", "MERGE", "PIVOT", "||"];

/// Assemble one multi-paragraph document for `domain`.
///
/// The result joins at least `num_paragraphs` paragraphs with blank lines;
/// structural-error insertion can add more.
#[must_use]
pub fn assemble<R: Rng>(rng: &mut R, domain: Domain, num_paragraphs: usize) -> String {
    let mut paragraphs = Vec::with_capacity(num_paragraphs + 1);
    match domain {
        Domain::Code => assemble_code(rng, num_paragraphs, &mut paragraphs),
        Domain::Formula => assemble_formula(rng, num_paragraphs, &mut paragraphs),
        Domain::Table => assemble_table(rng, num_paragraphs, &mut paragraphs),
    }
    tracing::debug!(
        domain = %domain,
        paragraphs = paragraphs.len(),
        "assembled document"
    );
    paragraphs.join("\n\n")
}

fn assemble_code<R: Rng>(rng: &mut R, num_paragraphs: usize, out: &mut Vec<String>) {
    for _ in 0..num_paragraphs {
        let p: f64 = rng.gen();
        if p < 0.4 {
            out.push(code_block_paragraph(rng));
        } else if p < 0.7 {
            out.push(code_inline_paragraph(rng));
        } else {
            out.push(keyword_paragraph(rng, &CODE_KEYWORDS));
        }
    }
    if rng.gen_bool(0.5) {
        let block = code_structural_error(rng);
        insert_at_random(rng, out, block);
    }
}

fn assemble_formula<R: Rng>(rng: &mut R, num_paragraphs: usize, out: &mut Vec<String>) {
    for _ in 0..num_paragraphs {
        let p: f64 = rng.gen();
        if p < 0.3 {
            out.push(formula::broken_latex(rng));
        } else if p < 0.6 {
            out.push(formula_inline_paragraph(rng));
        } else {
            // Keyword filler plus a trailing bare number
            let text = keyword_paragraph(rng, &FORMULA_KEYWORDS);
            out.push(format!("{}{}", text, filler::number(rng)));
        }
    }
    if rng.gen_bool(0.5) {
        let block = formula_structural_error(rng);
        insert_at_random(rng, out, block);
    }
}

fn assemble_table<R: Rng>(rng: &mut R, num_paragraphs: usize, out: &mut Vec<String>) {
    for _ in 0..num_paragraphs {
        let p: f64 = rng.gen();
        if p < 0.4 {
            let mut t = table::broken_table(rng);
            if rng.gen_bool(0.7) {
                t = table::inject_errors(rng, &t);
            }
            out.push(t);
        } else if p < 0.7 {
            out.push(table_inline_paragraph(rng));
        } else {
            out.push(keyword_paragraph(rng, &TABLE_KEYWORDS));
            // The table domain splices a structural-error heading inside the
            // keyword branch as well, so one assembly can end up with more
            // than one inserted block.
            if rng.gen_bool(0.5) {
                let block = table_structural_error(rng);
                insert_at_random(rng, out, block);
            }
        }
    }
    if rng.gen_bool(0.5) {
        let block = table_structural_error(rng);
        insert_at_random(rng, out, block);
    }
}

/// Kind A, code: fenced block around a noise-injected snippet.
fn code_block_paragraph<R: Rng>(rng: &mut R) -> String {
    format!("```\n{}\n```", code::noisy_snippet(rng))
}

/// Kind B, code: filler sentences around an inline-quoted noisy snippet.
fn code_inline_paragraph<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} `{}` {}",
        filler::sentence(rng),
        code::noisy_snippet(rng),
        filler::sentence(rng)
    )
}

/// Kind B, formula: exactly one `$...$` pair around a broken expression.
fn formula_inline_paragraph<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} ${}$ {}",
        filler::sentence(rng),
        formula::broken_expression(rng),
        filler::sentence(rng)
    )
}

/// Kind B, table: a sentence introducing the first two lines of a table.
fn table_inline_paragraph<R: Rng>(rng: &mut R) -> String {
    let t = table::broken_table(rng);
    let head: Vec<&str> = t.lines().take(2).collect();
    format!("{}:\n{}", filler::sentence(rng), head.join("\n"))
}

/// Kind C: filler text with sentence-terminating periods replaced by a
/// spaced domain keyword.
fn keyword_paragraph<R: Rng>(rng: &mut R, keywords: &[&str]) -> String {
    let keyword = keywords[rng.gen_range(0..keywords.len())];
    filler::text(rng).replace('.', &format!(" {keyword} "))
}

fn code_structural_error<R: Rng>(rng: &mut R) -> String {
    format!(
        "/* {} */\n#{} {}\n```\n{}\n```",
        filler::sentence(rng),
        filler::word(rng),
        filler::sentence(rng),
        filler::sentence(rng)
    )
}

fn formula_structural_error<R: Rng>(rng: &mut R) -> String {
    format!("\\begin{{document}}{}\\end{{document}}", filler::sentence(rng))
}

fn table_structural_error<R: Rng>(rng: &mut R) -> String {
    let cells = rng.gen_range(3..=6);
    format!(
        "## {} TABLE\n{}\n{}",
        filler::word(rng).to_uppercase(),
        vec!["---"; cells].join("|"),
        filler::sentence(rng)
    )
}

fn insert_at_random<R: Rng>(rng: &mut R, out: &mut Vec<String>, block: String) {
    let index = rng.gen_range(0..=out.len());
    out.insert(index, block);
}
