//! Table-domain atom generator and corruption injector.
//!
//! A random header/data grid is rendered in one of five subformats, with a
//! per-row and per-structural-element chance of omitting an expected
//! delimiter, header, alignment row, or closing tag. The probabilities are
//! part of the output contract and must not drift.

use crate::corrupt;
use crate::filler;
use rand::Rng;

/// Tabular subformats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableFormat {
    /// Pipe-delimited Markdown table.
    Markdown,
    /// Delimiter-separated rows with inconsistent quoting.
    Csv,
    /// `<table>` markup with missing closing tags.
    Html,
    /// Box-drawing pseudo-table.
    Unicode,
    /// Whitespace-aligned borderless table.
    NoBorder,
}

impl TableFormat {
    /// All subformats, in catalog order.
    pub const ALL: [TableFormat; 5] = [
        TableFormat::Markdown,
        TableFormat::Csv,
        TableFormat::Html,
        TableFormat::Unicode,
        TableFormat::NoBorder,
    ];
}

/// Random header row (2-4 uppercase words) and 3-6 data rows, each cell
/// independently a word (p=0.7) or a stringified number (p=0.3).
struct Grid {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

fn random_grid<R: Rng>(rng: &mut R) -> Grid {
    let num_cols = rng.gen_range(2..=4);
    let num_rows = rng.gen_range(3..=6);
    let headers = (0..num_cols)
        .map(|_| filler::word(rng).to_uppercase())
        .collect();
    let rows = (0..num_rows)
        .map(|_| {
            (0..num_cols)
                .map(|_| {
                    if rng.gen_bool(0.7) {
                        filler::word(rng)
                    } else {
                        filler::number(rng)
                    }
                })
                .collect()
        })
        .collect();
    Grid { headers, rows }
}

/// Generate one structurally inconsistent table in a random subformat.
#[must_use]
pub fn broken_table<R: Rng>(rng: &mut R) -> String {
    let format = TableFormat::ALL[rng.gen_range(0..TableFormat::ALL.len())];
    broken_table_with(rng, format)
}

/// Generate one structurally inconsistent table in the given subformat.
#[must_use]
pub fn broken_table_with<R: Rng>(rng: &mut R, format: TableFormat) -> String {
    let grid = random_grid(rng);
    match format {
        TableFormat::Markdown => render_markdown(rng, &grid),
        TableFormat::Csv => render_csv(rng, &grid),
        TableFormat::Html => render_html(rng, &grid),
        TableFormat::Unicode => render_unicode(rng, &grid),
        TableFormat::NoBorder => render_no_border(rng, &grid),
    }
}

/// Apply exactly one extra error operator on top of an existing table.
///
/// Operators: collapse newlines, append a sentence, truncate-and-splice an
/// ellipsis at the char midpoint, replace one whitespace token with a
/// number, or append a bogus pipe-delimited row.
#[must_use]
pub fn inject_errors<R: Rng>(rng: &mut R, table: &str) -> String {
    match rng.gen_range(0..5) {
        0 => table.replace('\n', " "),
        1 => format!("{}{}", table, filler::sentence(rng)),
        2 => corrupt::splice_midpoint(table, "..."),
        3 => replace_random_token(rng, table),
        _ => {
            let n = rng.gen_range(2..=5);
            format!("{}\n{}", table, filler::words(rng, n).join("|"))
        }
    }
}

/// Swap one randomly chosen whitespace token (all its occurrences) for a
/// random number string. No-op when the input has no tokens.
fn replace_random_token<R: Rng>(rng: &mut R, table: &str) -> String {
    let tokens: Vec<&str> = table.split_whitespace().collect();
    if tokens.is_empty() {
        return table.to_string();
    }
    let victim = tokens[rng.gen_range(0..tokens.len())];
    table.replace(victim, &filler::number(rng))
}

fn render_markdown<R: Rng>(rng: &mut R, grid: &Grid) -> String {
    let mut lines = Vec::new();
    if rng.gen_bool(0.8) {
        lines.push(format!("| {} |", grid.headers.join(" | ")));
        if rng.gen_bool(0.7) {
            lines.push(format!("|{}|", vec!["---"; grid.headers.len()].join("|")));
        }
    }
    for row in &grid.rows {
        if rng.gen_bool(0.9) {
            lines.push(format!("| {} |", row.join(" | ")));
        } else {
            // Delimiters dropped entirely
            lines.push(row.join(" "));
        }
    }
    lines.join("\n")
}

fn render_csv<R: Rng>(rng: &mut R, grid: &Grid) -> String {
    const SEPARATORS: [&str; 4] = [",", ";", "\t", "|"];
    const QUOTES: [&str; 3] = ["\"", "'", ""];
    const SWAPS: [&str; 2] = [",", "|"];
    let sep = SEPARATORS[rng.gen_range(0..SEPARATORS.len())];
    let quote = QUOTES[rng.gen_range(0..QUOTES.len())];

    let mut lines = Vec::new();
    if rng.gen_bool(0.8) {
        lines.push(grid.headers.join(sep));
    }
    for row in &grid.rows {
        let mut row = row.clone();
        if rng.gen_bool(0.3) {
            if let Some(last) = row.last_mut() {
                *last = last.replace(sep, SWAPS[rng.gen_range(0..SWAPS.len())]);
            }
        }
        let cells: Vec<String> = row
            .iter()
            .map(|cell| {
                if rng.gen_bool(0.4) {
                    format!("{quote}{cell}{quote}")
                } else {
                    cell.clone()
                }
            })
            .collect();
        lines.push(cells.join(sep));
    }
    lines.join("\n")
}

fn render_html<R: Rng>(rng: &mut R, grid: &Grid) -> String {
    let mut lines = Vec::new();
    if rng.gen_bool(0.7) {
        lines.push("<table>".to_string());
        if rng.gen_bool(0.5) {
            lines.push("  <thead><tr>".to_string());
            let headers: String = grid
                .headers
                .iter()
                .map(|h| format!("<th>{h}</th>"))
                .collect();
            lines.push(format!("    {headers}"));
            lines.push("  </tr></thead>".to_string());
        }
    }
    lines.push("  <tbody>".to_string());
    for row in &grid.rows {
        lines.push("    <tr>".to_string());
        for cell in row {
            if rng.gen_bool(0.2) {
                lines.push(format!("      <td>{cell}"));
            } else {
                lines.push(format!("      <td>{cell}</td>"));
            }
        }
        if rng.gen_bool(0.1) {
            // Row "closed" by a stray opening tag
            lines.push("    <tr>".to_string());
        } else {
            lines.push("    </tr>".to_string());
        }
    }
    if rng.gen_bool(0.3) {
        lines.push("  <tbody>".to_string());
    } else {
        lines.push("  </tbody>".to_string());
        lines.push("</table>".to_string());
    }
    lines.join("\n")
}

fn render_unicode<R: Rng>(rng: &mut R, grid: &Grid) -> String {
    const BORDERS: [&str; 4] = ["┃", "│", "║", "|"];
    const RULES: [&str; 4] = ["━", "─", "=", ":"];
    const JUNCTIONS: [&str; 4] = ["┳", "╋", "┼", "+"];
    let border = BORDERS[rng.gen_range(0..BORDERS.len())];
    let rule = RULES[rng.gen_range(0..RULES.len())];
    let junction = JUNCTIONS[rng.gen_range(0..JUNCTIONS.len())];

    let mut lines = Vec::new();
    if rng.gen_bool(0.6) {
        lines.push(format!("{border}{}{border}", grid.headers.join(border)));
        let rule_cells: Vec<String> = grid
            .headers
            .iter()
            .map(|h| rule.repeat(h.chars().count()))
            .collect();
        lines.push(format!("{border}{}{border}", rule_cells.join(junction)));
    }
    for row in &grid.rows {
        lines.push(format!("{border}{}{border}", row.join(border)));
    }
    lines.join("\n")
}

fn render_no_border<R: Rng>(rng: &mut R, grid: &Grid) -> String {
    // Per-column width over header and cells; rows shorter than the header
    // count must not index past bounds.
    let widths: Vec<usize> = grid
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            grid.rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::new();
    if rng.gen_bool(0.7) {
        let header_line: Vec<String> = grid
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, &w)| format!("{h:<w$}"))
            .collect();
        lines.push(header_line.join("  "));
    }
    for row in &grid.rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:<w$}"))
            .collect();
        lines.push(line.join("  "));
    }
    lines.join("\n")
}
