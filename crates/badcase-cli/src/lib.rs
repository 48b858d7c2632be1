//! Driver for the badcase generators.
//!
//! Repeats document assembly `count` times, wraps each document in a
//! sequential [`Record`], and appends the records as JSON Lines to one
//! output file per domain. Re-running against the same directory
//! accumulates records rather than overwriting.

#![warn(unreachable_pub)]

use badcase_core::{assemble, Domain, Record};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Driver errors. Generation itself never fails; only file I/O and record
/// serialization can.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// Output file could not be opened or written.
    #[error("failed to write {path}")]
    Io {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A record failed to serialize.
    #[error("failed to serialize record")]
    Serialize(#[from] serde_json::Error),
}

/// Configuration for one generation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Domain to generate records for.
    pub domain: Domain,
    /// Number of records to append.
    pub count: u64,
    /// Paragraphs per document.
    pub paragraphs: usize,
    /// Directory the JSONL file is written into.
    pub out_dir: PathBuf,
    /// Optional RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl RunConfig {
    /// Output file for this run's domain, e.g. `badcase_code.jsonl`.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(format!("badcase_{}.jsonl", self.domain))
    }
}

/// Generate `count` records and append them to the domain's JSONL file.
///
/// Each line is one UTF-8 JSON object with exactly two keys (`id`,
/// `content`); non-ASCII characters are emitted literally. Returns the path
/// written to.
///
/// # Errors
/// Returns [`DriverError`] when the output file cannot be opened or written,
/// or when a record fails to serialize.
pub fn run(config: &RunConfig) -> Result<PathBuf, DriverError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let path = config.output_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| DriverError::Io {
            path: path.clone(),
            source,
        })?;
    let mut writer = BufWriter::new(file);

    for id in 1..=config.count {
        let record = Record {
            id,
            content: assemble(&mut rng, config.domain, config.paragraphs),
        };
        let line = serde_json::to_string(&record)?;
        writeln!(writer, "{line}").map_err(|source| DriverError::Io {
            path: path.clone(),
            source,
        })?;
    }
    writer.flush().map_err(|source| DriverError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::info!(
        domain = %config.domain,
        count = config.count,
        path = %path.display(),
        "appended records"
    );
    Ok(path)
}
