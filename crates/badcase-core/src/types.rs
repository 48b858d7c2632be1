//! Shared value types for the engine.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Content domain a generated sample belongs to.
///
/// The three domains are structurally parallel: each has its own atom
/// generator, corruption catalog, and paragraph-kind thresholds, but they
/// share the filler-text supplier and the assembly shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Broken code snippets (Python / JavaScript / HTML subformats).
    Code,
    /// Broken math expressions and LaTeX wrappers.
    Formula,
    /// Structurally inconsistent tables in five subformats.
    Table,
}

impl Domain {
    /// All domains, in output-file order.
    pub const ALL: [Domain; 3] = [Domain::Code, Domain::Formula, Domain::Table];

    /// Lowercase name, as used in file names and CLI arguments.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Domain::Code => "code",
            Domain::Formula => "formula",
            Domain::Table => "table",
        }
    }
}

impl Display for Domain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = ParseDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code" => Ok(Domain::Code),
            "formula" => Ok(Domain::Formula),
            "table" => Ok(Domain::Table),
            other => Err(ParseDomainError(other.to_string())),
        }
    }
}

/// Error returned when a domain name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown domain `{0}` (expected code, formula, or table)")]
pub struct ParseDomainError(String);

/// One output record: a 1-based sequential id plus the flattened document.
///
/// Lifecycle is create-serialize-discard; records are never mutated after
/// creation and carry no identity beyond the driver-assigned sequence
/// number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Sequential id, starting at 1 within a run.
    pub id: u64,
    /// The assembled multi-paragraph document.
    pub content: String,
}
