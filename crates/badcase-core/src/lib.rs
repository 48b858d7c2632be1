//! badcase-core: composable corruption-generation engine.
//!
//! Produces deliberately malformed code snippets, math formulas, and tables,
//! then assembles them with filler text into multi-paragraph documents that
//! serve as negative examples for content-quality pipelines.
//!
//! # Core Concepts
//!
//! - Atom generators ([`code`], [`formula`], [`table`]): one broken artifact
//!   string per call, subformat and defect template drawn from a fixed
//!   catalog.
//! - Corruption injectors ([`code::with_noise`], [`table::inject_errors`]):
//!   one extra text-level mutation on top of an existing artifact.
//! - Document assembler ([`assemble`]): per-paragraph dispatch between
//!   fenced blocks, inline fragments, and keyword-laced filler, plus the
//!   occasional structural-error block spliced in at a random position.
//!
//! Every generator takes the caller's RNG explicitly, so a seeded
//! [`rand::rngs::StdRng`] makes whole documents reproducible:
//!
//! ```rust
//! use badcase_core::{assemble, Domain};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let doc = assemble(&mut rng, Domain::Table, 5);
//! assert!(!doc.is_empty());
//! ```

#![warn(unreachable_pub)]

pub mod code;
mod corrupt;
pub mod document;
pub mod filler;
pub mod formula;
pub mod table;
mod types;

pub use document::{assemble, DEFAULT_NUM_PARAGRAPHS};
pub use types::{Domain, ParseDomainError, Record};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
