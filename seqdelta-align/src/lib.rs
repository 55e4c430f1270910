//! Pairwise local alignment and mutation analysis for the seqdelta engine.
//!
//! The three algorithmic stages of a sequence comparison live here:
//!
//! - [`smith_waterman`] — local alignment of a query against a reference,
//!   with a linear gap penalty and deterministic tie-breaking
//! - [`extract_mutations`] — classify every point of disagreement in an
//!   alignment into substitution, insertion, or deletion
//! - [`aggregate`] — bin mutation positions over the reference into a
//!   fixed-count histogram with per-kind totals
//!
//! # Quick start
//!
//! ```
//! use seqdelta_align::{aggregate, extract_mutations, smith_waterman, AlignParams};
//!
//! let alignment = smith_waterman(b"ACGT", b"ACGA", &AlignParams::default()).unwrap();
//! let mutations = extract_mutations(&alignment);
//! assert_eq!(mutations.len(), 1);
//! assert_eq!(mutations[0].position, 4);
//!
//! let stats = aggregate(&mutations, 4, 4).unwrap();
//! assert_eq!(stats.total_mutations, 1);
//! ```

pub mod params;
pub mod types;
pub mod smith_waterman;
pub mod mutation;
pub mod distribution;

pub use params::AlignParams;
pub use types::{AlignmentResult, Traceback, GAP};
pub use smith_waterman::smith_waterman;
pub use mutation::{extract_mutations, Mutation, MutationKind};
pub use distribution::{aggregate, DistributionStats, MutationTypeTotals, DEFAULT_BIN_COUNT};
