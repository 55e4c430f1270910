//! The seqdelta comparison engine.
//!
//! Ties the pipeline together for the serving layer: raw sequence text (or
//! chunked uploads) in, a JSON-ready [`ComparisonReport`] out.
//!
//! - [`compare`] / [`compare_with_options`] — normalize both inputs,
//!   enforce the size ceiling, align, extract mutations, aggregate their
//!   distribution
//! - [`SessionStore`] — reassemble large sequences uploaded in ordered
//!   chunks, then run the same pipeline
//! - [`report`] — the wire-format structs and their JSON contract
//!
//! # Example
//!
//! ```
//! use seqdelta_compare::compare;
//!
//! let report = compare("ACGT", "ACGA").unwrap();
//! assert_eq!(report.mutations.len(), 1);
//! assert_eq!(report.mutations[0].position, 4);
//! assert_eq!(report.distribution_stats.total_mutations, 1);
//! ```

pub mod engine;
pub mod report;
pub mod session;

pub use engine::{compare, compare_with_options, CompareOptions, DEFAULT_MAX_MATRIX_CELLS};
pub use report::{
    AlignmentReport, ComparisonReport, DistributionReport, MutationReport, TypeTotalsReport,
};
pub use session::{SessionId, SessionStore};
