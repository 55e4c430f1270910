//! Input handling for the seqdelta sequence-comparison engine.
//!
//! Two concerns live here, both upstream of alignment:
//!
//! - **Normalization** — [`normalize`] cleans raw pasted text (plain or
//!   FASTA) into an uppercase, whitespace-free [`NormalizedSeq`]
//! - **Chunked ingestion** — [`ChunkBuffer`] and [`IngestSession`] reassemble
//!   large sequences uploaded as ordered chunks before comparison starts
//!
//! # Example
//!
//! ```
//! use seqdelta_seq::normalize;
//!
//! let seq = normalize(">sample 1\nacgt acgt\nACGT\n").unwrap();
//! assert_eq!(seq.as_ref(), b"ACGTACGTACGT");
//! ```

pub mod chunk;
pub mod normalize;

pub use chunk::{ChunkBuffer, IngestSession, SequenceRole};
pub use normalize::{normalize, NormalizedSeq};
