//! Shared primitives and traits for the seqdelta sequence-comparison engine.
//!
//! `seqdelta-core` provides the foundation that the other seqdelta crates
//! build on:
//!
//! - **Error types** — [`SeqDeltaError`] and [`Result`] for structured error
//!   handling with a fixed three-kind taxonomy (input / capacity / internal)
//! - **Traits** — [`Sequence`], [`Scored`], [`Summarizable`]

pub mod error;
pub mod traits;

pub use error::{Result, SeqDeltaError};
pub use traits::*;
