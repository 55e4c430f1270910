//! Mutation extraction from an aligned sequence pair.
//!
//! [`extract_mutations`] walks the two equal-length aligned strings column by
//! column and classifies every point of disagreement into a closed
//! [`MutationKind`]. Position counters advance only when the respective side
//! holds a real symbol, so every emitted position is a coordinate in the
//! original (unaligned) input sequence.

use std::fmt;

use crate::types::{AlignmentResult, GAP};

/// Classification of one point of disagreement between reference and query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MutationKind {
    /// Both sides hold a symbol and the symbols differ.
    Substitution,
    /// The query holds a symbol the reference lacks (gap on the reference side).
    Insertion,
    /// The reference holds a symbol the query lacks (gap on the query side).
    Deletion,
}

impl MutationKind {
    /// The lowercase tag used on the wire (`"substitution"`, `"insertion"`,
    /// `"deletion"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::Substitution => "substitution",
            MutationKind::Insertion => "insertion",
            MutationKind::Deletion => "deletion",
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One typed, positioned difference between reference and query.
///
/// `position` is the 1-based reference coordinate of the divergence; for an
/// insertion it is the insertion point (the last reference position consumed
/// before the extra query symbol, 0 when the insertion precedes the first
/// reference symbol). `reference_position` and `query_position` mirror the
/// per-side counters, and exactly one of `reference_base`/`query_base` is the
/// gap marker `-` for insertions and deletions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mutation {
    pub kind: MutationKind,
    pub position: usize,
    pub reference_base: u8,
    pub query_base: u8,
    pub reference_position: usize,
    pub query_position: usize,
}

/// Walk an alignment and emit every mutation in column order.
///
/// Counters start at the alignment's start offsets, so positions refer to
/// the full input sequences even when the alignment covers only an interior
/// region. Emitted positions are monotonically non-decreasing.
pub fn extract_mutations(alignment: &AlignmentResult) -> Vec<Mutation> {
    debug_assert_eq!(
        alignment.aligned_reference.len(),
        alignment.aligned_query.len(),
        "aligned strings must be gap-padded to equal length"
    );

    let mut mutations = Vec::new();
    let mut reference_position = alignment.reference_start;
    let mut query_position = alignment.query_start;

    let columns = alignment
        .aligned_reference
        .iter()
        .zip(alignment.aligned_query.iter());

    for (&r, &q) in columns {
        if r != GAP {
            reference_position += 1;
        }
        if q != GAP {
            query_position += 1;
        }
        if r == q {
            continue;
        }

        let kind = if r == GAP {
            MutationKind::Insertion
        } else if q == GAP {
            MutationKind::Deletion
        } else {
            MutationKind::Substitution
        };

        mutations.push(Mutation {
            kind,
            position: reference_position,
            reference_base: r,
            query_base: q,
            reference_position,
            query_position,
        });
    }

    mutations
}
