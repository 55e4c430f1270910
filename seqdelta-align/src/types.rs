//! Core types for alignment results and traceback.

use core::fmt;

/// Gap marker used in aligned sequence strings.
pub const GAP: u8 = b'-';

/// Direction recorded per DP cell during matrix fill.
///
/// `End` terminates traceback: it marks row 0, column 0, and every cell
/// whose three score candidates were all negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traceback {
    /// Traceback terminator.
    End,
    /// Consume one symbol from each sequence (match or substitution).
    Diag,
    /// Consume one query symbol against a reference gap.
    Up,
    /// Consume one reference symbol against a query gap.
    Left,
}

/// The result of a pairwise local alignment.
///
/// The aligned strings are gap-padded to equal length; `-` marks a gap.
/// Offsets are 0-based half-open into the original (unaligned) sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentResult {
    /// Alignment score: the maximum value in the DP matrix.
    pub score: i32,
    /// Aligned reference sequence (with `-` for gaps).
    pub aligned_reference: Vec<u8>,
    /// Aligned query sequence (with `-` for gaps).
    pub aligned_query: Vec<u8>,
    /// Number of columns where reference and query symbols are identical.
    pub identity_count: usize,
    /// Start position in the original reference (0-based, inclusive).
    pub reference_start: usize,
    /// End position in the original reference (0-based, exclusive).
    pub reference_end: usize,
    /// Start position in the original query (0-based, inclusive).
    pub query_start: usize,
    /// End position in the original query (0-based, exclusive).
    pub query_end: usize,
}

impl AlignmentResult {
    /// An alignment with no columns, returned when no cell scores above 0.
    pub fn empty() -> Self {
        Self {
            score: 0,
            aligned_reference: Vec::new(),
            aligned_query: Vec::new(),
            identity_count: 0,
            reference_start: 0,
            reference_end: 0,
            query_start: 0,
            query_end: 0,
        }
    }

    /// Number of alignment columns.
    pub fn length(&self) -> usize {
        self.aligned_reference.len()
    }

    /// Whether the alignment has no columns (fully dissimilar inputs).
    pub fn is_empty(&self) -> bool {
        self.aligned_reference.is_empty()
    }

    /// Fraction of columns that are exact matches, in `[0.0, 1.0]`.
    ///
    /// Returns 0.0 if the alignment is empty.
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.identity_count as f64 / self.length() as f64
    }

    /// Number of gap columns (on either side).
    pub fn gaps(&self) -> usize {
        self.aligned_reference
            .iter()
            .chain(self.aligned_query.iter())
            .filter(|&&b| b == GAP)
            .count()
    }
}

impl fmt::Display for AlignmentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", String::from_utf8_lossy(&self.aligned_reference))?;
        write!(f, "{}", String::from_utf8_lossy(&self.aligned_query))
    }
}

impl seqdelta_core::Scored for AlignmentResult {
    fn score(&self) -> f64 {
        self.score as f64
    }
}
