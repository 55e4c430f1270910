//! Scoring parameters for pairwise alignment.

use seqdelta_core::{Result, SeqDeltaError};

/// Match/mismatch/gap scoring with a linear (per-symbol) gap penalty.
///
/// Symbol comparison is an exact byte comparison: normalization uppercases
/// input before it reaches the aligner, and any symbol outside the usual
/// alphabets simply never matches anything but itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignParams {
    pub match_score: i32,
    pub mismatch_penalty: i32,
    pub gap_penalty: i32,
}

impl AlignParams {
    /// Create validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `match_score` is not positive or either penalty
    /// is not negative.
    pub fn new(match_score: i32, mismatch_penalty: i32, gap_penalty: i32) -> Result<Self> {
        if match_score <= 0 {
            return Err(SeqDeltaError::Input("match_score must be positive".into()));
        }
        if mismatch_penalty >= 0 {
            return Err(SeqDeltaError::Input(
                "mismatch_penalty must be negative".into(),
            ));
        }
        if gap_penalty >= 0 {
            return Err(SeqDeltaError::Input("gap_penalty must be negative".into()));
        }
        Ok(Self {
            match_score,
            mismatch_penalty,
            gap_penalty,
        })
    }

    /// Score a pair of symbols.
    pub fn score_pair(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_penalty
        }
    }
}

impl Default for AlignParams {
    /// The standard comparison scoring: +2 match, -1 mismatch, -2 per gap symbol.
    fn default() -> Self {
        Self {
            match_score: 2,
            mismatch_penalty: -1,
            gap_penalty: -2,
        }
    }
}
