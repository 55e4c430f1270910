//! Smith-Waterman local alignment with a linear gap penalty.
//!
//! Scores are clamped to zero and the reported score is always the global
//! matrix maximum. Traceback records one direction per cell during fill
//! (tie-break: diagonal, then up, then left) and a cell becomes a terminator
//! only when all three candidates are negative, so a path may run through
//! zero-valued cells.
//!
//! The walk anchors at the bottom-right corner whenever the corner's
//! recorded path passes through the maximum cell. For same-gene comparisons
//! the corner path rides the main diagonal, so trailing substitutions and
//! indels stay part of the alignment instead of being clipped at the score
//! peak. When the corner path misses the maximum (unrelated tails, embedded
//! match), the walk starts at the maximum cell as in classic local
//! alignment.

use seqdelta_core::{Result, SeqDeltaError};

use crate::params::AlignParams;
use crate::types::{AlignmentResult, Traceback, GAP};

/// Align `query` against `reference`, locally.
///
/// # Errors
///
/// Returns [`SeqDeltaError::Input`] if either sequence is empty. Callers
/// normally normalize first, which already rejects empty input.
pub fn smith_waterman(
    reference: &[u8],
    query: &[u8],
    params: &AlignParams,
) -> Result<AlignmentResult> {
    if reference.is_empty() || query.is_empty() {
        return Err(SeqDeltaError::Input("sequences must not be empty".into()));
    }

    let rows = query.len() + 1;
    let cols = reference.len() + 1;
    let gap = params.gap_penalty;

    let mut h = vec![0i32; rows * cols];
    let mut tb = vec![Traceback::End; rows * cols];

    let idx = |i: usize, j: usize| -> usize { i * cols + j };

    // Row 0 and column 0 stay zero-valued terminators

    let mut max_score = 0i32;
    let mut max_i = 0usize;
    let mut max_j = 0usize;

    // Fill
    for i in 1..rows {
        for j in 1..cols {
            let diag = h[idx(i - 1, j - 1)] + params.score_pair(query[i - 1], reference[j - 1]);
            let up = h[idx(i - 1, j)] + gap;
            let left = h[idx(i, j - 1)] + gap;

            let mut best = diag;
            let mut dir = Traceback::Diag;
            if up > best {
                best = up;
                dir = Traceback::Up;
            }
            if left > best {
                best = left;
                dir = Traceback::Left;
            }

            if best >= 0 {
                h[idx(i, j)] = best;
                tb[idx(i, j)] = dir;
                // Ties go to the latest cell so a path ending at the corner
                // is preferred over an equal-scoring interior prefix
                if best > 0 && best >= max_score {
                    max_score = best;
                    max_i = i;
                    max_j = j;
                }
            }
        }
    }

    // No positive-scoring region found
    if max_score == 0 {
        return Ok(AlignmentResult::empty());
    }

    let (end_i, end_j) = if path_reaches(&tb, cols, rows - 1, cols - 1, max_i, max_j) {
        (rows - 1, cols - 1)
    } else {
        (max_i, max_j)
    };

    let mut aligned_reference = Vec::new();
    let mut aligned_query = Vec::new();
    let mut identity_count = 0usize;

    let mut i = end_i;
    let mut j = end_j;

    loop {
        match tb[idx(i, j)] {
            Traceback::End => break,
            Traceback::Diag => {
                let r = reference[j - 1];
                let q = query[i - 1];
                aligned_reference.push(r);
                aligned_query.push(q);
                if r == q {
                    identity_count += 1;
                }
                i -= 1;
                j -= 1;
            }
            Traceback::Up => {
                aligned_reference.push(GAP);
                aligned_query.push(query[i - 1]);
                i -= 1;
            }
            Traceback::Left => {
                aligned_reference.push(reference[j - 1]);
                aligned_query.push(GAP);
                j -= 1;
            }
        }
    }

    // Reverse since we traced back
    aligned_reference.reverse();
    aligned_query.reverse();

    Ok(AlignmentResult {
        score: max_score,
        aligned_reference,
        aligned_query,
        identity_count,
        reference_start: j,
        reference_end: end_j,
        query_start: i,
        query_end: end_i,
    })
}

/// Whether the recorded path starting at `(i, j)` visits `(ti, tj)`.
fn path_reaches(
    tb: &[Traceback],
    cols: usize,
    mut i: usize,
    mut j: usize,
    ti: usize,
    tj: usize,
) -> bool {
    loop {
        if i == ti && j == tj {
            return true;
        }
        match tb[i * cols + j] {
            Traceback::End => return false,
            Traceback::Diag => {
                i -= 1;
                j -= 1;
            }
            Traceback::Up => i -= 1,
            Traceback::Left => j -= 1,
        }
    }
}
