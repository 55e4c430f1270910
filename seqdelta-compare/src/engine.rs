//! The comparison engine: normalize, guard, align, extract, aggregate.
//!
//! [`compare`] is the single entry point the serving layer calls. Every
//! error is terminal for the request; a partial result is never produced.

use log::{debug, error, warn};

use seqdelta_align::{aggregate, extract_mutations, smith_waterman, AlignParams, DEFAULT_BIN_COUNT};
use seqdelta_core::{Result, SeqDeltaError};
use seqdelta_seq::{normalize, NormalizedSeq, SequenceRole};

use crate::report::ComparisonReport;

/// Default ceiling on the DP matrix size: 100 million cells, roughly a
/// 10 kb x 10 kb comparison.
pub const DEFAULT_MAX_MATRIX_CELLS: u64 = 100_000_000;

/// Tuning knobs for one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    /// Alignment scoring parameters.
    pub params: AlignParams,
    /// Number of bins in the mutation-distribution histogram.
    pub bin_count: usize,
    /// Upper bound on `|reference| * |query|` before a comparison is
    /// rejected with [`SeqDeltaError::Capacity`].
    pub max_matrix_cells: u64,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            params: AlignParams::default(),
            bin_count: DEFAULT_BIN_COUNT,
            max_matrix_cells: DEFAULT_MAX_MATRIX_CELLS,
        }
    }
}

/// Compare two raw sequence texts with default options.
///
/// Accepts plain or FASTA-formatted text on both sides. See
/// [`compare_with_options`] for the pipeline and failure modes.
pub fn compare(reference_text: &str, query_text: &str) -> Result<ComparisonReport> {
    compare_with_options(reference_text, query_text, &CompareOptions::default())
}

/// Compare two raw sequence texts.
///
/// Normalizes both inputs, enforces the matrix-size ceiling, aligns the
/// query against the reference, extracts mutations, and aggregates their
/// distribution over the reference length.
///
/// # Errors
///
/// - [`SeqDeltaError::Input`] when either sequence is empty after
///   normalization or `bin_count` is zero
/// - [`SeqDeltaError::Capacity`] when the sequence pair exceeds
///   `max_matrix_cells`; the message directs the caller to chunked or
///   server-side processing
/// - [`SeqDeltaError::Internal`] if the aligner fails on validated input,
///   which indicates a bug and is logged before surfacing
pub fn compare_with_options(
    reference_text: &str,
    query_text: &str,
    options: &CompareOptions,
) -> Result<ComparisonReport> {
    let reference = normalize_role(reference_text, SequenceRole::Reference)?;
    let query = normalize_role(query_text, SequenceRole::Query)?;

    let cells = reference.len() as u64 * query.len() as u64;
    if cells > options.max_matrix_cells {
        warn!(
            "rejecting {} bp x {} bp comparison: {cells} matrix cells over the {} ceiling",
            reference.len(),
            query.len(),
            options.max_matrix_cells
        );
        return Err(SeqDeltaError::Capacity {
            cells,
            limit: options.max_matrix_cells,
        });
    }

    debug!(
        "comparing {} bp reference against {} bp query",
        reference.len(),
        query.len()
    );

    let alignment = smith_waterman(&reference, &query, &options.params).map_err(internal)?;
    let mutations = extract_mutations(&alignment);
    let stats = aggregate(&mutations, reference.len(), options.bin_count)?;

    debug!(
        "comparison finished: score {}, {} mutations over {} columns",
        alignment.score,
        mutations.len(),
        alignment.length()
    );

    Ok(ComparisonReport::new(
        reference.len(),
        query.len(),
        alignment,
        mutations,
        stats,
    ))
}

fn normalize_role(raw: &str, role: SequenceRole) -> Result<NormalizedSeq> {
    normalize(raw).map_err(|err| match err {
        SeqDeltaError::Input(msg) => SeqDeltaError::Input(format!("{role}: {msg}")),
        other => other,
    })
}

/// Both sequences are validated before the aligner runs, so an aligner
/// error at this point is a bug rather than a caller mistake.
fn internal(err: SeqDeltaError) -> SeqDeltaError {
    let err = match err {
        SeqDeltaError::Input(msg) => SeqDeltaError::Internal(msg),
        other => other,
    };
    error!("alignment failed on validated input: {err}");
    err
}
