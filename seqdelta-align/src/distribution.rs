//! Binned mutation-distribution statistics.
//!
//! [`aggregate`] summarizes where mutations cluster along the reference:
//! positions are binned into a fixed number of windows, and per-kind totals
//! are tabulated over every mutation unconditionally. The histogram may drop
//! a mutation (position 0, or a position past the last bin); the totals
//! never do, so the bins sum to at most `total_mutations`.

use seqdelta_core::{Result, SeqDeltaError, Summarizable};

use crate::mutation::{Mutation, MutationKind};

/// Default number of histogram bins.
pub const DEFAULT_BIN_COUNT: usize = 10;

/// Per-kind mutation totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationTypeTotals {
    pub substitutions: usize,
    pub insertions: usize,
    pub deletions: usize,
}

impl MutationTypeTotals {
    fn record(&mut self, kind: MutationKind) {
        match kind {
            MutationKind::Substitution => self.substitutions += 1,
            MutationKind::Insertion => self.insertions += 1,
            MutationKind::Deletion => self.deletions += 1,
        }
    }

    /// Sum across all kinds; always equals the total mutation count.
    pub fn sum(&self) -> usize {
        self.substitutions + self.insertions + self.deletions
    }
}

/// Mutation density across the reference, plus per-kind totals.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionStats {
    /// Reference positions covered by each bin.
    pub bin_size: usize,
    /// Mutation counts per bin; always exactly the requested bin count.
    pub distribution: Vec<usize>,
    /// Totals per mutation kind, over every mutation.
    pub mutation_type_totals: MutationTypeTotals,
    /// Number of mutations in the input list.
    pub total_mutations: usize,
}

impl Summarizable for DistributionStats {
    fn summary(&self) -> String {
        format!(
            "{} mutations ({} substitutions, {} insertions, {} deletions) in {} bins of {}",
            self.total_mutations,
            self.mutation_type_totals.substitutions,
            self.mutation_type_totals.insertions,
            self.mutation_type_totals.deletions,
            self.distribution.len(),
            self.bin_size
        )
    }
}

/// Bin mutation positions into `bin_count` windows over the reference.
///
/// `bin_size` is `reference_length / bin_count` rounded up, clamped to at
/// least 1. A mutation at `position` lands in bin `(position - 1) / bin_size`.
/// Mutations with position 0 (insertions before the first reference symbol)
/// and positions past the last bin are left out of the histogram but still
/// counted in the per-kind totals.
///
/// # Errors
///
/// Returns [`SeqDeltaError::Input`] if `bin_count` is zero.
pub fn aggregate(
    mutations: &[Mutation],
    reference_length: usize,
    bin_count: usize,
) -> Result<DistributionStats> {
    if bin_count == 0 {
        return Err(SeqDeltaError::Input("bin count must be at least 1".into()));
    }

    let bin_size = ((reference_length + bin_count - 1) / bin_count).max(1);
    let mut distribution = vec![0usize; bin_count];
    let mut totals = MutationTypeTotals::default();

    for mutation in mutations {
        totals.record(mutation.kind);
        if mutation.position == 0 {
            continue;
        }
        let bin = (mutation.position - 1) / bin_size;
        if bin < bin_count {
            distribution[bin] += 1;
        }
    }

    Ok(DistributionStats {
        bin_size,
        distribution,
        mutation_type_totals: totals,
        total_mutations: mutations.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mutation_at(kind: MutationKind, position: usize) -> Mutation {
        Mutation {
            kind,
            position,
            reference_base: b'A',
            query_base: b'C',
            reference_position: position,
            query_position: position,
        }
    }

    fn substitution_at(position: usize) -> Mutation {
        mutation_at(MutationKind::Substitution, position)
    }

    #[test]
    fn positions_land_in_their_bins() {
        let mutations = [substitution_at(5), substitution_at(55), substitution_at(95)];
        let stats = aggregate(&mutations, 100, 10).unwrap();
        assert_eq!(stats.bin_size, 10);
        assert_eq!(stats.distribution, vec![1, 0, 0, 0, 0, 1, 0, 0, 0, 1]);
        assert_eq!(stats.total_mutations, 3);
    }

    #[test]
    fn bin_edges_are_inclusive_on_the_right() {
        // bin_size 10: positions 1..=10 fall in bin 0, 11..=20 in bin 1
        let mutations = [
            substitution_at(1),
            substitution_at(10),
            substitution_at(11),
        ];
        let stats = aggregate(&mutations, 100, 10).unwrap();
        assert_eq!(stats.distribution[0], 2);
        assert_eq!(stats.distribution[1], 1);
    }

    #[test]
    fn type_totals_count_every_kind() {
        let mutations = [
            mutation_at(MutationKind::Substitution, 2),
            mutation_at(MutationKind::Substitution, 4),
            mutation_at(MutationKind::Insertion, 5),
            mutation_at(MutationKind::Deletion, 9),
        ];
        let stats = aggregate(&mutations, 10, 10).unwrap();
        assert_eq!(stats.mutation_type_totals.substitutions, 2);
        assert_eq!(stats.mutation_type_totals.insertions, 1);
        assert_eq!(stats.mutation_type_totals.deletions, 1);
        assert_eq!(stats.mutation_type_totals.sum(), stats.total_mutations);
    }

    #[test]
    fn position_zero_skips_the_histogram_but_counts_in_totals() {
        let mutations = [mutation_at(MutationKind::Insertion, 0)];
        let stats = aggregate(&mutations, 10, 5).unwrap();
        assert_eq!(stats.distribution.iter().sum::<usize>(), 0);
        assert_eq!(stats.mutation_type_totals.insertions, 1);
        assert_eq!(stats.total_mutations, 1);
    }

    #[test]
    fn positions_past_the_last_bin_are_dropped_from_the_histogram() {
        // A position beyond the declared reference length overflows the
        // fixed bin array and must be dropped, not panic
        let mutations = [substitution_at(15)];
        let stats = aggregate(&mutations, 10, 10).unwrap();
        assert_eq!(stats.bin_size, 1);
        assert_eq!(stats.distribution.iter().sum::<usize>(), 0);
        assert_eq!(stats.mutation_type_totals.substitutions, 1);
        assert_eq!(stats.total_mutations, 1);
    }

    #[test]
    fn bin_size_rounds_up() {
        let stats = aggregate(&[], 105, 10).unwrap();
        assert_eq!(stats.bin_size, 11);
        assert_eq!(stats.distribution.len(), 10);
    }

    #[test]
    fn short_references_clamp_bin_size_to_one() {
        let stats = aggregate(&[substitution_at(3)], 3, 10).unwrap();
        assert_eq!(stats.bin_size, 1);
        assert_eq!(stats.distribution[2], 1);
    }

    #[test]
    fn no_mutations_yields_all_zero_bins() {
        let stats = aggregate(&[], 100, 10).unwrap();
        assert_eq!(stats.distribution, vec![0; 10]);
        assert_eq!(stats.total_mutations, 0);
        assert_eq!(stats.mutation_type_totals.sum(), 0);
    }

    #[test]
    fn zero_bin_count_is_rejected() {
        let err = aggregate(&[], 100, 0).unwrap_err();
        assert!(err.is_input());
    }

    #[test]
    fn custom_bin_count_is_respected() {
        let stats = aggregate(&[substitution_at(7)], 20, 4).unwrap();
        assert_eq!(stats.bin_size, 5);
        assert_eq!(stats.distribution, vec![0, 1, 0, 0]);
    }

    #[test]
    fn summary_is_one_line() {
        let mutations = [substitution_at(5), mutation_at(MutationKind::Deletion, 7)];
        let stats = aggregate(&mutations, 10, 10).unwrap();
        let summary = stats.summary();
        assert!(summary.contains("2 mutations"));
        assert!(!summary.contains('\n'));
    }
}
