//! Wire-format report types for comparison results.
//!
//! Plain serde structs shaped for the JSON consumer: camelCase keys, the
//! mutation kind under a `type` field, gaps as the literal `-` character,
//! and a distribution of exactly the requested bin count. The domain types
//! in `seqdelta-align` keep their snake_case shape; the conversion to the
//! wire happens here and nowhere else.

use serde::Serialize;

use seqdelta_align::{
    AlignmentResult, DistributionStats, Mutation, MutationKind, MutationTypeTotals,
};
use seqdelta_core::Summarizable;

/// Everything one comparison produces, shaped for the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub alignment: AlignmentReport,
    pub mutations: Vec<MutationReport>,
    pub distribution_stats: DistributionReport,
    pub reference_length: usize,
    pub query_length: usize,
}

impl ComparisonReport {
    pub(crate) fn new(
        reference_length: usize,
        query_length: usize,
        alignment: AlignmentResult,
        mutations: Vec<Mutation>,
        stats: DistributionStats,
    ) -> Self {
        Self {
            alignment: AlignmentReport::from(alignment),
            mutations: mutations.iter().map(MutationReport::from).collect(),
            distribution_stats: DistributionReport::from(stats),
            reference_length,
            query_length,
        }
    }
}

impl Summarizable for ComparisonReport {
    fn summary(&self) -> String {
        format!(
            "{} bp vs {} bp: score {}, {} mutations",
            self.reference_length,
            self.query_length,
            self.alignment.score,
            self.distribution_stats.total_mutations
        )
    }
}

/// The aligned pair, gap-padded to equal length.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentReport {
    pub aligned_reference: String,
    pub aligned_query: String,
    pub score: i32,
    pub identity_count: usize,
    pub reference_start: usize,
    pub reference_end: usize,
    pub query_start: usize,
    pub query_end: usize,
}

impl From<AlignmentResult> for AlignmentReport {
    fn from(result: AlignmentResult) -> Self {
        Self {
            aligned_reference: String::from_utf8_lossy(&result.aligned_reference).into_owned(),
            aligned_query: String::from_utf8_lossy(&result.aligned_query).into_owned(),
            score: result.score,
            identity_count: result.identity_count,
            reference_start: result.reference_start,
            reference_end: result.reference_end,
            query_start: result.query_start,
            query_end: result.query_end,
        }
    }
}

/// One mutation; the gap side carries the literal `-`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationReport {
    #[serde(rename = "type")]
    pub kind: MutationKind,
    pub position: usize,
    pub reference_base: char,
    pub query_base: char,
    pub reference_position: usize,
    pub query_position: usize,
}

impl From<&Mutation> for MutationReport {
    fn from(mutation: &Mutation) -> Self {
        Self {
            kind: mutation.kind,
            position: mutation.position,
            reference_base: mutation.reference_base as char,
            query_base: mutation.query_base as char,
            reference_position: mutation.reference_position,
            query_position: mutation.query_position,
        }
    }
}

/// Mutation density histogram plus per-kind totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionReport {
    pub bin_size: usize,
    pub distribution: Vec<usize>,
    pub mutation_type_totals: TypeTotalsReport,
    pub total_mutations: usize,
}

impl From<DistributionStats> for DistributionReport {
    fn from(stats: DistributionStats) -> Self {
        Self {
            bin_size: stats.bin_size,
            distribution: stats.distribution,
            mutation_type_totals: TypeTotalsReport::from(stats.mutation_type_totals),
            total_mutations: stats.total_mutations,
        }
    }
}

/// Per-kind totals, keyed by the same tags the `type` field carries.
#[derive(Debug, Clone, Serialize)]
pub struct TypeTotalsReport {
    pub substitution: usize,
    pub insertion: usize,
    pub deletion: usize,
}

impl From<MutationTypeTotals> for TypeTotalsReport {
    fn from(totals: MutationTypeTotals) -> Self {
        Self {
            substitution: totals.substitutions,
            insertion: totals.insertions,
            deletion: totals.deletions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mutation() -> MutationReport {
        MutationReport {
            kind: MutationKind::Deletion,
            position: 3,
            reference_base: 'G',
            query_base: '-',
            reference_position: 3,
            query_position: 2,
        }
    }

    #[test]
    fn mutation_wire_shape() {
        let v = serde_json::to_value(sample_mutation()).unwrap();
        assert_eq!(v["type"], "deletion");
        assert_eq!(v["position"], 3);
        assert_eq!(v["referenceBase"], "G");
        assert_eq!(v["queryBase"], "-");
        assert_eq!(v["referencePosition"], 3);
        assert_eq!(v["queryPosition"], 2);
    }

    #[test]
    fn alignment_wire_shape() {
        let report = AlignmentReport::from(AlignmentResult {
            score: 6,
            aligned_reference: b"ACGGT".to_vec(),
            aligned_query: b"AC-GT".to_vec(),
            identity_count: 4,
            reference_start: 0,
            reference_end: 5,
            query_start: 0,
            query_end: 4,
        });
        let v = serde_json::to_value(report).unwrap();
        assert_eq!(v["alignedReference"], "ACGGT");
        assert_eq!(v["alignedQuery"], "AC-GT");
        assert_eq!(v["score"], 6);
        assert_eq!(v["identityCount"], 4);
        assert_eq!(v["referenceStart"], 0);
        assert_eq!(v["referenceEnd"], 5);
        assert_eq!(v["queryStart"], 0);
        assert_eq!(v["queryEnd"], 4);
    }

    #[test]
    fn distribution_wire_shape() {
        let stats = DistributionStats {
            bin_size: 10,
            distribution: vec![1, 0, 0, 0, 0, 1, 0, 0, 0, 1],
            mutation_type_totals: MutationTypeTotals {
                substitutions: 2,
                insertions: 0,
                deletions: 1,
            },
            total_mutations: 3,
        };
        let v = serde_json::to_value(DistributionReport::from(stats)).unwrap();
        assert_eq!(v["binSize"], 10);
        assert_eq!(v["distribution"].as_array().unwrap().len(), 10);
        assert_eq!(v["mutationTypeTotals"]["substitution"], 2);
        assert_eq!(v["mutationTypeTotals"]["insertion"], 0);
        assert_eq!(v["mutationTypeTotals"]["deletion"], 1);
        assert_eq!(v["totalMutations"], 3);
    }

    #[test]
    fn summary_is_one_line() {
        let report = crate::engine::compare("ACGGT", "ACGT").unwrap();
        let summary = report.summary();
        assert!(summary.contains("5 bp vs 4 bp"));
        assert!(summary.contains("1 mutations"));
        assert!(!summary.contains('\n'));
    }

    #[test]
    fn gap_base_is_the_literal_dash() {
        let mutation = Mutation {
            kind: MutationKind::Insertion,
            position: 1,
            reference_base: seqdelta_align::GAP,
            query_base: b'C',
            reference_position: 1,
            query_position: 2,
        };
        let report = MutationReport::from(&mutation);
        assert_eq!(report.reference_base, '-');
        let v = serde_json::to_value(report).unwrap();
        assert_eq!(v["referenceBase"], "-");
    }
}
