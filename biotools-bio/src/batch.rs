//! Per-record processing of FASTA batches with partial-failure isolation

use crate::sequence::{calculate_stats, Sequence, StatsResult};
use crate::transform::{transform, TransformResult};
use biotools_core::{BiotoolsResult, DeclaredType, Operation};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A record that could not be processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchError {
    pub sequence_id: String,
    pub error: String,
}

/// Outcome of a batch: successes and failures, both in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult<T> {
    pub results: Vec<T>,
    pub total_count: usize,
    pub success_count: usize,
    pub error_count: usize,
    #[serde(default)]
    pub errors: Vec<BatchError>,
}

/// Run `operation` on every record in order.
///
/// A failing record is recorded in `errors` and processing moves on to the
/// next one; the batch itself never fails.
pub fn run_batch<T, F>(records: &[Sequence], declared: DeclaredType, mut operation: F) -> BatchResult<T>
where
    F: FnMut(&Sequence, DeclaredType) -> BiotoolsResult<T>,
{
    let mut results = Vec::with_capacity(records.len());
    let mut errors = Vec::new();

    for record in records {
        match operation(record, declared) {
            Ok(value) => results.push(value),
            Err(e) => {
                warn!(sequence_id = %record.id, error = %e, "Record failed");
                errors.push(BatchError {
                    sequence_id: record.id.clone(),
                    error: e.message(),
                });
            }
        }
    }

    info!(
        total = records.len(),
        succeeded = results.len(),
        failed = errors.len(),
        "Batch processed"
    );

    BatchResult {
        total_count: records.len(),
        success_count: results.len(),
        error_count: errors.len(),
        results,
        errors,
    }
}

/// Apply one transformation to every record
pub fn transform_batch(
    records: &[Sequence],
    declared: DeclaredType,
    operation: Operation,
) -> BatchResult<TransformResult> {
    run_batch(records, declared, |record, declared| {
        transform(&record.sequence, declared, operation).map(|r| r.with_id(Some(record.id.clone())))
    })
}

/// Compute statistics for every record
pub fn stats_batch(records: &[Sequence], declared: DeclaredType) -> BatchResult<StatsResult> {
    run_batch(records, declared, |record, declared| {
        Ok(calculate_stats(&record.sequence, declared).with_id(Some(record.id.clone())))
    })
}
