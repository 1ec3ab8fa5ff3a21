//! Sequence engine for Biotools: detection, validation, transformation,
//! statistics and FASTA batch processing

pub mod batch;
pub mod codon;
pub mod formats;
pub mod sequence;
pub mod transform;

// Re-export commonly used types
pub use batch::{run_batch, stats_batch, transform_batch, BatchError, BatchResult};
pub use formats::parse_fasta_str;
pub use sequence::{calculate_stats, detect_sequence_type, normalize, Sequence, SequenceType, StatsResult};
pub use transform::{transform, TransformResult};
