pub mod stats;
pub mod types;

// Re-export commonly used types
pub use stats::{calculate_stats, gc_content, molecular_weight, StatsResult};
pub use types::{
    detect_sequence_type, invalid_characters, is_valid_sequence, normalize, resolve_type, Sequence,
    SequenceType,
};
