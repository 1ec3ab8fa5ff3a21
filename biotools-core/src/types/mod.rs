/// Core types shared across all Biotools modules
pub mod operation;
pub mod sequence;

// Re-export commonly used types at module level
pub use operation::Operation;
pub use sequence::{DeclaredType, SequenceType};
