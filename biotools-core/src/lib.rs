//! Core utilities and types shared across all Biotools crates

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, save_config, Config, LogFormat};
pub use error::{BiotoolsError, BiotoolsResult};
pub use types::{DeclaredType, Operation, SequenceType};

/// Version information for the Biotools project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
