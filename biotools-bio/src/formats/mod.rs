pub mod fasta;

// Re-export commonly used functions
pub use fasta::parse_fasta_str;
