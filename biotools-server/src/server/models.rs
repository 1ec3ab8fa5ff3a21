use biotools_core::DeclaredType;
use serde::{Deserialize, Serialize};

/// Body of the single-sequence endpoints
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SequenceInput {
    pub sequence: String,
    #[serde(default)]
    pub sequence_type: DeclaredType,
    #[serde(default)]
    pub sequence_id: Option<String>,
}

/// Body of the FASTA batch endpoints
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FastaInput {
    pub fasta_content: String,
    #[serde(default)]
    pub sequence_type: DeclaredType,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiInfo {
    pub message: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub docs: &'static str,
    pub features: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}
