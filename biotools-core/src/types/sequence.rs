//! Sequence-related types shared across Biotools

use crate::error::BiotoolsError;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Type of biological sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceType {
    /// DNA sequence
    DNA,
    /// RNA sequence
    RNA,
    /// Protein/amino acid sequence
    Protein,
    /// Unknown sequence type
    Unknown,
}

impl Default for SequenceType {
    fn default() -> Self {
        Self::Unknown
    }
}

impl std::fmt::Display for SequenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DNA => write!(f, "DNA"),
            Self::RNA => write!(f, "RNA"),
            Self::Protein => write!(f, "Protein"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Sequence type as claimed by a caller.
///
/// `Auto` defers to content-based detection; the remaining variants are
/// taken at face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclaredType {
    Auto,
    DNA,
    RNA,
    Protein,
}

impl DeclaredType {
    /// The explicit type, or `None` when detection should decide
    pub fn explicit(&self) -> Option<SequenceType> {
        match self {
            Self::Auto => None,
            Self::DNA => Some(SequenceType::DNA),
            Self::RNA => Some(SequenceType::RNA),
            Self::Protein => Some(SequenceType::Protein),
        }
    }
}

impl Default for DeclaredType {
    fn default() -> Self {
        Self::Auto
    }
}

impl FromStr for DeclaredType {
    type Err = BiotoolsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dna" => Ok(Self::DNA),
            "rna" => Ok(Self::RNA),
            "protein" => Ok(Self::Protein),
            other => Err(BiotoolsError::InvalidInput(format!(
                "Unknown sequence type '{}' (expected dna, rna, protein or auto)",
                other
            ))),
        }
    }
}

/// Accepts the same spellings as `FromStr`; `null` means `Auto`
impl<'de> Deserialize<'de> for DeclaredType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(value) => value
                .parse()
                .map_err(|e: BiotoolsError| serde::de::Error::custom(e.message())),
            None => Ok(Self::Auto),
        }
    }
}
