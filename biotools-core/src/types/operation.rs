//! Sequence transformation operations

use super::sequence::SequenceType;
use crate::error::BiotoolsError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A transformation that can be applied to a single sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    ReverseComplement,
    Transcribe,
    ReverseTranscribe,
    Translate,
    Uppercase,
    Lowercase,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::ReverseComplement,
        Operation::Transcribe,
        Operation::ReverseTranscribe,
        Operation::Translate,
        Operation::Uppercase,
        Operation::Lowercase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReverseComplement => "reverse_complement",
            Self::Transcribe => "transcribe",
            Self::ReverseTranscribe => "reverse_transcribe",
            Self::Translate => "translate",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
        }
    }

    /// Human-readable name used in error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::ReverseComplement => "Reverse complement",
            Self::Transcribe => "Transcription",
            Self::ReverseTranscribe => "Reverse transcription",
            Self::Translate => "Translation",
            Self::Uppercase => "Uppercase conversion",
            Self::Lowercase => "Lowercase conversion",
        }
    }

    /// Sequence types the operation accepts; `None` means any type
    pub fn required_types(&self) -> Option<&'static [SequenceType]> {
        match self {
            Self::ReverseComplement | Self::Transcribe => Some(&[SequenceType::DNA]),
            Self::ReverseTranscribe => Some(&[SequenceType::RNA]),
            Self::Translate => Some(&[SequenceType::DNA, SequenceType::RNA]),
            Self::Uppercase | Self::Lowercase => None,
        }
    }

    pub fn accepts(&self, sequence_type: SequenceType) -> bool {
        self.required_types()
            .map_or(true, |types| types.contains(&sequence_type))
    }

    /// Type of the produced sequence given the resolved input type
    pub fn output_type(&self, input: SequenceType) -> SequenceType {
        match self {
            Self::ReverseComplement | Self::ReverseTranscribe => SequenceType::DNA,
            Self::Transcribe => SequenceType::RNA,
            Self::Translate => SequenceType::Protein,
            Self::Uppercase | Self::Lowercase => input,
        }
    }
}

impl FromStr for Operation {
    type Err = BiotoolsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| BiotoolsError::UnsupportedOperation(s.to_string()))
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
