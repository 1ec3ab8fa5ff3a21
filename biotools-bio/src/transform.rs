//! Single-sequence transformations

use crate::codon;
use crate::sequence::types::{invalid_characters, normalize, resolve_type, SequenceType};
use biotools_core::{BiotoolsError, BiotoolsResult, DeclaredType, Operation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Output of a transformation.
///
/// `original_sequence` is always the caller's input, byte for byte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformResult {
    pub result: String,
    pub original_sequence: String,
    pub sequence_type: SequenceType,
    #[serde(default)]
    pub sequence_id: Option<String>,
    #[serde(default)]
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
}

impl TransformResult {
    pub fn with_id(mut self, sequence_id: Option<String>) -> Self {
        self.sequence_id = sequence_id;
        self
    }
}

/// Apply `operation` to a raw sequence.
///
/// The input is normalized and its type resolved (`auto` goes through
/// detection). Nucleic-acid operations fail with a validation error when
/// the resolved type is wrong for the operation or the sequence has letters
/// outside that type's alphabet. Case operations act on the raw input.
pub fn transform(raw: &str, declared: DeclaredType, operation: Operation) -> BiotoolsResult<TransformResult> {
    let normalized = normalize(raw);
    let resolved = resolve_type(declared, &normalized);

    debug!(
        operation = operation.as_str(),
        declared = ?declared,
        resolved = %resolved,
        length = normalized.len(),
        "Transforming sequence"
    );

    check_type(operation, resolved)?;

    let mut metadata = None;
    let result = match operation {
        Operation::ReverseComplement => {
            check_alphabet(operation, &normalized, resolved)?;
            reverse_complement(&normalized)
        }
        Operation::Transcribe => {
            check_alphabet(operation, &normalized, resolved)?;
            normalized.replace('T', "U")
        }
        Operation::ReverseTranscribe => {
            check_alphabet(operation, &normalized, resolved)?;
            normalized.replace('U', "T")
        }
        Operation::Translate => {
            check_alphabet(operation, &normalized, resolved)?;
            let translation = codon::translate(&normalized);
            metadata = Some(translation_metadata(&translation));
            translation.protein
        }
        Operation::Uppercase => raw.to_uppercase(),
        Operation::Lowercase => raw.to_lowercase(),
    };

    Ok(TransformResult {
        result,
        original_sequence: raw.to_string(),
        sequence_type: operation.output_type(resolved),
        sequence_id: None,
        metadata,
    })
}

/// Complement A<->T and C<->G, then reverse. Expects a validated DNA sequence.
pub fn reverse_complement(dna: &str) -> String {
    dna.chars()
        .rev()
        .map(|c| match c {
            'A' => 'T',
            'T' => 'A',
            'C' => 'G',
            'G' => 'C',
            other => other,
        })
        .collect()
}

fn check_type(operation: Operation, resolved: SequenceType) -> BiotoolsResult<()> {
    if operation.accepts(resolved) {
        return Ok(());
    }

    let expected: Vec<String> = operation
        .required_types()
        .unwrap_or_default()
        .iter()
        .map(ToString::to_string)
        .collect();
    Err(BiotoolsError::Validation(format!(
        "{} is only supported for {} sequences, got {}",
        operation.description(),
        expected.join(" or "),
        resolved
    )))
}

fn check_alphabet(operation: Operation, normalized: &str, resolved: SequenceType) -> BiotoolsResult<()> {
    let invalid = invalid_characters(normalized, resolved);
    if invalid.is_empty() {
        return Ok(());
    }

    let listed: Vec<String> = invalid.iter().map(char::to_string).collect();
    Err(BiotoolsError::Validation(format!(
        "{} failed: sequence contains characters not valid for {}: {}",
        operation.description(),
        resolved,
        listed.join(", ")
    )))
}

fn translation_metadata(translation: &codon::Translation) -> BTreeMap<String, serde_json::Value> {
    let mut metadata = BTreeMap::new();
    metadata.insert("codons".to_string(), translation.codons.into());
    metadata.insert(
        "trailing_bases_dropped".to_string(),
        translation.trailing_bases_dropped.into(),
    );
    metadata.insert("stop_codons".to_string(), translation.stop_codons.into());
    metadata
}
