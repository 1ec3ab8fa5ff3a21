use biotools_core::DeclaredType;
use serde::{Deserialize, Serialize};

// Import SequenceType from biotools-core
pub use biotools_core::SequenceType;

/// Residues that never occur in a nucleic-acid alphabet
const PROTEIN_ONLY_RESIDUES: &[u8] = b"EFHIKLMNPQRSVWY";

const DNA_ALPHABET: &[u8] = b"ATCG";
const RNA_ALPHABET: &[u8] = b"AUCG";
const PROTEIN_ALPHABET: &[u8] = b"ACDEFGHIKLMNPQRSTVWY*";

/// A FASTA record: identifier, optional header description and the raw
/// sequence text (case preserved, whitespace removed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence {
    pub id: String,
    pub description: Option<String>,
    pub sequence: String,
}

impl Sequence {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
            sequence: sequence.into(),
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }
}

/// Keep only ASCII letters, uppercased
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Infer the type of a normalized sequence.
///
/// Any protein-only residue decides Protein. Otherwise `U` without `T` is
/// RNA, `T` without `U` is DNA, and a pure A/C/G sequence defaults to DNA.
pub fn detect_sequence_type(normalized: &str) -> SequenceType {
    let bytes = normalized.as_bytes();
    if bytes.is_empty() {
        return SequenceType::Unknown;
    }

    if bytes.iter().any(|b| PROTEIN_ONLY_RESIDUES.contains(b)) {
        return SequenceType::Protein;
    }

    let has_t = bytes.contains(&b'T');
    let has_u = bytes.contains(&b'U');

    match (has_t, has_u) {
        (false, true) => SequenceType::RNA,
        (true, false) => SequenceType::DNA,
        _ if bytes.iter().all(|b| b"ACGT".contains(b)) => SequenceType::DNA,
        _ => SequenceType::Unknown,
    }
}

/// Type used for an operation: the declared one, or the detected one for `auto`
pub fn resolve_type(declared: DeclaredType, normalized: &str) -> SequenceType {
    declared
        .explicit()
        .unwrap_or_else(|| detect_sequence_type(normalized))
}

fn alphabet(sequence_type: SequenceType) -> Option<&'static [u8]> {
    match sequence_type {
        SequenceType::DNA => Some(DNA_ALPHABET),
        SequenceType::RNA => Some(RNA_ALPHABET),
        SequenceType::Protein => Some(PROTEIN_ALPHABET),
        SequenceType::Unknown => None,
    }
}

/// Whether every character of `normalized` is legal for `sequence_type`.
/// Always false for `Unknown`.
pub fn is_valid_sequence(normalized: &str, sequence_type: SequenceType) -> bool {
    match alphabet(sequence_type) {
        Some(legal) => normalized.bytes().all(|b| legal.contains(&b)),
        None => false,
    }
}

/// Distinct characters that are illegal for `sequence_type`, in first-seen order
pub fn invalid_characters(normalized: &str, sequence_type: SequenceType) -> Vec<char> {
    let legal = alphabet(sequence_type).unwrap_or(&[]);
    let mut invalid = Vec::new();
    for c in normalized.chars() {
        let is_legal = c.is_ascii() && legal.contains(&(c as u8));
        if !is_legal && !invalid.contains(&c) {
            invalid.push(c);
        }
    }
    invalid
}
