/// Property tests for the transformation engine
use biotools_bio::sequence::{detect_sequence_type, normalize};
use biotools_bio::{transform, SequenceType};
use biotools_core::{DeclaredType, Operation};
use proptest::prelude::*;

fn dna() -> impl Strategy<Value = String> {
    "[ACGTacgt \n]{0,120}"
}

fn printable() -> impl Strategy<Value = String> {
    "[ -~]{0,80}"
}

proptest! {
    #[test]
    fn reverse_complement_is_an_involution(seq in dna()) {
        let once = transform(&seq, DeclaredType::DNA, Operation::ReverseComplement).unwrap();
        let twice = transform(&once.result, DeclaredType::DNA, Operation::ReverseComplement).unwrap();
        prop_assert_eq!(twice.result, normalize(&seq));
    }

    #[test]
    fn transcription_only_touches_thymine(seq in dna()) {
        let normalized = normalize(&seq);
        let rna = transform(&seq, DeclaredType::DNA, Operation::Transcribe).unwrap();

        prop_assert_eq!(rna.result.len(), normalized.len());
        for (before, after) in normalized.chars().zip(rna.result.chars()) {
            if before == 'T' {
                prop_assert_eq!(after, 'U');
            } else {
                prop_assert_eq!(after, before);
            }
        }

        let back = transform(&rna.result, DeclaredType::RNA, Operation::ReverseTranscribe).unwrap();
        prop_assert_eq!(back.result, normalized);
    }

    #[test]
    fn translation_length_is_whole_codons(seq in dna()) {
        let normalized = normalize(&seq);
        let protein = transform(&seq, DeclaredType::DNA, Operation::Translate).unwrap();
        prop_assert_eq!(protein.result.len(), normalized.len() / 3);
        prop_assert_eq!(protein.sequence_type, SequenceType::Protein);
    }

    #[test]
    fn case_conversion_is_idempotent(seq in printable()) {
        let upper = transform(&seq, DeclaredType::Auto, Operation::Uppercase).unwrap();
        let upper_again = transform(&upper.result, DeclaredType::Auto, Operation::Uppercase).unwrap();
        prop_assert_eq!(&upper_again.result, &upper.result);

        let lower = transform(&seq, DeclaredType::Auto, Operation::Lowercase).unwrap();
        let lower_again = transform(&lower.result, DeclaredType::Auto, Operation::Lowercase).unwrap();
        prop_assert_eq!(&lower_again.result, &lower.result);
    }

    #[test]
    fn original_sequence_is_preserved_verbatim(seq in printable()) {
        for op in Operation::ALL {
            if let Ok(out) = transform(&seq, DeclaredType::Auto, op) {
                prop_assert_eq!(&out.original_sequence, &seq);
            }
        }
    }

    #[test]
    fn detection_never_fails_on_protein_letters(seq in "[ACGT]{0,20}[EFHIKLMNPQRSVWY][A-Z]{0,20}") {
        prop_assert_eq!(detect_sequence_type(&seq), SequenceType::Protein);
    }
}

#[test]
fn detection_examples() {
    assert_eq!(detect_sequence_type("ATCG"), SequenceType::DNA);
    assert_eq!(detect_sequence_type("AUCG"), SequenceType::RNA);
    assert_eq!(detect_sequence_type("MKV"), SequenceType::Protein);
    assert_eq!(detect_sequence_type(""), SequenceType::Unknown);
}

#[test]
fn translation_drops_partial_codon() {
    let six = transform("ATGAAT", DeclaredType::Auto, Operation::Translate).unwrap();
    let seven = transform("ATGAATG", DeclaredType::Auto, Operation::Translate).unwrap();
    assert_eq!(six.result.len(), 2);
    assert_eq!(six.result, seven.result);
}
