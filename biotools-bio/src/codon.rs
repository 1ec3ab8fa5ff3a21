//! Standard genetic code (NCBI table 1) and codon-wise translation.

// Base encoding: A=0, C=1, G=2, T/U=3
fn base_index(b: u8) -> Option<usize> {
    match b.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' | b'U' => Some(3),
        _ => None,
    }
}

/// Convert a 3-base codon to an index in [0, 64).
fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let b1 = base_index(codon[0])?;
    let b2 = base_index(codon[1])?;
    let b3 = base_index(codon[2])?;
    Some(b1 * 16 + b2 * 4 + b3)
}

// Codon order: AAA, AAC, AAG, AAT, ACA, ACC, ACG, ACT, AGA, AGC, AGG, AGT,
//              ATA, ATC, ATG, ATT, CAA, CAC, CAG, CAT, CCA, CCC, CCG, CCT,
//              CGA, CGC, CGG, CGT, CTA, CTC, CTG, CTT, GAA, GAC, GAG, GAT,
//              GCA, GCC, GCG, GCT, GGA, GGC, GGG, GGT, GTA, GTC, GTG, GTT,
//              TAA, TAC, TAG, TAT, TCA, TCC, TCG, TCT, TGA, TGC, TGG, TGT,
//              TTA, TTC, TTG, TTT
const STANDARD_CODE: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

pub const STOP: u8 = b'*';

/// Residue for a codon that cannot be decoded
pub const UNKNOWN_RESIDUE: u8 = b'X';

/// Translate one codon (DNA or RNA letters, any case).
///
/// Returns `None` if the codon is not exactly three unambiguous bases.
pub fn translate_codon(codon: &[u8]) -> Option<u8> {
    codon_index(codon).map(|idx| STANDARD_CODE[idx])
}

/// Result of translating a nucleotide sequence frame 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub protein: String,
    pub codons: usize,
    pub trailing_bases_dropped: usize,
    pub stop_codons: usize,
}

/// Translate every complete codon; stops are emitted as `*` and
/// translation carries on past them. Leftover 1-2 bases are dropped.
pub fn translate(nucleotides: &str) -> Translation {
    let bytes = nucleotides.as_bytes();
    let chunks = bytes.chunks_exact(3);
    let trailing_bases_dropped = chunks.remainder().len();

    let mut protein = String::with_capacity(bytes.len() / 3);
    let mut stop_codons = 0;
    for codon in chunks {
        let residue = translate_codon(codon).unwrap_or(UNKNOWN_RESIDUE);
        if residue == STOP {
            stop_codons += 1;
        }
        protein.push(residue as char);
    }

    Translation {
        codons: protein.len(),
        protein,
        trailing_bases_dropped,
        stop_codons,
    }
}
