use super::types::{normalize, resolve_type, SequenceType};
use biotools_core::{BiotoolsError, BiotoolsResult, DeclaredType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Average mass of water lost per phosphodiester or peptide bond (Da)
const WATER_WEIGHT: f64 = 18.0153;

/// Composition and physical properties of a single sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResult {
    pub length: usize,
    pub composition: BTreeMap<String, usize>,
    pub gc_content: Option<f64>,
    pub molecular_weight: Option<f64>,
    pub sequence_type: SequenceType,
    #[serde(default)]
    pub sequence_id: Option<String>,
}

impl StatsResult {
    pub fn with_id(mut self, sequence_id: Option<String>) -> Self {
        self.sequence_id = sequence_id;
        self
    }
}

/// Compute statistics for a raw sequence. Never fails: weight and GC
/// content are best-effort and left out when they cannot be computed.
pub fn calculate_stats(raw: &str, declared: DeclaredType) -> StatsResult {
    let normalized = normalize(raw);
    let sequence_type = resolve_type(declared, &normalized);

    let mut stats = StatsResult {
        length: normalized.len(),
        composition: composition(&normalized),
        gc_content: None,
        molecular_weight: None,
        sequence_type,
        sequence_id: None,
    };

    match sequence_type {
        SequenceType::DNA | SequenceType::RNA => match nucleic_acid_metrics(&normalized, sequence_type) {
            Ok((gc, weight)) => {
                stats.gc_content = gc;
                stats.molecular_weight = Some(weight);
            }
            Err(e) => debug!(%sequence_type, error = %e, "Omitting GC content and molecular weight"),
        },
        SequenceType::Protein => match molecular_weight(&normalized, sequence_type) {
            Ok(weight) => stats.molecular_weight = Some(weight),
            Err(e) => debug!(%sequence_type, error = %e, "Omitting molecular weight"),
        },
        SequenceType::Unknown => {}
    }

    stats
}

fn nucleic_acid_metrics(normalized: &str, sequence_type: SequenceType) -> BiotoolsResult<(Option<f64>, f64)> {
    let weight = molecular_weight(normalized, sequence_type)?;
    Ok((gc_content(normalized), weight))
}

fn composition(normalized: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for c in normalized.chars() {
        *counts.entry(c.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Percentage of G and C, rounded to 2 decimals; `None` for an empty sequence
pub fn gc_content(normalized: &str) -> Option<f64> {
    if normalized.is_empty() {
        return None;
    }
    let gc = normalized.bytes().filter(|b| matches!(b, b'G' | b'C')).count();
    Some(round2(gc as f64 / normalized.len() as f64 * 100.0))
}

/// Single-stranded average molecular weight in Daltons, rounded to 2 decimals.
///
/// Fails on an empty sequence, on `Unknown`, and on any residue missing from
/// the weight table for the type (ambiguity codes, stop `*`).
pub fn molecular_weight(normalized: &str, sequence_type: SequenceType) -> BiotoolsResult<f64> {
    let table: fn(u8) -> Option<f64> = match sequence_type {
        SequenceType::DNA => dna_weight,
        SequenceType::RNA => rna_weight,
        SequenceType::Protein => protein_weight,
        SequenceType::Unknown => {
            return Err(BiotoolsError::Computation(
                "no weight table for an unknown sequence type".to_string(),
            ))
        }
    };

    if normalized.is_empty() {
        return Err(BiotoolsError::Computation("empty sequence has no molecular weight".to_string()));
    }

    let mut total = 0.0;
    for b in normalized.bytes() {
        total += table(b).ok_or_else(|| {
            BiotoolsError::Computation(format!(
                "'{}' is not a valid unambiguous letter for {}",
                b as char, sequence_type
            ))
        })?;
    }

    let bonds = (normalized.len() - 1) as f64;
    Ok(round2(total - bonds * WATER_WEIGHT))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn dna_weight(base: u8) -> Option<f64> {
    match base {
        b'A' => Some(331.2218),
        b'C' => Some(307.1971),
        b'G' => Some(347.2212),
        b'T' => Some(322.2085),
        _ => None,
    }
}

fn rna_weight(base: u8) -> Option<f64> {
    match base {
        b'A' => Some(347.2212),
        b'C' => Some(323.1965),
        b'G' => Some(363.2206),
        b'U' => Some(324.1813),
        _ => None,
    }
}

fn protein_weight(residue: u8) -> Option<f64> {
    let weight = match residue {
        b'A' => 89.0932,
        b'C' => 121.1582,
        b'D' => 133.1027,
        b'E' => 147.1293,
        b'F' => 165.1891,
        b'G' => 75.0666,
        b'H' => 155.1546,
        b'I' => 131.1729,
        b'K' => 146.1876,
        b'L' => 131.1729,
        b'M' => 149.2113,
        b'N' => 132.1179,
        b'O' => 255.3134,
        b'P' => 115.1305,
        b'Q' => 146.1445,
        b'R' => 174.201,
        b'S' => 105.0926,
        b'T' => 119.1192,
        b'U' => 168.0532,
        b'V' => 117.1463,
        b'W' => 204.2252,
        b'Y' => 181.1885,
        _ => return None,
    };
    Some(weight)
}
