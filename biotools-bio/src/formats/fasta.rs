use crate::sequence::Sequence;
use biotools_core::{BiotoolsError, BiotoolsResult};
use nom::{
    bytes::complete::{tag, take_till, take_while, take_while1},
    combinator::{opt, rest},
    sequence::preceded,
    IResult,
};
use tracing::debug;

/// Parse a FASTA header line into identifier and optional description
fn parse_header(line: &str) -> IResult<&str, (&str, Option<&str>)> {
    let (input, _) = tag(">")(line)?;
    let (input, _) = take_while(char::is_whitespace)(input)?;
    let (input, id) = take_till(char::is_whitespace)(input)?;
    let (input, description) = opt(preceded(take_while1(char::is_whitespace), rest))(input)?;
    Ok((input, (id, description)))
}

/// Parse FASTA text into records, in input order.
///
/// Sequence lines are joined with whitespace removed and case preserved.
/// Blank lines are ignored and a record without sequence lines is kept
/// with an empty sequence. Text before the first header and headers
/// without an identifier are parse errors.
pub fn parse_fasta_str(input: &str) -> BiotoolsResult<Vec<Sequence>> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);

    let mut sequences = Vec::new();
    let mut current: Option<Sequence> = None;

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with('>') {
            let (_, (id, description)) = parse_header(trimmed).map_err(|e| {
                BiotoolsError::Parse(format!("Malformed header on line {}: {:?}", line_number, e))
            })?;

            if id.is_empty() {
                return Err(BiotoolsError::Parse(format!(
                    "Missing sequence identifier in header on line {}",
                    line_number
                )));
            }

            if let Some(seq) = current.take() {
                sequences.push(seq);
            }

            let mut seq = Sequence::new(id, String::new());
            if let Some(desc) = description.map(str::trim).filter(|d| !d.is_empty()) {
                seq = seq.with_description(desc.to_string());
            }
            current = Some(seq);
            continue;
        }

        match current.as_mut() {
            Some(seq) => seq
                .sequence
                .extend(trimmed.chars().filter(|c| !c.is_whitespace())),
            None => {
                return Err(BiotoolsError::Parse(format!(
                    "Expected a '>' header before sequence data on line {}",
                    line_number
                )))
            }
        }
    }

    if let Some(seq) = current {
        sequences.push(seq);
    }

    debug!(records = sequences.len(), "Parsed FASTA input");
    Ok(sequences)
}
