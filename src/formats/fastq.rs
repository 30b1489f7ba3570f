//! FASTQ parser and writer.
//!
//! Only the strict four-line layout is supported:
//!
//! ```text
//! @identifier
//! SEQUENCE
//! +optional repeat of the identifier
//! QUALITY
//! ```
//!
//! Sequence lines are validated against an [`Alphabet`] but kept as found
//! (no case folding). Quality characters are not checked, only their count.

use log::debug;
use thiserror::Error;

use crate::alphabet::Alphabet;
use crate::model::FastqRecord;

/// Errors that can occur during FASTQ parsing.
///
/// Per-record errors carry the 1-indexed line number of the record's
/// identifier line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FastqError {
    #[error("Invalid fastq file: line length isn't a multiple of 4: {0}")]
    LineCount(usize),

    #[error("Invalid fastq file: identifier line doesn't start with @ (line {0})")]
    MissingIdentifier(usize),

    #[error("Invalid fastq file: sequence line contains invalid characters (line {0})")]
    InvalidSequence(usize),

    #[error("Invalid fastq file: identifierPlus line doesn't start with + (line {0})")]
    MissingSeparator(usize),

    #[error("Invalid fastq file: quality line length doesn't match sequence line length (line {0})")]
    QualityLengthMismatch(usize),
}

/// Result type for FASTQ operations.
pub type FastqResult<T> = Result<T, FastqError>;

/// Parses FASTQ content from a string, using the IUPAC alphabet.
pub fn parse_fastq_str(content: &str) -> FastqResult<Vec<FastqRecord>> {
    parse_fastq_str_with(content, Alphabet::Iupac)
}

/// Parses FASTQ content, validating sequence lines against `alphabet`.
///
/// Leading and trailing whitespace of the whole input is ignored. Parsing
/// stops at the first malformed record.
pub fn parse_fastq_str_with(content: &str, alphabet: Alphabet) -> FastqResult<Vec<FastqRecord>> {
    let lines: Vec<&str> = content.trim().split('\n').collect();

    if lines.len() % 4 != 0 {
        return Err(FastqError::LineCount(lines.len()));
    }

    let mut records = Vec::with_capacity(lines.len() / 4);

    for (i, block) in lines.chunks_exact(4).enumerate() {
        let line_number = i * 4 + 1;
        let (identifier, sequence, identifier_plus, quality) =
            (block[0], block[1], block[2], block[3]);

        let identifier = identifier
            .strip_prefix('@')
            .ok_or(FastqError::MissingIdentifier(line_number))?;

        if !alphabet.is_allowed(sequence) {
            return Err(FastqError::InvalidSequence(line_number));
        }

        let identifier_plus = identifier_plus
            .strip_prefix('+')
            .ok_or(FastqError::MissingSeparator(line_number))?;

        if quality.chars().count() != sequence.chars().count() {
            return Err(FastqError::QualityLengthMismatch(line_number));
        }

        records.push(FastqRecord::new(identifier, sequence, identifier_plus, quality));
    }

    debug!("parsed {} FASTQ records", records.len());
    Ok(records)
}

/// Writes a read as four lines, without a trailing newline.
pub fn to_fastq_string(record: &FastqRecord) -> String {
    format!(
        "@{}\n{}\n+{}\n{}",
        record.identifier, record.sequence, record.identifier_plus, record.quality
    )
}

/// Writes several reads, separated by a newline.
pub fn records_to_fastq_string(records: &[FastqRecord]) -> String {
    records
        .iter()
        .map(to_fastq_string)
        .collect::<Vec<_>>()
        .join("\n")
}
