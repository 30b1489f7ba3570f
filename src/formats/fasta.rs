//! FASTA parser and writer.
//!
//! This module handles parsing FASTA text into records and writing records
//! back in canonical form. Multi-line sequences are concatenated and
//! uppercased.
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence_identifier optional description
//! ACGTACGTACGT...
//! >another_sequence
//! TGCATGCATGCA...
//! ```
//!
//! Canonical output wraps sequence data at [`LINE_WIDTH`] characters, with no
//! newline after the last sequence line. For a single record written this
//! way, parsing and writing are exact inverses.

use log::debug;
use thiserror::Error;

use crate::alphabet::Alphabet;
use crate::model::FastaRecord;

/// Default wrap width for sequence lines.
pub const LINE_WIDTH: usize = 70;

/// Errors that can occur during FASTA parsing.
///
/// Line numbers are 0-indexed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FastaError {
    #[error("Invalid fasta file: file does not start with \">\"")]
    MissingHeader,

    #[error("Invalid fasta file: data with no sequence identifier at line {0}")]
    SequenceWithoutHeader(usize),

    #[error("Invalid fasta file: invalid input at line {0}")]
    InvalidInput(usize),
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// Parses FASTA content from a string, using the IUPAC alphabet.
///
/// # Examples
///
/// ```
/// use seqrealign::formats::fasta::parse_fasta_str;
///
/// let records = parse_fasta_str(">seq1\nacgt\nACGT").unwrap();
/// assert_eq!(records[0].description, "seq1");
/// assert_eq!(records[0].data, "ACGTACGT");
/// ```
pub fn parse_fasta_str(content: &str) -> FastaResult<Vec<FastaRecord>> {
    parse_fasta_str_with(content, Alphabet::Iupac)
}

/// Parses FASTA content, validating sequence lines against `alphabet`.
///
/// Empty lines are accepted anywhere after the first header. Parsing stops
/// at the first invalid line.
pub fn parse_fasta_str_with(content: &str, alphabet: Alphabet) -> FastaResult<Vec<FastaRecord>> {
    if !content.starts_with('>') {
        return Err(FastaError::MissingHeader);
    }

    let mut records = Vec::new();
    let mut current: Option<FastaRecord> = None;

    for (line_number, line) in content.split('\n').enumerate() {
        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                records.push(record);
            }
            current = Some(FastaRecord::new(header, String::new()));
        } else if alphabet.is_allowed(line) {
            let record = current
                .as_mut()
                .ok_or(FastaError::SequenceWithoutHeader(line_number))?;
            record.data.push_str(&line.to_ascii_uppercase());
        } else {
            return Err(FastaError::InvalidInput(line_number));
        }
    }

    // Don't forget the last record
    if let Some(record) = current {
        records.push(record);
    }

    debug!("parsed {} FASTA records", records.len());
    Ok(records)
}

/// Writes a record in canonical form, wrapping at [`LINE_WIDTH`].
pub fn to_fasta_string(record: &FastaRecord) -> String {
    to_fasta_string_wrapped(record, LINE_WIDTH)
}

/// Writes a record with sequence lines of at most `width` characters.
/// A `width` of 0 writes the whole sequence on one line.
///
/// The header line always ends with a newline; the last sequence line never
/// does.
pub fn to_fasta_string_wrapped(record: &FastaRecord, width: usize) -> String {
    let mut out = String::with_capacity(record.description.len() + record.data.len() * 2 + 2);
    out.push('>');
    out.push_str(&record.description);
    out.push('\n');

    if width == 0 {
        out.push_str(&record.data);
        return out;
    }

    let chars: Vec<char> = record.data.chars().collect();
    for (i, line) in chars.chunks(width).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.extend(line);
    }
    out
}

/// Writes several records, separated by a newline.
pub fn records_to_fasta_string(records: &[FastaRecord], width: usize) -> String {
    records
        .iter()
        .map(|r| to_fasta_string_wrapped(r, width))
        .collect::<Vec<_>>()
        .join("\n")
}
