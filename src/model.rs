//! Data model for sequence records.
//!
//! This module contains the value types produced by the parsers:
//! - FASTA records, optionally carrying the outcome of a realignment
//! - FASTQ reads
//!
//! Records are plain values. Transformations such as realignment build a new
//! record instead of mutating the one they were given.

/// Outcome of realigning a FASTA record on an anchor sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Realignment {
    /// Whether the anchor was found as a reverse complement
    pub is_reversed: bool,
    /// Number of non-ACGT bases replaced by `N` while reverse-complementing
    pub conversions: usize,
}

/// A single FASTA record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// The header text (without '>')
    pub description: String,
    /// The uppercased sequence data, line breaks removed
    pub data: String,
    /// Set only on records produced by realignment
    pub realignment: Option<Realignment>,
}

impl FastaRecord {
    /// Creates a new record that has not been realigned.
    pub fn new(description: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            data: data.into(),
            realignment: None,
        }
    }

    /// Returns the length of the sequence.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns whether the record was realigned on a reverse-complemented anchor.
    /// `None` if the record was never realigned.
    pub fn is_reversed(&self) -> Option<bool> {
        self.realignment.map(|r| r.is_reversed)
    }

    /// Returns the number of bases converted to `N` during realignment.
    /// `None` if the record was never realigned.
    pub fn conversions(&self) -> Option<usize> {
        self.realignment.map(|r| r.conversions)
    }
}

/// A single FASTQ read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    /// The first line, without '@'
    pub identifier: String,
    /// The sequence line, as found in the file
    pub sequence: String,
    /// The third line, without '+'
    pub identifier_plus: String,
    /// Quality string, one character per base
    pub quality: String,
}

impl FastqRecord {
    pub fn new(
        identifier: impl Into<String>,
        sequence: impl Into<String>,
        identifier_plus: impl Into<String>,
        quality: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            sequence: sequence.into(),
            identifier_plus: identifier_plus.into(),
            quality: quality.into(),
        }
    }

    /// Returns the read length.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
