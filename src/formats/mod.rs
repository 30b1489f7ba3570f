//! Multi-format sequence file parser.
//!
//! Supports automatic format detection for:
//! - FASTA (.fasta, .fa, .fna, .faa, .fas, .ffn, .frn)
//! - FASTQ (.fastq, .fq)
//!
//! Format detection priority:
//! 1. Explicit format specification (-f option)
//! 2. File extension
//! 3. Content-based detection

pub mod fasta;
pub mod fastq;

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::alphabet::Alphabet;
use crate::model::{FastaRecord, FastqRecord};

/// Detected file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Fasta,
    Fastq,
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileFormat::Fasta => write!(f, "FASTA"),
            FileFormat::Fastq => write!(f, "FASTQ"),
        }
    }
}

/// Errors that can occur during file parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to open file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Empty file")]
    EmptyFile,

    #[error("Could not determine file format.\n\
             Hint: Use -f/--format to specify the format explicitly:\n  \
             seqrealign -f fasta <file>   # FASTA format\n  \
             seqrealign -f fastq <file>   # FASTQ format")]
    UnknownFormat,

    #[error(transparent)]
    FastaError(#[from] fasta::FastaError),

    #[error(transparent)]
    FastqError(#[from] fastq::FastqError),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Records read from a file, tagged by format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Records {
    Fasta(Vec<FastaRecord>),
    Fastq(Vec<FastqRecord>),
}

impl Records {
    pub fn format(&self) -> FileFormat {
        match self {
            Records::Fasta(_) => FileFormat::Fasta,
            Records::Fastq(_) => FileFormat::Fastq,
        }
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        match self {
            Records::Fasta(records) => records.len(),
            Records::Fastq(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Detects format from file extension.
pub fn detect_format_from_extension<P: AsRef<Path>>(path: P) -> Option<FileFormat> {
    let ext = path.as_ref().extension().and_then(OsStr::to_str)?;
    match ext.to_lowercase().as_str() {
        "fa" | "fas" | "fasta" | "fna" | "faa" | "ffn" | "frn" => Some(FileFormat::Fasta),
        "fq" | "fastq" => Some(FileFormat::Fastq),
        _ => None,
    }
}

/// Detects the file format from the first non-empty line.
pub fn detect_format_from_content(content: &str) -> Option<FileFormat> {
    let first = content.lines().map(str::trim).find(|l| !l.is_empty())?;
    match first.chars().next() {
        Some('>') => Some(FileFormat::Fasta),
        Some('@') => Some(FileFormat::Fastq),
        _ => None,
    }
}

/// Parses content with a specific format.
pub fn parse_content(
    content: &str,
    format: FileFormat,
    alphabet: Alphabet,
) -> ParseResult<Records> {
    match format {
        FileFormat::Fasta => Ok(Records::Fasta(fasta::parse_fasta_str_with(content, alphabet)?)),
        FileFormat::Fastq => Ok(Records::Fastq(fastq::parse_fastq_str_with(content, alphabet)?)),
    }
}

/// Parses a sequence file with optional format specification.
///
/// Detection priority:
/// 1. Explicit format (if provided)
/// 2. File extension
/// 3. Content-based detection
///
/// If the content does not parse as the format its extension suggests, the
/// format detected from the content is tried instead. When that gives no
/// other format, the extension's parse error is returned.
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    forced_format: Option<FileFormat>,
    alphabet: Alphabet,
) -> ParseResult<Records> {
    let file = File::open(&path)?;
    let file_size = file.metadata()?.len() as usize;

    if file_size == 0 {
        return Err(ParseError::EmptyFile);
    }

    let mut reader = BufReader::with_capacity(1024 * 1024, file);
    let mut content = String::with_capacity(file_size);
    reader.read_to_string(&mut content)?;

    // 1. Use explicit format if provided
    if let Some(format) = forced_format {
        return parse_content(&content, format, alphabet);
    }

    let from_content = detect_format_from_content(&content);

    // 2. Try the format suggested by the extension
    if let Some(format) = detect_format_from_extension(&path) {
        debug!("parsing {} as {}", path.as_ref().display(), format);
        match parse_content(&content, format, alphabet) {
            Ok(records) => return Ok(records),
            Err(e) => match from_content {
                Some(detected) if detected != format => {
                    debug!("not a valid {} file ({}), trying {}", format, e, detected);
                }
                _ => return Err(e),
            },
        }
    }

    // 3. Content-based detection
    let format = from_content.ok_or(ParseError::UnknownFormat)?;
    debug!("parsing {} as {}", path.as_ref().display(), format);
    parse_content(&content, format, alphabet)
}

/// Parses a sequence file, automatically detecting the format.
pub fn parse_file<P: AsRef<Path>>(path: P) -> ParseResult<Records> {
    parse_file_with_options(path, None, Alphabet::default())
}

/// Parses a sequence file with explicit format specification.
pub fn parse_file_as<P: AsRef<Path>>(path: P, format: FileFormat) -> ParseResult<Records> {
    parse_file_with_options(path, Some(format), Alphabet::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_detect_fasta() {
        let content = ">seq1\nACGT\n";
        assert_eq!(detect_format_from_content(content), Some(FileFormat::Fasta));
    }

    #[test]
    fn test_detect_fastq() {
        let content = "@read1\nACGT\n+\nIIII\n";
        assert_eq!(detect_format_from_content(content), Some(FileFormat::Fastq));
    }

    #[test]
    fn test_detect_unknown() {
        let content = "This is not a valid sequence file\n";
        assert_eq!(detect_format_from_content(content), None);
        assert_eq!(detect_format_from_content(""), None);
    }

    #[test]
    fn test_detect_with_leading_empty_lines() {
        let content = "\n\n  \n>seq1\nACGT\n";
        assert_eq!(detect_format_from_content(content), Some(FileFormat::Fasta));
    }

    #[test]
    fn test_detect_from_extension() {
        assert_eq!(detect_format_from_extension("test.fa"), Some(FileFormat::Fasta));
        assert_eq!(detect_format_from_extension("test.fasta"), Some(FileFormat::Fasta));
        assert_eq!(detect_format_from_extension("test.FNA"), Some(FileFormat::Fasta));
        assert_eq!(detect_format_from_extension("test.fq"), Some(FileFormat::Fastq));
        assert_eq!(detect_format_from_extension("test.fastq"), Some(FileFormat::Fastq));
        assert_eq!(detect_format_from_extension("test.txt"), None);
        assert_eq!(detect_format_from_extension("test"), None);
    }

    #[test]
    fn test_parse_fasta_file() {
        let file = temp_file(".fasta", ">seq1\nACGT\n>seq2\nTTGG\n");
        let records = parse_file(file.path()).unwrap();
        assert_eq!(records.format(), FileFormat::Fasta);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_by_content() {
        let file = temp_file(".txt", "@r1\nACGT\n+\nIIII\n");
        let records = parse_file(file.path()).unwrap();
        assert_eq!(
            records,
            Records::Fastq(vec![FastqRecord::new("r1", "ACGT", "", "IIII")])
        );
    }

    #[test]
    fn test_forced_format_wins() {
        let file = temp_file(".fq", ">seq1\nACGT\n");
        let records = parse_file_as(file.path(), FileFormat::Fasta).unwrap();
        assert_eq!(records.format(), FileFormat::Fasta);
    }

    #[test]
    fn test_wrong_extension_falls_back_to_content() {
        let file = temp_file(".fq", ">seq1\nACGT\n");
        let records = parse_file(file.path()).unwrap();
        assert_eq!(records, Records::Fasta(vec![FastaRecord::new("seq1", "ACGT")]));
    }

    #[test]
    fn test_wrong_extension_unknown_content_keeps_error() {
        let file = temp_file(".fq", "hello\n");
        assert!(matches!(
            parse_file(file.path()),
            Err(ParseError::FastqError(fastq::FastqError::LineCount(1)))
        ));
    }

    #[test]
    fn test_empty_file() {
        let file = temp_file(".fa", "");
        assert!(matches!(parse_file(file.path()), Err(ParseError::EmptyFile)));
    }

    #[test]
    fn test_unknown_format() {
        let file = temp_file(".txt", "hello\n");
        assert!(matches!(parse_file(file.path()), Err(ParseError::UnknownFormat)));
    }

    #[test]
    fn test_missing_file() {
        let result = parse_file("file_which_does_not_exist.fasta");
        assert!(matches!(result, Err(ParseError::IoError(_))));
    }

    #[test]
    fn test_format_error_is_forwarded() {
        let file = temp_file(".fa", ">seq1\nAC GT\n");
        let err = parse_file(file.path()).unwrap_err();
        assert!(matches!(err, ParseError::FastaError(fasta::FastaError::InvalidInput(1))));
        assert_eq!(err.to_string(), "Invalid fasta file: invalid input at line 1");
    }

    #[test]
    fn test_strict_alphabet() {
        let file = temp_file(".fq", "@r1\nACNT\n+\nIIII\n");
        assert!(parse_file(file.path()).is_ok());
        let result = parse_file_with_options(file.path(), None, Alphabet::Dna);
        assert!(matches!(
            result,
            Err(ParseError::FastqError(fastq::FastqError::InvalidSequence(1)))
        ));
    }
}
