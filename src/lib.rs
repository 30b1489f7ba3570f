//! # seqrealign - FASTA/FASTQ toolkit
//!
//! Parses and validates FASTA and FASTQ text, writes records back in
//! canonical form, and realigns circular sequences on a known anchor.
//!
//! ## Architecture
//!
//! - `model`: Record types for FASTA and FASTQ
//! - `alphabet`: Accepted sequence characters
//! - `formats`: FASTA/FASTQ parsing and writing, format detection
//! - `realign`: Reverse complement and anchor-based rotation
//!
//! All operations work on in-memory text and return a `Result`; file access
//! is limited to the thin wrappers in `formats`.
//!
//! ```
//! use seqrealign::formats::fasta::{parse_fasta_str, to_fasta_string};
//! use seqrealign::realign::realign_fasta;
//!
//! let records = parse_fasta_str(">plasmid\nAAAAAAAAACCGTAAAAXXX").unwrap();
//! let realigned = realign_fasta(&records[0], "ACG").unwrap();
//! assert_eq!(realigned.conversions(), Some(3));
//! assert_eq!(to_fasta_string(&realigned), ">plasmid\nACGGTTTTTTTTTNNNTTTT");
//! ```

pub mod alphabet;
pub mod formats;
pub mod model;
pub mod realign;
