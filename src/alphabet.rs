//! Sequence alphabets accepted by the parsers.
//!
//! Both FASTA and FASTQ use [`Alphabet::Iupac`] by default. It accepts every
//! letter except `O` (in either case), plus `*` (translation stop) and `-`
//! (gap):
//!
//! ```text
//! A  adenosine          C  cytidine             G  guanine
//! T  thymidine          N  A/G/C/T (any)        U  uridine
//! K  G/T (keto)         S  G/C (strong)         Y  T/C (pyrimidine)
//! M  A/C (amino)        W  A/T (weak)           R  G/A (purine)
//! B  G/T/C              D  G/A/T                H  A/C/T
//! V  G/C/A              -  gap of indeterminate length
//! ```
//!
//! Amino acid codes add `E F I L P Q Z X *` to the set above. No IUPAC code
//! uses `O`.

/// Set of characters allowed in sequence data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// IUPAC nucleotide and amino acid codes, gaps and stops
    #[default]
    Iupac,
    /// Plain DNA: `ACGT` only
    Dna,
}

impl Alphabet {
    /// Checks a single byte against the alphabet.
    pub fn is_allowed_byte(self, b: u8) -> bool {
        match self {
            Alphabet::Iupac => {
                (b.is_ascii_alphabetic() && !b.eq_ignore_ascii_case(&b'O'))
                    || b == b'*'
                    || b == b'-'
            }
            Alphabet::Dna => matches!(b.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T'),
        }
    }

    /// Returns true if every character of `text` belongs to the alphabet.
    /// The empty string is always allowed.
    pub fn is_allowed(self, text: &str) -> bool {
        text.bytes().all(|b| self.is_allowed_byte(b))
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alphabet::Iupac => write!(f, "IUPAC"),
            Alphabet::Dna => write!(f, "DNA"),
        }
    }
}

/// Checks `text` against the default (IUPAC) alphabet.
pub fn is_allowed_sequence(text: &str) -> bool {
    Alphabet::Iupac.is_allowed(text)
}
