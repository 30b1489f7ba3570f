//! Reverse complement and anchor-based realignment.
//!
//! Sequences such as plasmids or bacterial chromosomes are circular, so the
//! position where a FASTA record starts is arbitrary. Realignment rotates a
//! record so that a known anchor sequence starts at position 0, reverse
//! complementing the whole record first when the anchor is only found on the
//! opposite strand.

use log::{debug, info, warn};
use thiserror::Error;

use crate::model::{FastaRecord, Realignment};

/// The anchor occurs neither directly nor as a reverse complement.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("anchor sequence not found in either orientation")]
pub struct AnchorNotFound;

/// Result type for realignment.
pub type RealignResult<T> = Result<T, AnchorNotFound>;

/// Complement of a single uppercase base. Anything outside `ACGT` maps to `N`.
fn complement(base: char) -> Option<char> {
    match base {
        'A' => Some('T'),
        'T' => Some('A'),
        'G' => Some('C'),
        'C' => Some('G'),
        _ => None,
    }
}

/// Returns the reverse complement of `sequence` together with the number of
/// characters that were not `A`, `C`, `G` or `T` and were written as `N`.
///
/// Only uppercase bases are complemented.
///
/// # Examples
///
/// ```
/// use seqrealign::realign::reverse_complement;
///
/// assert_eq!(reverse_complement("ACG"), ("CGT".to_string(), 0));
/// assert_eq!(reverse_complement("AXa"), ("NNT".to_string(), 2));
/// ```
pub fn reverse_complement(sequence: &str) -> (String, usize) {
    let mut conversions = 0;
    let reversed = sequence
        .chars()
        .rev()
        .map(|c| {
            complement(c).unwrap_or_else(|| {
                conversions += 1;
                'N'
            })
        })
        .collect();
    (reversed, conversions)
}

/// Rotates `record` so that `anchor` starts at position 0.
///
/// The anchor is first searched as-is. If absent, its reverse complement is
/// searched; when found, the whole sequence is reverse complemented before
/// rotating, and the number of bases turned into `N` is reported in
/// [`Realignment::conversions`]. Only the first occurrence is used.
///
/// The input record is left untouched.
pub fn realign_fasta(record: &FastaRecord, anchor: &str) -> RealignResult<FastaRecord> {
    let (working, rotation, is_reversed, conversions) = match record.data.find(anchor) {
        Some(index) => (record.data.clone(), index, false, 0),
        None => {
            let (reverse_anchor, _) = reverse_complement(anchor);
            let index = record.data.find(&reverse_anchor).ok_or(AnchorNotFound)?;
            let (reverse, conversions) = reverse_complement(&record.data);

            // Reverse complements are pure ASCII, so char positions are byte offsets
            let position = record.data[..index].chars().count();
            let rotation = record.data.chars().count() - position - reverse_anchor.len();
            (reverse, rotation, true, conversions)
        }
    };

    debug!(
        "realigning '{}' at {} ({} orientation, {} conversions)",
        record.description,
        rotation,
        if is_reversed { "reverse" } else { "forward" },
        conversions
    );

    let mut data = String::with_capacity(working.len());
    data.push_str(&working[rotation..]);
    data.push_str(&working[..rotation]);

    Ok(FastaRecord {
        description: record.description.clone(),
        data,
        realignment: Some(Realignment {
            is_reversed,
            conversions,
        }),
    })
}

/// Realigns every record on `anchor` (uppercased first), preserving order.
///
/// Records whose anchor cannot be found are logged and kept unchanged, or
/// omitted when `drop_unmatched` is set.
pub fn realign_records(
    records: Vec<FastaRecord>,
    anchor: &str,
    drop_unmatched: bool,
) -> Vec<FastaRecord> {
    let anchor = anchor.to_ascii_uppercase();
    let mut realigned = Vec::with_capacity(records.len());

    for record in records {
        match realign_fasta(&record, &anchor) {
            Ok(new_record) => {
                if let Some(r) = new_record.realignment.filter(|r| r.is_reversed) {
                    info!(
                        "{}: realigned on reverse strand ({} bases converted to N)",
                        record.description, r.conversions
                    );
                }
                realigned.push(new_record);
            }
            Err(e) => {
                warn!("{}: {}", record.description, e);
                if !drop_unmatched {
                    realigned.push(record);
                }
            }
        }
    }
    realigned
}
