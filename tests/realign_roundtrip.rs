use std::io::Write;

use seqrealign::formats::fasta::{
    parse_fasta_str, records_to_fasta_string, to_fasta_string, LINE_WIDTH,
};
use seqrealign::formats::{parse_file, Records};
use seqrealign::realign::{realign_fasta, reverse_complement, AnchorNotFound};

const PLASMID: &str = ">plasmid pUC19 fragment
GCTCTTCCGCTTCCTCGCTCACTGACTCGCTGCGCTCGGTCGTTCGGCTGCGGCGAGCGGTATCAGCTCA
CTCAAAGGCGGTAATACGGTTATCCACAGAATCAGGGGATAACGCAGGAAAGAACATGTGAGCAAAAGGC
CAGCAAAAGGCCAGGAACCGTAAAAAGGCCGCGTTGCTGGCG";

#[test]
fn forward_realignment_preserves_length_and_wraps() {
    let records = parse_fasta_str(PLASMID).unwrap();
    let original = &records[0];

    let realigned = realign_fasta(original, "CAGAATCAG").unwrap();

    assert!(realigned.data.starts_with("CAGAATCAG"));
    assert_eq!(realigned.len(), original.len());
    assert_eq!(realigned.is_reversed(), Some(false));

    let text = to_fasta_string(&realigned);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], ">plasmid pUC19 fragment");
    assert!(lines[1..].iter().all(|l| l.len() <= LINE_WIDTH));
    assert_eq!(parse_fasta_str(&text).unwrap()[0].data, realigned.data);
}

#[test]
fn reverse_realignment_matches_reverse_complement_rotation() {
    let records = parse_fasta_str(PLASMID).unwrap();
    let original = &records[0];

    // Search for the reverse complement of a known forward motif
    let (anchor, _) = reverse_complement("GGATAACGCAGG");
    let realigned = realign_fasta(original, &anchor).unwrap();

    assert_eq!(realigned.is_reversed(), Some(true));
    assert_eq!(realigned.conversions(), Some(0));
    assert!(realigned.data.starts_with(&anchor));

    // Rotating back and complementing restores the original circle
    let (back, _) = reverse_complement(&realigned.data);
    let doubled = format!("{}{}", original.data, original.data);
    assert!(doubled.contains(&back));
}

#[test]
fn missing_anchor_is_reported() {
    let records = parse_fasta_str(PLASMID).unwrap();
    assert_eq!(realign_fasta(&records[0], "TTTTTTTTTTTT"), Err(AnchorNotFound));
}

#[test]
fn file_round_trip() {
    let mut file = tempfile::Builder::new().suffix(".fa").tempfile().unwrap();
    file.write_all(PLASMID.as_bytes()).unwrap();
    file.flush().unwrap();

    let records = match parse_file(file.path()).unwrap() {
        Records::Fasta(records) => records,
        other => panic!("expected FASTA records, got {:?}", other.format()),
    };
    assert_eq!(records_to_fasta_string(&records, LINE_WIDTH), PLASMID);
}
