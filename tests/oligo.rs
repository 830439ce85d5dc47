extern crate bio;
extern crate recodr;

use bio::alphabets::dna;

use recodr::constants::{PJ23119_PROMOTER, SUB_LIBRARY_SPACER};
use recodr::oligo::{assemble, protospacer, TargetStrand};
use recodr::pam::PamOrientation;

fn merged() -> Vec<u8> {
    (0..200).map(|i| b"ACGT"[i % 4]).collect()
}

#[test]
fn test_template_strand_windows() {
    let merged = merged();

    // Positive distances read the 20 nt upstream of the PAM.
    let proto = protospacer(&merged, 100, 6, PamOrientation::Ngg).unwrap();
    assert_eq!(proto, merged[85..105].to_vec());

    // Negative in-frame distances keep the same boundary...
    let proto = protospacer(&merged, 100, -6, PamOrientation::Ngg).unwrap();
    assert_eq!(proto, merged[74..94].to_vec());

    // ...while off-frame ones shift it by one base.
    let proto = protospacer(&merged, 100, -7, PamOrientation::Ngg).unwrap();
    assert_eq!(proto, merged[72..92].to_vec());
}

#[test]
fn test_non_template_strand_windows() {
    let merged = merged();

    // CC-oriented protospacers are read downstream and reverse-complemented.
    let proto = protospacer(&merged, 100, 6, PamOrientation::Ccn).unwrap();
    assert_eq!(proto, dna::revcomp(&merged[108..128]));

    // Even distances off the codon frame start one base earlier.
    let proto = protospacer(&merged, 100, 4, PamOrientation::Ccn).unwrap();
    assert_eq!(proto, dna::revcomp(&merged[105..125]));

    let proto = protospacer(&merged, 100, 5, PamOrientation::Ccn).unwrap();
    assert_eq!(proto, dna::revcomp(&merged[107..127]));

    let proto = protospacer(&merged, 100, -5, PamOrientation::Ccn).unwrap();
    assert_eq!(proto, dna::revcomp(&merged[97..117]));
}

#[test]
fn test_protospacer_out_of_bounds() {
    let merged = merged();

    assert!(protospacer(&merged, 10, 0, PamOrientation::Ngg).is_none());
    assert!(protospacer(&merged, 190, 6, PamOrientation::Ccn).is_none());
}

#[test]
fn test_assemble_layout() {
    let arm = vec![b'a'; 85];
    let proto = vec![b'T'; 20];
    let oligo = assemble(&arm, &proto);

    assert_eq!(oligo.len(), 200);
    assert!(oligo.starts_with(SUB_LIBRARY_SPACER));
    assert!(oligo.contains(PJ23119_PROMOTER));
    assert!(oligo.ends_with("gttttagagctagaaatagcaagttaaaataaggctag"));
}

#[test]
fn test_target_strand_labels() {
    assert_eq!(
        TargetStrand::from_orientation(PamOrientation::Ccn).label(),
        "non template / coding strand"
    );
    assert_eq!(
        TargetStrand::from_orientation(PamOrientation::Ngg).label(),
        "template / non coding strand"
    );
}
