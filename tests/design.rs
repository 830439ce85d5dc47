extern crate bio_types;
extern crate recodr;

use bio_types::strand::Strand;

use recodr::design::{self, OligoDesign};
use recodr::gene::GeneContext;
use recodr::genome::{GeneFeature, GenomicRecord};
use recodr::table::parse_mutation;

/// 400 nt chromosome with a forward gene at [100, 280): ATG start, ACC as
/// its fifth codon and CTG right behind it, everything else A.
fn forward_record() -> GenomicRecord {
    let mut sequence = vec![b'A'; 400];
    sequence[100..103].copy_from_slice(b"ATG");
    sequence[112..115].copy_from_slice(b"ACC");
    sequence[115..118].copy_from_slice(b"CTG");

    GenomicRecord::new(
        "chr",
        sequence,
        vec![GeneFeature {
            name: "aaeA".to_owned(),
            start: 100,
            end: 280,
            strand: Strand::Forward,
        }],
    )
}

#[test]
fn test_design_gene_threonine_to_serine() {
    let record = forward_record();
    let context = GeneContext::resolve(&record, "aaeA", 60).unwrap();
    let mutations = vec![parse_mutation("aaeA", "T5S").unwrap()];

    let report = design::design_gene(&context, &mutations);
    assert!(report.warnings.is_empty());
    assert_eq!(report.unplaceable, 0);
    assert_eq!(report.designs.len(), 4);

    // AGC and TCC recreate a CC dinucleotide across the splice junction
    // and are dropped; the other four serine codons survive.
    let children: Vec<_> = report
        .designs
        .iter()
        .map(|d| d.child_codon.as_str())
        .collect();
    assert_eq!(children, vec!["AGT", "TCT", "TCA", "TCG"]);

    let fragments: Vec<_> = report
        .designs
        .iter()
        .map(|d| d.mutated_pam.as_str())
        .collect();
    assert_eq!(fragments, vec!["TCT", "TCT", "ACT", "GCT"]);

    for design in &report.designs {
        assert_eq!(design.gene, "aaeA");
        assert_eq!(design.parent_aa, "THR");
        assert_eq!(design.parent_codon, "ACC");
        assert_eq!(design.aa_position, 5);
        assert_eq!(design.mutated_aa, "SER");
        assert_eq!(design.nt_position, 13);
        assert_eq!(design.distance, 3);
        assert_eq!(design.pam, "CCT");
        assert_eq!(design.target_strand.label(), "non template / coding strand");
        assert_eq!(design.protospacer, "TTTTTTTTTTTTTTTTTTTC");
        assert_eq!(design.homology_arm.len(), 85);
        assert_eq!(design.oligo.len(), 200);
        assert_eq!(&design.homology_arm[40..43], design.child_codon);
        assert_eq!(&design.homology_arm[43..46], "CTA");
    }
}

#[test]
fn test_design_gene_pam_at_locus() {
    // A PAM sitting on the mutation codon itself needs no disruption; the
    // PAM columns come back as dashes.
    let mut merged = vec![b'A'; 300];
    merged[72..75].copy_from_slice(b"GGA");
    let context = GeneContext {
        gene_name: "mdtA".to_owned(),
        merged_sequence: merged,
        strand: Strand::Forward,
        coding_start_offset: 60,
    };
    let mutations = vec![parse_mutation("mdtA", "G5V").unwrap()];

    let report = design::design_gene(&context, &mutations);
    assert_eq!(report.designs.len(), 4);

    let children: Vec<_> = report
        .designs
        .iter()
        .map(|d| d.child_codon.as_str())
        .collect();
    assert_eq!(children, vec!["GTT", "GTC", "GTA", "GTG"]);

    for design in &report.designs {
        assert_eq!(design.parent_aa, "GLY");
        assert_eq!(design.mutated_aa, "VAL");
        assert_eq!(design.distance, 0);
        assert_eq!(design.pam, "-");
        assert_eq!(design.mutated_pam, "-");
        assert_eq!(design.target_strand.label(), "template / non coding strand");
        assert_eq!(design.protospacer, "A".repeat(20));
    }
}

#[test]
fn test_design_gene_unmappable_position_warns() {
    let record = forward_record();
    let context = GeneContext::resolve(&record, "aaeA", 60).unwrap();
    let mutations = vec![parse_mutation("aaeA", "T500S").unwrap()];

    let report = design::design_gene(&context, &mutations);
    assert!(report.designs.is_empty());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("T500S"));
    // An unmappable mutation is a warning, not an unplaceable one.
    assert_eq!(report.unplaceable, 0);
}

#[test]
fn test_design_gene_no_pam_in_window() {
    // All-A context: the search window holds no NGG or CCN motif at all.
    let context = GeneContext {
        gene_name: "aaeA".to_owned(),
        merged_sequence: vec![b'A'; 300],
        strand: Strand::Forward,
        coding_start_offset: 60,
    };
    let mutations = vec![parse_mutation("aaeA", "K5R").unwrap()];

    let report = design::design_gene(&context, &mutations);
    assert!(report.designs.is_empty());
    assert!(report.warnings.is_empty());
    assert_eq!(report.unplaceable, 1);
}

#[test]
fn test_design_gene_is_deterministic() {
    let record = forward_record();
    let context = GeneContext::resolve(&record, "aaeA", 60).unwrap();
    let mutations = vec![parse_mutation("aaeA", "T5S").unwrap()];

    let first = design::design_gene(&context, &mutations);
    let second = design::design_gene(&context, &mutations);
    assert_eq!(first.designs, second.designs);
}

#[test]
fn test_missing_gene_report() {
    let report = design::GeneReport::missing("zzz");
    assert!(report.missing);
    assert!(report.designs.is_empty());
}

#[test]
fn test_exclusion_list() {
    assert!(design::is_excluded("CGG"));
    assert!(design::is_excluded("TGG"));
    assert!(design::is_excluded("CAT"));
    assert!(!design::is_excluded("TCT"));
    assert!(!design::is_excluded("-"));
}

#[test]
fn test_tsv_row_layout() {
    let record = forward_record();
    let context = GeneContext::resolve(&record, "aaeA", 60).unwrap();
    let mutations = vec![parse_mutation("aaeA", "T5S").unwrap()];
    let report = design::design_gene(&context, &mutations);

    let row = report.designs[0].tsv_row("1_aaeA");
    let fields: Vec<&str> = row.split('\t').collect();
    assert_eq!(fields.len(), OligoDesign::HEADER.split('\t').count());
    assert_eq!(fields[0], "1_aaeA");
    assert_eq!(fields[1], "aaeA");
    assert_eq!(fields[4], "5");
}
