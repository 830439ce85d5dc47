use crate::arm;
use crate::codon;
use crate::constants::{MIN_OLIGO_LEN, MIN_PROTOSPACER_LEN};
use crate::gene::GeneContext;
use crate::mapper;
use crate::oligo;
use crate::oligo::TargetStrand;
use crate::pam;
use crate::substitution;
use crate::table::Mutation;

/// Codons that would leave a cuttable PAM behind; designs whose disrupted
/// fragment matches one of these are rejected.
pub const PAM_EXCLUSION: [&str; 22] = [
    "AAG", "AGA", "AGC", "AGG", "ATG", "CAG", "CGA", "CGC", "CGG", "CTG", "GAG", "GCG", "GGA",
    "GGC", "GGG", "GGT", "GTG", "TAG", "TGA", "TGC", "TGG", "CAT",
];

pub fn is_excluded(fragment: &str) -> bool {
    PAM_EXCLUSION.contains(&fragment)
}

/// One surviving sgRNA-insert pair.
#[derive(Clone, Debug, PartialEq)]
pub struct OligoDesign {
    pub gene: String,
    pub parent_aa: String,
    pub parent_codon: String,
    pub aa_position: usize,
    pub mutated_aa: String,
    pub child_codon: String,
    /// 1-based nucleotide position within the gene.
    pub nt_position: usize,
    pub distance: isize,
    pub pam: String,
    pub mutated_pam: String,
    pub homology_arm: String,
    pub target_strand: TargetStrand,
    pub protospacer: String,
    pub oligo: String,
}

impl OligoDesign {
    pub const HEADER: &'static str = "reference\tgene\tparent aa\tparent codon\taa position\t\
                                      mutated aa\tchild codon\tnt position\tdist mut pam\tpam\t\
                                      mutated pam\thomology arm\ttarget strand of protospacer\t\
                                      protospacer\toligo";

    pub fn tsv_row(&self, reference: &str) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            reference,
            self.gene,
            self.parent_aa,
            self.parent_codon,
            self.aa_position,
            self.mutated_aa,
            self.child_codon,
            self.nt_position,
            self.distance,
            self.pam,
            self.mutated_pam,
            self.homology_arm,
            self.target_strand.label(),
            self.protospacer,
            self.oligo
        )
    }
}

/// Outcome of processing one gene's mutation list.
#[derive(Clone, Debug, Default)]
pub struct GeneReport {
    pub gene: String,
    pub missing: bool,
    pub designs: Vec<OligoDesign>,
    pub warnings: Vec<String>,
    /// Mutations that produced no surviving design despite being mappable.
    pub unplaceable: usize,
}

impl GeneReport {
    pub fn missing(gene: &str) -> GeneReport {
        GeneReport {
            gene: gene.to_owned(),
            missing: true,
            ..GeneReport::default()
        }
    }
}

fn resolve_amino_acids(codon: &str) -> String {
    codon::amino_acids_for(codon).join(", ")
}

/// Runs the full design pipeline over one gene context: window mapping,
/// PAM scan, arm adaptation, PAM disruption, exclusion filtering and
/// oligo assembly. Per-mutation failures are demoted to warnings.
pub fn design_gene(context: &GeneContext, mutations: &[Mutation]) -> GeneReport {
    let mut report = GeneReport {
        gene: context.gene_name.clone(),
        ..GeneReport::default()
    };

    for mutation in mutations {
        let produced = match design_mutation(context, mutation, &mut report) {
            Some(produced) => produced,
            None => continue,
        };

        if produced == 0 {
            report.unplaceable += 1;
        }
    }

    report
}

fn design_mutation(
    context: &GeneContext,
    mutation: &Mutation,
    report: &mut GeneReport,
) -> Option<usize> {
    let target_aa = match codon::three_letter(mutation.target) {
        Some(target_aa) => target_aa,
        None => {
            report.warnings.push(format!(
                "skipping {}: unknown amino acid code {:?}",
                mutation.raw, mutation.target
            ));
            return None;
        }
    };

    let window = match mapper::search_window(context, mutation.aa_position) {
        Ok(window) => window,
        Err(_) => {
            report.warnings.push(format!(
                "skipping {}: position {} outside the searchable region of {}",
                mutation.raw, mutation.aa_position, context.gene_name
            ));
            return None;
        }
    };

    let merged = &context.merged_sequence;
    let locus = window.center;
    let parent_codon = mapper::parent_codon(context, locus);
    let mut produced = 0;

    for candidate in pam::scan(window.sequence(merged)) {
        for adapted in arm::adapt(&candidate, locus, merged, &parent_codon, target_aa) {
            let disruption = match substitution::disrupt(&adapted) {
                Some(disruption) => disruption,
                None => continue,
            };

            if is_excluded(&disruption.pam_fragment) {
                continue;
            }

            let protospacer =
                match oligo::protospacer(merged, locus, adapted.distance, adapted.orientation) {
                    Some(protospacer) => protospacer,
                    None => continue,
                };

            let oligo = oligo::assemble(&disruption.arm, &protospacer);
            if protospacer.len() < MIN_PROTOSPACER_LEN || oligo.len() < MIN_OLIGO_LEN {
                continue;
            }

            let parent_aa = resolve_amino_acids(&adapted.parent_codon);
            let mutated_aa = resolve_amino_acids(&adapted.child_codon);
            if parent_aa == mutated_aa || codon::is_stop_parent(&adapted.parent_codon) {
                continue;
            }

            // The AtLocus no-op case reports the PAM columns as dashes.
            let pam = if disruption.pam_fragment == "-" {
                "-".to_owned()
            } else {
                adapted.motif_str()
            };

            report.designs.push(OligoDesign {
                gene: context.gene_name.clone(),
                parent_aa,
                parent_codon: adapted.parent_codon.clone(),
                aa_position: mutation.aa_position,
                mutated_aa,
                child_codon: adapted.child_codon.clone(),
                nt_position: locus - context.coding_start_offset + 1,
                distance: adapted.distance,
                pam,
                mutated_pam: disruption.pam_fragment,
                homology_arm: String::from_utf8_lossy(&disruption.arm).into_owned(),
                target_strand: TargetStrand::from_orientation(adapted.orientation),
                protospacer: String::from_utf8_lossy(&protospacer).into_owned(),
                oligo,
            });
            produced += 1;
        }
    }

    Some(produced)
}
