use crate::codon;
use crate::constants::{ARM_HALF_WIDTH, ARM_LENGTH};
use crate::pam::{PamCandidate, PamOrientation};

/// A homology arm with one synonymous mutant codon spliced in, still
/// carrying the PAM candidate it was derived from. The arm is lower-case
/// except for the mutant codon.
#[derive(Clone, Debug, PartialEq)]
pub struct AdaptedArm {
    pub motif: [u8; 3],
    pub orientation: PamOrientation,
    pub distance: isize,
    pub arm: Vec<u8>,
    pub parent_codon: String,
    pub child_codon: String,
    /// Index of the mutation codon within the arm.
    pub splice_at: usize,
}

/// Half the distance, rounded towards the PAM: floor for candidates 5' of
/// the locus, ceil for candidates 3' of it. The asymmetry is inherited
/// from the reference protocol.
fn centering_shift(distance: isize) -> isize {
    if distance < 0 {
        distance.div_euclid(2)
    } else {
        (distance + 1).div_euclid(2)
    }
}

/// Arm midpoint between the mutation locus and the PAM candidate.
pub fn midpoint(locus: usize, distance: isize) -> isize {
    locus as isize + centering_shift(distance)
}

/// Index of the mutation codon within the arm, for a given distance.
pub fn splice_point(distance: isize) -> isize {
    ARM_HALF_WIDTH as isize - centering_shift(distance)
}

/// Extracts the lower-cased 85-nt arm centered on the midpoint, or None
/// if it would run past the merged sequence bounds.
pub fn extract(merged: &[u8], locus: usize, distance: isize) -> Option<Vec<u8>> {
    let center = midpoint(locus, distance);
    let start = center - ARM_HALF_WIDTH as isize;
    let end = start + ARM_LENGTH as isize;

    if start < 0 || end as usize > merged.len() {
        return None;
    }

    Some(merged[start as usize..end as usize].to_ascii_lowercase())
}

/// Builds one adapted arm per synonymous codon of the target amino acid
/// that differs from the parent codon in 1 to 3 positions. Returns an
/// empty list when the arm cannot be extracted.
pub fn adapt(
    candidate: &PamCandidate,
    locus: usize,
    merged: &[u8],
    parent_codon: &str,
    target_aa: &str,
) -> Vec<AdaptedArm> {
    let template = match extract(merged, locus, candidate.distance) {
        Some(arm) => arm,
        None => return Vec::new(),
    };

    let splice_at = splice_point(candidate.distance);
    if splice_at < 0 || splice_at as usize + 3 > template.len() {
        return Vec::new();
    }
    let splice_at = splice_at as usize;

    let child_codons = match codon::codons_for(target_aa) {
        Some(codons) => codons,
        None => return Vec::new(),
    };

    let mut adapted = Vec::new();
    for child in child_codons {
        let mismatches = codon::mismatches(parent_codon, child);
        if mismatches < 1 || mismatches > 3 {
            continue;
        }

        let mut arm = template.clone();
        arm[splice_at..splice_at + 3].copy_from_slice(child.as_bytes());

        adapted.push(AdaptedArm {
            motif: candidate.motif,
            orientation: candidate.orientation,
            distance: candidate.distance,
            arm,
            parent_codon: parent_codon.to_owned(),
            child_codon: (*child).to_owned(),
            splice_at,
        });
    }

    adapted
}
