use bio::alphabets::dna;

use crate::constants::{CAS9_HANDLE, OLIGO_SPACER, PJ23119_PROMOTER, PROTOSPACER_LENGTH, SUB_LIBRARY_SPACER};
use crate::pam::PamOrientation;

/// Strand the protospacer base-pairs with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TargetStrand {
    /// CC-oriented PAM: guide targets the non-template (coding) strand.
    NonTemplate,
    /// NGG PAM: guide targets the template (non-coding) strand.
    Template,
}

impl TargetStrand {
    pub fn from_orientation(orientation: PamOrientation) -> TargetStrand {
        match orientation {
            PamOrientation::Ccn => TargetStrand::NonTemplate,
            PamOrientation::Ngg => TargetStrand::Template,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TargetStrand::NonTemplate => "non template / coding strand",
            TargetStrand::Template => "template / non coding strand",
        }
    }
}

fn slice(merged: &[u8], start: isize, end: isize) -> Option<&[u8]> {
    if start < 0 || end < start || end as usize > merged.len() {
        return None;
    }

    Some(&merged[start as usize..end as usize])
}

/// Extracts the 20-nt protospacer for a surviving design.
///
/// The window boundaries depend on the PAM orientation, the sign of the
/// distance and its parity; CC-oriented protospacers are read downstream
/// of the locus and reverse-complemented, NGG protospacers are read
/// upstream and used directly. `locus` is the mutation codon's offset in
/// the merged sequence.
pub fn protospacer(
    merged: &[u8],
    locus: usize,
    distance: isize,
    orientation: PamOrientation,
) -> Option<Vec<u8>> {
    let len = PROTOSPACER_LENGTH as isize;

    match orientation {
        PamOrientation::Ccn => {
            let window = if distance >= 0 {
                let pam = locus as isize - 1 + distance;
                if distance % 3 != 0 && distance % 2 == 0 {
                    slice(merged, pam + 2, pam + 2 + len)?
                } else {
                    slice(merged, pam + 3, pam + 3 + len)?
                }
            } else {
                let pam = locus as isize + distance;
                slice(merged, pam + 2, pam + 2 + len)?
            };

            Some(dna::revcomp(window))
        }
        PamOrientation::Ngg => {
            let window = if distance >= 0 {
                let pam = locus as isize - 1 + distance;
                slice(merged, pam - len, pam)?
            } else {
                let pam = locus as isize + distance;
                if distance % 3 == 0 {
                    slice(merged, pam - len, pam)?
                } else {
                    slice(merged, pam - len - 1, pam - 1)?
                }
            };

            Some(window.to_vec())
        }
    }
}

/// Final oligo: constant 5' adapter, disrupted homology arm, spacer,
/// constitutive promoter, protospacer and Cas9 handle.
pub fn assemble(arm: &[u8], protospacer: &[u8]) -> String {
    format!(
        "{}{}{}{}{}{}",
        SUB_LIBRARY_SPACER,
        String::from_utf8_lossy(arm),
        OLIGO_SPACER,
        PJ23119_PROMOTER,
        String::from_utf8_lossy(protospacer),
        CAS9_HANDLE
    )
}
