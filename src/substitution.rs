use std::collections::HashMap;

use crate::arm::AdaptedArm;
use crate::constants::MAX_PAM_DISTANCE;
use crate::pam::PamOrientation;

// Synonymous substitution tables. Keys are codons overlapping a PAM; the
// mapped codon encodes the same amino acid but breaks the motif. Which
// table applies, and where the codon window sits relative to the mutation
// codon, depends on the candidate's distance class.

lazy_static! {
    /// The PAM motif is itself an in-frame codon (shift 0).
    static ref SHIFT0: HashMap<&'static str, &'static str> =
        [("CGG", "CGT"), ("AGG", "AGA"), ("GGG", "GGT")]
            .iter()
            .cloned()
            .collect();

    /// Codon ends one base into the motif (NNG / shift 1).
    static ref NNG: HashMap<&'static str, &'static str> = [
        ("TTG", "TTA"),
        ("CTG", "CTA"),
        ("GTG", "GTT"),
        ("TCG", "TCA"),
        ("ACG", "ACT"),
        ("GCG", "GCA"),
        ("CAG", "CAA"),
        ("AAG", "AAA"),
        ("GAG", "GAA"),
        ("CGG", "CGA"),
        ("AGG", "AGA"),
        ("GGG", "GGA"),
    ]
    .iter()
    .cloned()
    .collect();

    /// CCN counterpart of `NNG`.
    static ref NCC: HashMap<&'static str, &'static str> =
        [("TCC", "TCT"), ("ACC", "ACT"), ("GCC", "GCA")]
            .iter()
            .cloned()
            .collect();

    /// Codon ends two bases into a downstream CC motif (shift +2).
    static ref NNC: HashMap<&'static str, &'static str> = [
        ("TTC", "TTT"),
        ("CTC", "CTT"),
        ("ATC", "ATT"),
        ("GTC", "GTA"),
        ("TCC", "TCT"),
        ("ACC", "ACA"),
        ("GCC", "GCA"),
        ("TAC", "TAT"),
        ("CAC", "CAT"),
        ("AAC", "AAT"),
        ("GAC", "GAT"),
        ("TGC", "TGT"),
        ("CGC", "CGA"),
        ("AGC", "AGT"),
        ("GGC", "GGT"),
    ]
    .iter()
    .cloned()
    .collect();

    /// Codon opens an upstream CC motif (shift +2, negative distances).
    static ref CNN: HashMap<&'static str, &'static str> =
        [("CTA", "TTA"), ("CTG", "TTG"), ("CGA", "AGA"), ("CGG", "AGG")]
            .iter()
            .cloned()
            .collect();
}

/// Frame/parity classes of a PAM candidate relative to the mutation codon.
/// Each class fixes the codon window to rewrite and the applicable table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PamCase {
    /// distance == 3: the codon immediately 3' of the mutation.
    AdjacentCodon,
    /// distance > 2, multiple of 3, CC-oriented motif.
    DownstreamInFrame,
    /// distance > 2, multiple of 3, NGG motif, within 30 nt.
    DownstreamNearOffset,
    /// distance > 2, multiple of 3, NGG motif, beyond 30 nt.
    DownstreamFar,
    /// distance < 0, multiple of 3 (CC-oriented motifs only).
    UpstreamInFrame,
    /// distance < 0, not a multiple of 3; resolved further by parity.
    UpstreamOffFrame,
    /// distance == 0: the motif overlaps the mutation codon itself.
    AtLocus,
    /// No defined substitution for this distance.
    Ineligible,
}

pub fn classify(distance: isize, orientation: PamOrientation) -> PamCase {
    if distance.abs() >= MAX_PAM_DISTANCE {
        PamCase::Ineligible
    } else if distance == 3 {
        PamCase::AdjacentCodon
    } else if distance == 0 {
        PamCase::AtLocus
    } else if distance > 2 && distance % 3 == 0 {
        if orientation == PamOrientation::Ccn {
            PamCase::DownstreamInFrame
        } else if distance <= 30 {
            PamCase::DownstreamNearOffset
        } else {
            PamCase::DownstreamFar
        }
    } else if distance < 0 {
        if distance % 3 == 0 {
            PamCase::UpstreamInFrame
        } else {
            PamCase::UpstreamOffFrame
        }
    } else {
        PamCase::Ineligible
    }
}

/// A successfully neutralized arm. For the `AtLocus` no-op case the PAM
/// fragment and codon are reported as "-".
#[derive(Clone, Debug, PartialEq)]
pub struct Disruption {
    pub arm: Vec<u8>,
    pub pam_fragment: String,
    pub codon: String,
}

fn codon_at(arm: &[u8], start: isize) -> Option<String> {
    if start < 0 || start as usize + 3 > arm.len() {
        return None;
    }
    let start = start as usize;

    Some(String::from_utf8_lossy(&arm[start..start + 3]).to_ascii_uppercase())
}

fn spliced(arm: &[u8], start: isize, substitute: &str) -> Option<Vec<u8>> {
    if start < 0 || start as usize + 3 > arm.len() {
        return None;
    }
    let start = start as usize;

    let mut arm = arm.to_vec();
    arm[start..start + 3].copy_from_slice(substitute.as_bytes());
    Some(arm)
}

fn lookup(tables: &[&HashMap<&'static str, &'static str>], key: &str) -> Option<&'static str> {
    tables.iter().find_map(|table| table.get(key).copied())
}

/// distance == 3: rewrite the codon at `pos + 3`, then verify that the
/// recombined mutation-codon/substitute junction contains neither GG nor
/// CC. The disrupted fragment is the junction's central triplet.
fn disrupt_adjacent(adapted: &AdaptedArm, pos: isize) -> Option<Disruption> {
    let key = codon_at(&adapted.arm, pos + 3)?;
    let substitute = lookup(&[&*NNG, &*NCC], &key)?;

    let junction = format!("{}{}", codon_at(&adapted.arm, pos)?, substitute);
    if junction.contains("GG") || junction.contains("CC") {
        return None;
    }

    Some(Disruption {
        arm: spliced(&adapted.arm, pos + 3, substitute)?,
        pam_fragment: junction[2..5].to_owned(),
        codon: substitute.to_owned(),
    })
}

/// Rewrite the codon ending at the motif (window `[pos+d-3, pos+d)`); the
/// fragment keeps the motif tail behind the substitute's last base.
fn disrupt_downstream_in_frame(adapted: &AdaptedArm, pos: isize) -> Option<Disruption> {
    let start = pos + adapted.distance - 3;
    let key = codon_at(&adapted.arm, start)?;
    let substitute = NNC.get(key.as_str())?;

    Some(Disruption {
        arm: spliced(&adapted.arm, start, substitute)?,
        pam_fragment: format!(
            "{}{}",
            &substitute[2..],
            String::from_utf8_lossy(&adapted.motif[1..])
        ),
        codon: (*substitute).to_owned(),
    })
}

/// Key codon and splice window shifted relative to the motif; the fragment
/// is the substitute's tail plus the motif's final base.
fn disrupt_shifted_window(adapted: &AdaptedArm, key_start: isize, splice_start: isize, tables: &[&HashMap<&'static str, &'static str>]) -> Option<Disruption> {
    let key = codon_at(&adapted.arm, key_start)?;
    let substitute = lookup(tables, &key)?;

    Some(Disruption {
        arm: spliced(&adapted.arm, splice_start, substitute)?,
        pam_fragment: format!("{}{}", &substitute[1..], adapted.motif[2] as char),
        codon: substitute.to_owned(),
    })
}

/// The motif is itself a rewritable codon (shift 0).
fn disrupt_shift0(adapted: &AdaptedArm, pos: isize) -> Option<Disruption> {
    let substitute = SHIFT0.get(adapted.motif_str().as_str())?;

    Some(Disruption {
        arm: spliced(&adapted.arm, pos + adapted.distance - 1, substitute)?,
        pam_fragment: (*substitute).to_owned(),
        codon: (*substitute).to_owned(),
    })
}

/// distance < 0, in frame: only CC motifs are rewritable, via the codon
/// opening the motif.
fn disrupt_upstream_in_frame(adapted: &AdaptedArm, pos: isize) -> Option<Disruption> {
    if adapted.orientation != PamOrientation::Ccn {
        return None;
    }

    let start = pos + adapted.distance;
    let key = codon_at(&adapted.arm, start)?;
    let substitute = CNN.get(key.as_str())?;

    Some(Disruption {
        arm: spliced(&adapted.arm, start, substitute)?,
        pam_fragment: format!("{}{}", adapted.motif[0] as char, &substitute[..2]),
        codon: (*substitute).to_owned(),
    })
}

/// distance < 0, off frame: parity decides whether the motif falls on a
/// codon boundary (shift 0) or one base inside a codon (shift 1).
fn disrupt_upstream_off_frame(adapted: &AdaptedArm, pos: isize) -> Option<Disruption> {
    let d = adapted.distance;
    let odd = d.rem_euclid(2) == 1;
    let on_boundary = if odd { (d + 2) % 3 == 0 } else { (d - 2) % 3 != 0 };

    if on_boundary {
        disrupt_shift0(adapted, pos)
    } else {
        disrupt_shifted_window(adapted, pos + d - 2, pos + d - 2, &[&*NNG, &*NCC])
    }
}

/// distance == 0: no substitution is possible, but none may be needed. If
/// the 8-nt region around the mutation codon is free of GG/CC the arm is
/// accepted unmodified.
fn disrupt_at_locus(adapted: &AdaptedArm, pos: isize) -> Option<Disruption> {
    let start = pos - 2;
    if start < 0 || start as usize + 8 > adapted.arm.len() {
        return None;
    }
    let start = start as usize;

    let local = adapted.arm[start..start + 8].to_ascii_lowercase();
    let local = String::from_utf8_lossy(&local).into_owned();
    if local.contains("gg") || local.contains("cc") {
        return None;
    }

    Some(Disruption {
        arm: adapted.arm.clone(),
        pam_fragment: "-".to_owned(),
        codon: "-".to_owned(),
    })
}

/// Attempts to neutralize the candidate's PAM without changing the encoded
/// amino acid. At most one disruption is produced per adapted arm; a
/// missing table entry or out-of-bounds window yields None, never an
/// error.
pub fn disrupt(adapted: &AdaptedArm) -> Option<Disruption> {
    let pos = adapted.splice_at as isize;
    let d = adapted.distance;

    match classify(d, adapted.orientation) {
        PamCase::AdjacentCodon => disrupt_adjacent(adapted, pos),
        PamCase::DownstreamInFrame => disrupt_downstream_in_frame(adapted, pos),
        PamCase::DownstreamNearOffset => {
            disrupt_shifted_window(adapted, pos + d, pos + d - 2, &[&*NCC, &*NNG])
        }
        PamCase::DownstreamFar => disrupt_shift0(adapted, pos),
        PamCase::UpstreamInFrame => disrupt_upstream_in_frame(adapted, pos),
        PamCase::UpstreamOffFrame => disrupt_upstream_off_frame(adapted, pos),
        PamCase::AtLocus => disrupt_at_locus(adapted, pos),
        PamCase::Ineligible => None,
    }
}

impl AdaptedArm {
    pub fn motif_str(&self) -> String {
        String::from_utf8_lossy(&self.motif).into_owned()
    }
}
