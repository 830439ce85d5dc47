use crate::constants::WINDOW_CENTER;

/// Orientation of a PAM-like motif relative to the scanned strand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PamOrientation {
    /// `NGG` read on the forward strand; the guide targets the template
    /// (non-coding) strand.
    Ngg,
    /// `CCN`, the reverse-strand PAM seen on the forward read; the guide
    /// targets the non-template (coding) strand.
    Ccn,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PamCandidate {
    pub motif: [u8; 3],
    pub orientation: PamOrientation,
    pub window_offset: usize,
    /// Offset of the motif from the window's own center index. Negative
    /// distances lie 5' of the mutation locus.
    pub distance: isize,
}

impl PamCandidate {
    fn new(window: &[u8], offset: usize, orientation: PamOrientation) -> PamCandidate {
        let mut motif = [0u8; 3];
        motif.copy_from_slice(&window[offset..offset + 3]);

        PamCandidate {
            motif,
            orientation,
            window_offset: offset,
            distance: offset as isize - WINDOW_CENTER,
        }
    }

    pub fn motif_str(&self) -> String {
        String::from_utf8_lossy(&self.motif).into_owned()
    }
}

/// Exhaustive, overlapping scan for `NGG` and `CCN` motifs. All `NGG`
/// matches are reported first, then all `CCN` matches, each in ascending
/// offset order; the order is part of the output contract.
pub fn scan(window: &[u8]) -> Vec<PamCandidate> {
    let mut candidates = Vec::new();

    for (offset, triplet) in window.windows(3).enumerate() {
        if triplet[1] == b'G' && triplet[2] == b'G' {
            candidates.push(PamCandidate::new(window, offset, PamOrientation::Ngg));
        }
    }

    for (offset, triplet) in window.windows(3).enumerate() {
        if triplet[0] == b'C' && triplet[1] == b'C' {
            candidates.push(PamCandidate::new(window, offset, PamOrientation::Ccn));
        }
    }

    candidates
}
