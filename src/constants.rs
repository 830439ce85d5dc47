/// Context added on each side of a gene's coding sequence (nt).
pub const FLANK_LENGTH: usize = 60;

/// Search radius around a mutation locus (nt each side).
pub const WINDOW_RADIUS: usize = 30;

/// Local index of the mutation locus within the scanned window.
pub const WINDOW_CENTER: isize = 29;

/// Length of the scanned window: WINDOW_RADIUS nt before the locus,
/// WINDOW_RADIUS + 3 nt after it (covers motifs starting at the far edge).
pub const WINDOW_LENGTH: usize = 2 * WINDOW_RADIUS + 3;

/// Homology arm extends this far on each side of the computed midpoint.
pub const ARM_HALF_WIDTH: usize = 42;

/// Full homology arm length (ARM_HALF_WIDTH * 2 + 1).
pub const ARM_LENGTH: usize = 85;

/// PAM candidates further than this from the locus cannot be disrupted;
/// the frame arithmetic is undefined beyond it.
pub const MAX_PAM_DISTANCE: isize = 56;

pub const PROTOSPACER_LENGTH: usize = 20;

pub const MIN_PROTOSPACER_LEN: usize = 20;
pub const MIN_OLIGO_LEN: usize = 150;

// Constant segments of the assembled oligo, 5' to 3'.
pub const SUB_LIBRARY_SPACER: &str = "TCCTCTGGCGGAAAGCCT";
pub const OLIGO_SPACER: &str = "GATC";
pub const PJ23119_PROMOTER: &str = "ttgacagctagctcagtcctaggtataatactagt";
pub const CAS9_HANDLE: &str = "gttttagagctagaaatagcaagttaaaataaggctag";
