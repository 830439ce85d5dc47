use crate::constants::{WINDOW_LENGTH, WINDOW_RADIUS};
use crate::errors::*;
use crate::gene::GeneContext;

/// Fixed-radius region of the merged sequence centered on a mutation locus.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchWindow {
    pub center: usize,
}

impl SearchWindow {
    pub fn start(&self) -> usize {
        self.center - WINDOW_RADIUS
    }

    /// The scanned slice: WINDOW_RADIUS nt before the locus and
    /// WINDOW_RADIUS + 3 nt after it.
    pub fn sequence<'a>(&self, merged: &'a [u8]) -> &'a [u8] {
        &merged[self.start()..self.start() + WINDOW_LENGTH]
    }
}

/// Nucleotide offset of a 1-based amino acid position within the merged
/// sequence.
pub fn nt_offset(context: &GeneContext, aa_position: usize) -> usize {
    (aa_position - 1) * 3 + context.coding_start_offset
}

/// Inverse of `nt_offset`.
pub fn aa_position(context: &GeneContext, nt_offset: usize) -> usize {
    (nt_offset - context.coding_start_offset) / 3 + 1
}

pub fn search_window(context: &GeneContext, aa_position: usize) -> Result<SearchWindow> {
    if aa_position == 0 {
        return Err(
            ErrorKind::PositionOutOfRange(context.gene_name.clone(), aa_position).into(),
        );
    }

    let center = nt_offset(context, aa_position);
    if center < WINDOW_RADIUS || center + WINDOW_LENGTH - WINDOW_RADIUS > context.len() {
        return Err(
            ErrorKind::PositionOutOfRange(context.gene_name.clone(), aa_position).into(),
        );
    }

    Ok(SearchWindow { center })
}

/// The literal codon at an offset of the unmodified merged sequence.
pub fn parent_codon(context: &GeneContext, nt_offset: usize) -> String {
    String::from_utf8_lossy(&context.merged_sequence[nt_offset..nt_offset + 3]).into_owned()
}
