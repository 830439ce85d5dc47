use bio::alphabets::dna;
use bio_types::strand::Strand;

use crate::errors::*;
use crate::genome::GenomicRecord;

/// A gene's coding sequence merged with fixed-length flanks, normalized so
/// the coding strand reads 5' to 3'.
///
/// For reverse-strand genes the merged sequence is reverse-complemented,
/// which turns the clamped *downstream* genomic flank into the 5' flank;
/// `coding_start_offset` is always the length of whichever flank ends up
/// 5' of the start codon, so position arithmetic is identical for both
/// strands.
#[derive(Clone, Debug)]
pub struct GeneContext {
    pub gene_name: String,
    pub merged_sequence: Vec<u8>,
    pub strand: Strand,
    pub coding_start_offset: usize,
}

impl GeneContext {
    pub fn resolve(record: &GenomicRecord, name: &str, flank_length: usize) -> Result<GeneContext> {
        let feature = record
            .find_gene(name)
            .ok_or_else(|| ErrorKind::GeneNotFound(name.to_owned()))?;

        let sequence = &record.sequence;
        let up_start = feature.start.saturating_sub(flank_length);
        let down_end = usize::min(sequence.len(), feature.end + flank_length);
        let mut merged = sequence[up_start..down_end].to_vec();

        let reverse = match feature.strand {
            Strand::Reverse => true,
            Strand::Forward => false,
            // Carried-over heuristic for unannotated strands: a coding
            // sequence that does not open with ATG is read off the minus
            // strand.
            Strand::Unknown => !sequence[feature.start..feature.end].starts_with(b"ATG"),
        };

        let coding_start_offset = if reverse {
            down_end - feature.end
        } else {
            feature.start - up_start
        };

        if reverse {
            merged = dna::revcomp(&merged);
        }

        Ok(GeneContext {
            gene_name: name.to_owned(),
            merged_sequence: merged,
            strand: if reverse {
                Strand::Reverse
            } else {
                Strand::Forward
            },
            coding_start_offset,
        })
    }

    pub fn len(&self) -> usize {
        self.merged_sequence.len()
    }
}
