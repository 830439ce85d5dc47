use std::fmt::Debug;
use std::path::Path;

use bio::io::bed;
use bio::io::fasta;
use bio_types::strand::Strand;

use crate::errors::*;

#[derive(Clone, Debug)]
pub struct GeneFeature {
    pub name: String,
    pub start: usize,
    pub end: usize,
    pub strand: Strand,
}

/// A reference sequence plus its annotated gene features.
#[derive(Clone, Debug)]
pub struct GenomicRecord {
    pub name: String,
    pub sequence: Vec<u8>,
    pub features: Vec<GeneFeature>,
}

impl GenomicRecord {
    pub fn new(name: &str, sequence: Vec<u8>, features: Vec<GeneFeature>) -> GenomicRecord {
        GenomicRecord {
            name: name.to_owned(),
            sequence,
            features,
        }
    }

    /// First feature whose name matches; genes are expected to be unique.
    pub fn find_gene(&self, name: &str) -> Option<&GeneFeature> {
        self.features.iter().find(|feature| feature.name == name)
    }

    /// Loads the first FASTA record and its gene features from a BED file
    /// (name in column 4, strand in column 6; '.' or absent means unknown).
    pub fn from_files<P: AsRef<Path> + Debug>(fasta_path: &P, bed_path: &P) -> Result<GenomicRecord> {
        let reader = fasta::Reader::from_file(fasta_path)
            .chain_err(|| format!("failed to open FASTA file {:?}", fasta_path))?;

        let record = match reader.records().next() {
            Some(record) => record.chain_err(|| "failed to read FASTA record")?,
            None => return Err(format!("no sequences in FASTA file {:?}", fasta_path).into()),
        };
        record.check().map_err(|v| ErrorKind::Msg(v.into()))?;
        let sequence = record.seq().to_ascii_uppercase();

        let mut beds = bed::Reader::from_file(bed_path)
            .chain_err(|| format!("failed to open BED file {:?}", bed_path))?;

        let mut features = Vec::new();
        for bed_record in beds.records() {
            let bed_record = bed_record.chain_err(|| "failed to read BED record")?;
            let name = match bed_record.name() {
                Some(name) => name.to_owned(),
                None => return Err(format!("unnamed feature in BED file {:?}", bed_path).into()),
            };

            let strand = match bed_record.aux(5) {
                Some("+") => Strand::Forward,
                Some("-") => Strand::Reverse,
                _ => Strand::Unknown,
            };

            features.push(GeneFeature {
                name,
                start: bed_record.start() as usize,
                end: bed_record.end() as usize,
                strand,
            });
        }

        Ok(GenomicRecord::new(record.id(), sequence, features))
    }
}
