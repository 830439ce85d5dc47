use std::collections::HashMap;

/// One-letter to three-letter amino acid codes.
const ONE_TO_THREE: [(char, &str); 20] = [
    ('A', "ALA"),
    ('G', "GLY"),
    ('I', "ILE"),
    ('L', "LEU"),
    ('P', "PRO"),
    ('V', "VAL"),
    ('F', "PHE"),
    ('W', "TRP"),
    ('Y', "TYR"),
    ('D', "ASP"),
    ('E', "GLU"),
    ('R', "ARG"),
    ('H', "HIS"),
    ('K', "LYS"),
    ('S', "SER"),
    ('T', "THR"),
    ('C', "CYS"),
    ('M', "MET"),
    ('N', "ASN"),
    ('Q', "GLN"),
];

/// Synonymous codons per amino acid.
const AA_CODONS: [(&str, &[&str]); 20] = [
    ("ALA", &["GCT", "GCC", "GCA", "GCG"]),
    ("GLY", &["GGT", "GGC", "GGA", "GGG"]),
    ("ILE", &["ATT", "ATC", "ATA"]),
    ("LEU", &["CTT", "CTC", "CTA", "CTG", "TTG", "TTA"]),
    ("VAL", &["GTT", "GTC", "GTA", "GTG"]),
    ("PHE", &["TTT", "TTC"]),
    ("TRP", &["TGA", "TGG"]),
    ("TYR", &["TAT", "TAC"]),
    ("ASP", &["GAT", "GAC"]),
    ("GLU", &["GAA", "GAG"]),
    ("ARG", &["AGA", "AGG", "CGT", "CGC", "CGA", "CGG"]),
    ("HIS", &["CAT", "CAC"]),
    ("LYS", &["AAA", "AAG"]),
    ("SER", &["AGT", "AGC", "TCT", "TCC", "TCA", "TCG"]),
    ("THR", &["ACT", "ACC", "ACA", "ACG"]),
    ("CYS", &["TGT", "TGC"]),
    ("MET", &["ATG"]),
    ("ASN", &["AAT", "AAC"]),
    ("GLN", &["CAA", "CAG"]),
    ("PRO", &["CCT", "CCC", "CCA", "CCG"]),
];

/// Stop codons that disqualify a parent codon.
const STOP_PARENTS: [&str; 2] = ["TAA", "TAG"];

lazy_static! {
    static ref CODONS_BY_AA: HashMap<&'static str, &'static [&'static str]> =
        AA_CODONS.iter().cloned().collect();
    static ref THREE_BY_ONE: HashMap<char, &'static str> =
        ONE_TO_THREE.iter().cloned().collect();
}

pub fn three_letter(code: char) -> Option<&'static str> {
    THREE_BY_ONE.get(&code.to_ascii_uppercase()).copied()
}

pub fn codons_for(amino_acid: &str) -> Option<&'static [&'static str]> {
    CODONS_BY_AA.get(amino_acid).copied()
}

/// Reverse lookup: every amino acid whose codon list contains `codon`,
/// in table order. The table is not a strict partition, so more than one
/// name may be returned.
pub fn amino_acids_for(codon: &str) -> Vec<&'static str> {
    AA_CODONS
        .iter()
        .filter(|(_, codons)| codons.contains(&codon))
        .map(|(name, _)| *name)
        .collect()
}

pub fn is_stop_parent(codon: &str) -> bool {
    STOP_PARENTS.contains(&codon)
}

/// Positionwise mismatches between two codons.
pub fn mismatches(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}
