use std::fmt::Debug;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use crate::codon;
use crate::errors::*;

/// A requested amino acid substitution, e.g. `T5S`.
#[derive(Clone, Debug, PartialEq)]
pub struct Mutation {
    pub gene: String,
    pub raw: String,
    pub aa_position: usize,
    pub parent: char,
    pub target: char,
}

/// Parses a compact mutation string: parent one-letter code, 1-based
/// amino acid position, target one-letter code.
pub fn parse_mutation(gene: &str, raw: &str) -> Option<Mutation> {
    let chars: Vec<char> = raw.trim().chars().collect();
    if chars.len() < 3 {
        return None;
    }

    let parent = chars[0].to_ascii_uppercase();
    let target = chars[chars.len() - 1].to_ascii_uppercase();
    codon::three_letter(parent)?;
    codon::three_letter(target)?;

    let position: String = chars[1..chars.len() - 1].iter().collect();
    let aa_position: usize = position.parse().ok()?;
    if aa_position == 0 {
        return None;
    }

    Some(Mutation {
        gene: gene.to_owned(),
        raw: raw.trim().to_owned(),
        aa_position,
        parent,
        target,
    })
}

pub struct MutationTable {
    pub mutations: Vec<Mutation>,
    pub skipped: Vec<String>,
}

/// Reads a tab-delimited mutation list with columns `gene` and `mutation`.
/// A header row is recognized by its first column; rows that cannot be
/// parsed are collected as warnings rather than aborting the run.
pub fn read_mutations<P: AsRef<Path> + Debug>(path: &P) -> Result<MutationTable> {
    let file = File::open(path).chain_err(|| format!("failed to open mutation table {:?}", path))?;
    let reader = BufReader::new(file);

    let mut table = MutationTable {
        mutations: Vec::new(),
        skipped: Vec::new(),
    };

    for (idx, line) in reader.lines().enumerate() {
        let line = line.chain_err(|| "error reading line from mutation table")?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if idx == 0 && fields[0].trim().eq_ignore_ascii_case("gene") {
            continue;
        }

        if fields.len() < 2 {
            table
                .skipped
                .push(format!("line {}: expected gene<TAB>mutation", idx + 1));
            continue;
        }

        match parse_mutation(fields[0].trim(), fields[1]) {
            Some(mutation) => table.mutations.push(mutation),
            None => table
                .skipped
                .push(format!("line {}: unparseable mutation {:?}", idx + 1, fields[1])),
        }
    }

    Ok(table)
}

impl MutationTable {
    /// Groups mutations by gene, preserving first-seen gene order.
    pub fn by_gene(&self) -> Vec<(String, Vec<Mutation>)> {
        let mut groups: Vec<(String, Vec<Mutation>)> = Vec::new();

        for mutation in &self.mutations {
            match groups.iter_mut().find(|(gene, _)| *gene == mutation.gene) {
                Some((_, list)) => list.push(mutation.clone()),
                None => groups.push((mutation.gene.clone(), vec![mutation.clone()])),
            }
        }

        groups
    }
}

pub fn open_file_or_stdout(file: &Option<String>) -> Result<Box<dyn Write>> {
    if let Some(path) = file {
        let handle =
            File::create(path).chain_err(|| format!("could not create output file {:?}", path))?;
        let writer = io::BufWriter::new(handle);

        Ok(Box::new(writer))
    } else {
        Ok(Box::new(io::stdout()))
    }
}
