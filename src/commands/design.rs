use std::io::Write;

use rayon::prelude::*;

use crate::args::DesignArgs;
use crate::design;
use crate::design::{GeneReport, OligoDesign};
use crate::errors::*;
use crate::gene::GeneContext;
use crate::genome::GenomicRecord;
use crate::progress;
use crate::table;
use crate::table::Mutation;

fn process_gene(record: &GenomicRecord, gene: &str, mutations: &[Mutation], flank: usize) -> GeneReport {
    match GeneContext::resolve(record, gene, flank) {
        Ok(context) => design::design_gene(&context, mutations),
        Err(Error(ErrorKind::GeneNotFound(_), _)) => GeneReport::missing(gene),
        Err(err) => {
            let mut report = GeneReport::missing(gene);
            report.warnings.push(format!("{}", err));
            report
        }
    }
}

fn print_summary(reports: &[GeneReport]) {
    let missing: Vec<&str> = reports
        .iter()
        .filter(|r| r.missing)
        .map(|r| r.gene.as_str())
        .collect();

    if !missing.is_empty() {
        eprintln!("\nGenes not found in genome ({}):", missing.len());
        for gene in missing {
            eprintln!("  {}", gene);
        }
    }

    eprintln!("\nDesigns per gene:");
    for report in reports.iter().filter(|r| !r.missing) {
        eprintln!(
            "  {}: {} designs ({} mutations without a viable PAM)",
            report.gene,
            report.designs.len(),
            report.unplaceable
        );
    }
}

pub fn main(args: &DesignArgs) -> Result<()> {
    ::rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .chain_err(|| "failed to build thread pool")?;

    eprintln!("Reading genome from {:?}", args.fasta);
    let record = GenomicRecord::from_files(&args.fasta, &args.features)?;
    eprintln!("  {} gene features loaded.", record.features.len());

    eprintln!("Reading mutations from {:?}", args.mutations);
    let table = table::read_mutations(&args.mutations)?;
    eprintln!("  {} mutations loaded.", table.mutations.len());
    for warning in &table.skipped {
        eprintln!("WARNING: {}", warning);
    }

    let genes = table.by_gene();
    let bar = progress::bar(genes.len(), "designing: ");

    // Genes are independent; reports are collected back in input order so
    // output is deterministic regardless of thread count.
    let reports: Vec<GeneReport> = genes
        .par_iter()
        .map(|(gene, mutations)| {
            let report = process_gene(&record, gene, mutations, args.flank);
            bar.inc(1);
            report
        })
        .collect();

    bar.finish();

    let mut out = table::open_file_or_stdout(&args.output)?;
    writeln!(out, "{}", OligoDesign::HEADER).chain_err(|| "failed to write output header")?;

    let mut row_index = 0;
    for report in &reports {
        for warning in &report.warnings {
            eprintln!("WARNING: {}", warning);
        }

        for design in &report.designs {
            let reference = format!("{}_{}", row_index, design.gene);
            writeln!(out, "{}", design.tsv_row(&reference))
                .chain_err(|| "failed to write output row")?;
            row_index += 1;
        }
    }

    print_summary(&reports);

    Ok(())
}
