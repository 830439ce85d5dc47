use crate::args::ScanArgs;
use crate::errors::*;
use crate::gene::GeneContext;
use crate::genome::GenomicRecord;
use crate::mapper;
use crate::pam;
use crate::pam::PamOrientation;
use crate::substitution;
use crate::table;

/// Prints the PAM candidates around each mutation, with their distance and
/// substitution case, without running the design pipeline. Intended for
/// inspecting why a mutation yields few or no designs.
pub fn main(args: &ScanArgs) -> Result<()> {
    eprintln!("Reading genome from {:?}", args.fasta);
    let record = GenomicRecord::from_files(&args.fasta, &args.features)?;

    eprintln!("Reading mutations from {:?}", args.mutations);
    let table = table::read_mutations(&args.mutations)?;
    for warning in &table.skipped {
        eprintln!("WARNING: {}", warning);
    }

    println!("gene\tmutation\tmotif\torientation\tdistance\tcase");

    for (gene, mutations) in table.by_gene() {
        let context = match GeneContext::resolve(&record, &gene, args.flank) {
            Ok(context) => context,
            Err(Error(ErrorKind::GeneNotFound(_), _)) => {
                eprintln!("WARNING: gene {:?} not found in genome", gene);
                continue;
            }
            Err(err) => return Err(err),
        };

        for mutation in &mutations {
            let window = match mapper::search_window(&context, mutation.aa_position) {
                Ok(window) => window,
                Err(err) => {
                    eprintln!("WARNING: {}", err);
                    continue;
                }
            };

            for candidate in pam::scan(window.sequence(&context.merged_sequence)) {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{:?}",
                    gene,
                    mutation.raw,
                    candidate.motif_str(),
                    match candidate.orientation {
                        PamOrientation::Ngg => "NGG",
                        PamOrientation::Ccn => "CCN",
                    },
                    candidate.distance,
                    substitution::classify(candidate.distance, candidate.orientation),
                );
            }
        }
    }

    Ok(())
}
