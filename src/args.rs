use clap::{App, Arg, ArgMatches, SubCommand};

use crate::constants::FLANK_LENGTH;
use crate::errors::*;

#[derive(Debug)]
pub struct DesignArgs {
    pub fasta: String,
    pub features: String,
    pub mutations: String,
    pub output: Option<String>,
    pub flank: usize,
    pub threads: usize,
}

#[derive(Debug)]
pub struct ScanArgs {
    pub fasta: String,
    pub features: String,
    pub mutations: String,
    pub flank: usize,
}

pub enum Args {
    Design(DesignArgs),
    Scan(ScanArgs),
    None,
}

fn flank_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("flank")
        .long("flank")
        .takes_value(true)
        .help("Flanking context added on each side of a gene (nt; default 60).")
}

fn design_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("design")
        .about("Design PAM-disrupting sgRNA-insert pairs for a mutation list")
        .arg(
            Arg::with_name("fasta")
                .help("Genome sequence in FASTA format.")
                .required(true),
        )
        .arg(
            Arg::with_name("features")
                .help("Gene features in BED format (name in column 4).")
                .required(true),
        )
        .arg(
            Arg::with_name("mutations")
                .help("Tab-delimited table of gene / mutation pairs (e.g. aaeA\\tT5S).")
                .required(true),
        )
        .arg(Arg::with_name("output").help("Output TSV (defaults to stdout)."))
        .arg(flank_arg())
        .arg(
            Arg::with_name("threads")
                .long("threads")
                .takes_value(true)
                .allow_hyphen_values(true)
                .number_of_values(1)
                .default_value("0")
                .help("Number of threads used for computation (0 for automatic)."),
        )
}

fn scan_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("scan")
        .about("List PAM candidates around each mutation without designing oligos")
        .arg(
            Arg::with_name("fasta")
                .help("Genome sequence in FASTA format.")
                .required(true),
        )
        .arg(
            Arg::with_name("features")
                .help("Gene features in BED format (name in column 4).")
                .required(true),
        )
        .arg(
            Arg::with_name("mutations")
                .help("Tab-delimited table of gene / mutation pairs.")
                .required(true),
        )
        .arg(flank_arg())
}

fn get_str<'a>(matches: &'a ArgMatches, key: &str) -> Result<&'a str> {
    match matches.value_of(key) {
        Some(value) => Ok(value),
        None => Err(format!("Required option {:?} not set", key).into()),
    }
}

fn get_string(matches: &ArgMatches, key: &str) -> Result<String> {
    get_str(matches, key).map(|v| v.into())
}

fn parse_usize(matches: &ArgMatches, key: &str) -> Result<usize> {
    let s = get_str(matches, key)?;

    match s.parse() {
        Ok(v) => Ok(v),
        Err(err) => Err(format!("Invalid --{} ({:?}) value: {}", key, s, err).into()),
    }
}

fn parse_flank(matches: &ArgMatches) -> Result<usize> {
    if matches.is_present("flank") {
        parse_usize(matches, "flank")
    } else {
        Ok(FLANK_LENGTH)
    }
}

pub fn parse_args() -> Result<Args> {
    let matches = App::new("recodr")
        .version("0.1.0")
        .subcommand(design_command())
        .subcommand(scan_command())
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("design") {
        Ok(Args::Design(DesignArgs {
            fasta: get_string(matches, "fasta")?,
            features: get_string(matches, "features")?,
            mutations: get_string(matches, "mutations")?,
            output: matches.value_of("output").map(|s| s.to_string()),
            flank: parse_flank(matches)?,
            threads: parse_usize(matches, "threads")?,
        }))
    } else if let Some(matches) = matches.subcommand_matches("scan") {
        Ok(Args::Scan(ScanArgs {
            fasta: get_string(matches, "fasta")?,
            features: get_string(matches, "features")?,
            mutations: get_string(matches, "mutations")?,
            flank: parse_flank(matches)?,
        }))
    } else {
        eprintln!("{}", matches.usage());

        Ok(Args::None)
    }
}
