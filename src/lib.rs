// error_chain macro can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use(lazy_static)]
extern crate lazy_static;

pub mod args;
pub mod arm;
pub mod codon;
pub mod commands;
pub mod constants;
pub mod design;
pub mod errors;
pub mod gene;
pub mod genome;
pub mod mapper;
pub mod oligo;
pub mod pam;
pub mod progress;
pub mod substitution;
pub mod table;
