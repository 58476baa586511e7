pub mod key;
pub mod sort;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use netsort_core::table::KeySpec;

#[derive(Parser)]
#[command(name = "netsort")]
#[command(about = "Sorts tables of network identifiers in human-expected order.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort delimited rows by one or more columns
    #[command(alias = "s")]
    Sort {
        /// Sort key as COLUMN[:TYPE]; repeatable, applied in order.
        /// COLUMN is a 0-based index or a header name; TYPE is one of
        /// port, ip, numeric, text
        #[arg(short, long = "key", default_value = "0")]
        keys: Vec<KeySpec>,
        /// Field delimiter
        #[arg(short, long, default_value_t = '\t')]
        delimiter: char,
        /// Treat the first row as a header and keep it first
        #[arg(long)]
        header: bool,
        /// Sort descending
        #[arg(short, long)]
        reverse: bool,
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// Print the sort key computed for each identifier
    #[command(alias = "k")]
    Key {
        /// Column type whose normalizer to apply
        #[arg(short = 't', long = "type", default_value = "auto")]
        kind: String,
        /// Identifiers to normalize
        values: Vec<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
