use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mapgrid")]
#[command(about = "Extract map grid metadata from War Thunder level files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the levels directory and generate the database outputs
    Extract {
        /// War Thunder installation root (probed automatically when omitted)
        #[arg(env = "WT_DIR")]
        root: Option<PathBuf>,

        /// JSON database output file
        #[arg(long = "json", default_value = "wt_maps_database.json")]
        json_output: PathBuf,

        /// Generated Rust source output file
        #[arg(long = "rust", default_value = "map_database_generated.rs")]
        rust_output: PathBuf,

        /// Fail instead of prompting when no installation is found
        #[arg(long = "no-prompt")]
        no_prompt: bool,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },
}
