//! CLI definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// XL compiler inspection commands for LLDB
#[derive(Parser, Debug)]
#[command(name = "xlcmd", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON (for tooling integration)
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the inspection command catalog
    List,

    /// Generate the LLDB Python command script
    Script {
        /// Write the script to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Interactive console stand-in (prints the expression each
    /// command would submit to the evaluator)
    Console,
}
