use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// red-scare - path queries on graphs with red vertices
#[derive(Debug, Parser)]
#[command(name = "red-scare", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve None, Some, Many, Few and Alternate for one instance and print a report.
    Solve {
        /// Path to the instance file.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Solve every instance in a directory and print a tab-separated table.
    Batch {
        /// Directory holding the instance files.
        #[arg(value_name = "DIR", default_value = "data")]
        dir: PathBuf,

        /// Extension of the instance files.
        #[arg(short, long, default_value = "txt")]
        extension: String,
    },
}
