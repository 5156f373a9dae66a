// src/cli/args.rs
use crate::constants::DEFAULT_BIND_ADDR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to the SQLite output database (optional)
    #[arg(short, long, value_name = "DB", global = true)]
    pub db: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP resource layer
    Serve {
        /// Address to bind, e.g. 127.0.0.1:8080
        #[arg(short, long, value_name = "ADDR", default_value = DEFAULT_BIND_ADDR)]
        bind: String,
    },

    /// Generate a standalone tabbed document from a JSON spec file
    Build {
        /// Path to a JSON file: {"title": "...", "tabs": [{"title": "...", "content": "..."}]}
        #[arg(value_name = "SPEC")]
        spec: PathBuf,

        /// Write the document here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List stored outputs, newest first
    List,

    /// Print a stored output's HTML to stdout
    Show {
        /// Output ID
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Delete a stored output
    Delete {
        /// Output ID
        #[arg(value_name = "ID")]
        id: String,
    },
}
