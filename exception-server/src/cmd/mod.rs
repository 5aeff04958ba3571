//! CLI definitions and command implementations for the exception server.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod init;
pub mod scenarios;
pub mod serve;

/// Exception server: fixed error-chain responses for HTTP client tests.
#[derive(Debug, Parser)]
#[command(name = "exception-server")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a default TOML configuration file.
    Init {
        /// Output path for the configuration file.
        #[arg(short, long, default_value = "config.toml")]
        output: PathBuf,

        /// Overwrite the file if it already exists.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Start the exception server.
    Serve {
        /// Path to a TOML configuration file; defaults apply without one.
        #[arg(short, long, env = "CONFIG")]
        config: Option<PathBuf>,
    },

    /// List the served scenarios.
    Scenarios,
}
