//! Command-line interface definition for Trellis.
//!
//! Defines the CLI structure with clap v4 derive macros.
//!
//! # Command Structure
//!
//! - `trellis resolve` - Print the normalized build configuration
//! - `trellis check` - Validate the configuration without resolving output
//! - `trellis schema` - Print the JSON Schema of the document format
//! - `trellis init` - Write a starter trellis.toml

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, InitArgs, ResolveArgs};

/// Trellis - build configuration resolver for web applications
#[derive(Parser, Debug)]
#[command(
    name = "trellis",
    version,
    about = "Resolve and validate web-app build configuration",
    long_about = "Trellis loads a declarative build configuration (trellis.toml,\n\
                  trellis.config.json, or a \"trellis\" field in package.json),\n\
                  validates it eagerly, merges per-environment profile overrides,\n\
                  and prints the normalized configuration the build pipeline consumes."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows detailed information about discovery, profile merging, and
    /// each resolution step.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Useful for CI environments or when piping output to other tools.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
