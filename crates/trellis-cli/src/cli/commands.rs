use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available Trellis subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the configuration and print the normalized result
    ///
    /// Discovers the document, merges the selected profile and any
    /// environment or flag overrides, validates everything, and prints
    /// the configuration the build pipeline would receive.
    Resolve(ResolveArgs),

    /// Validate the configuration without printing it
    ///
    /// Exits non-zero on the first validation error. With --paths, also
    /// checks that alias targets exist on disk.
    Check(CheckArgs),

    /// Print the JSON Schema of the document format
    ///
    /// Useful for editor integration and external validation tooling.
    Schema,

    /// Write a starter trellis.toml into the project root
    Init(InitArgs),
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Path to a config file (otherwise discovered in the project root)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project root to discover the config in (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Profile whose overrides to merge before resolving
    ///
    /// Also settable through TRELLIS_PROFILE.
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Override the base path (TRELLIS_BASE)
    #[arg(long, value_name = "PREFIX")]
    pub base: Option<String>,

    /// Override source map emission (TRELLIS_SOURCEMAP)
    #[arg(long, value_name = "BOOL")]
    pub sourcemap: Option<bool>,

    /// Override the static assets subdirectory (TRELLIS_ASSETS_DIR)
    #[arg(long, value_name = "DIR")]
    pub assets_dir: Option<String>,

    /// Print the normalized configuration as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to a config file (otherwise discovered in the project root)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project root to discover the config in (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Profile whose overrides to merge before validating
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Also check that alias targets exist on disk
    #[arg(long)]
    pub paths: bool,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project root to write trellis.toml into (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Overwrite an existing trellis.toml
    #[arg(long)]
    pub force: bool,
}
