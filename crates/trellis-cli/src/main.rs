//! Trellis CLI - build configuration resolver for web applications.
//!
//! Entry point: parses arguments, initializes logging, dispatches the
//! command, and renders the first error through miette on failure.

use clap::Parser;
use miette::Result;
use trellis_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Schema => commands::schema_execute(),
        cli::Command::Init(init_args) => commands::init_execute(init_args),
    };

    result.map_err(error::cli_error_to_miette)
}
