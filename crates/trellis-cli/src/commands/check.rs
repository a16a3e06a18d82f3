//! Check command implementation.
//!
//! Validates the configuration without printing the resolved result.
//! Success is a single status line; the first error aborts with a
//! non-zero exit before any build work could begin.

use trellis_config::{validate_fs, BuildConfig, PluginRegistry};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::overrides::Overrides;
use crate::ui;

pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("checking configuration...");

    let overrides = Overrides::load(Overrides::from_check_args(&args))?;
    let root = utils::project_root(args.root.as_deref())?;

    let mut document = utils::load_document(args.config.as_deref(), &root)?;
    document = document.materialize_profile(overrides.profile.as_deref())?;
    overrides.apply(&mut document);

    let config = BuildConfig::resolve(&document, &PluginRegistry::default())?;

    if args.paths {
        ui::info("checking alias targets...");
        validate_fs(&config, &root)?;
    }

    ui::success("configuration is valid");
    Ok(())
}
