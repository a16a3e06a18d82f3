//! Resolve command implementation.
//!
//! Loads the document, merges profile and overrides, validates, and prints
//! the normalized configuration.

use trellis_config::{BuildConfig, PluginRegistry};

use crate::cli::ResolveArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::overrides::Overrides;
use crate::ui;

pub fn execute(args: ResolveArgs) -> Result<()> {
    let overrides = Overrides::load(Overrides::from_resolve_args(&args))?;
    let root = utils::project_root(args.root.as_deref())?;

    let mut document = utils::load_document(args.config.as_deref(), &root)?;
    document = document.materialize_profile(overrides.profile.as_deref())?;
    overrides.apply(&mut document);

    let config = BuildConfig::resolve(&document, &PluginRegistry::default())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print_summary(&config, overrides.profile.as_deref());
    }

    Ok(())
}

fn print_summary(config: &BuildConfig, profile: Option<&str>) {
    match profile {
        Some(name) => ui::success(&format!("resolved configuration (profile {name})")),
        None => ui::success("resolved configuration"),
    }

    println!("base path   {}", config.base_path);
    println!("assets dir  {}", config.output.assets_dir);
    println!(
        "source maps {}",
        if config.output.sourcemap { "on" } else { "off" }
    );

    if !config.plugins.is_empty() {
        let names: Vec<_> = config.plugins.iter().map(|p| p.name.as_str()).collect();
        println!("plugins     {}", names.join(", "));
    }
    if !config.prebundle_includes.is_empty() {
        let names: Vec<_> = config.prebundle_includes.iter().map(String::as_str).collect();
        println!("prebundle   {}", names.join(", "));
    }
    for (prefix, target) in &config.path_aliases {
        println!("alias       {prefix} -> {target}");
    }
    for (name, value) in &config.defines {
        println!("define      {name} = {value}");
    }
    for (chunk, modules) in &config.output.manual_chunks {
        println!("chunk       {chunk}: {}", modules.join(", "));
    }
}
