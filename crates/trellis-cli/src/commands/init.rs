//! Init command implementation.
//!
//! Writes a commented starter trellis.toml that passes `trellis check`
//! as-is.

use crate::cli::InitArgs;
use crate::commands::utils;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

const STARTER_CONFIG: &str = r#"# Trellis build configuration.
# Run `trellis check` after editing, `trellis resolve` to inspect the result.

# URL prefix for all emitted asset references. Must start and end with "/".
base = "/my-app/"

# Plugins apply in order; later plugins observe earlier transforms.
[[plugins]]
name = "vue"

[[plugins]]
name = "auto-import"
options = { resolvers = ["element-plus"] }

# Dependencies to pre-bundle eagerly instead of on first import.
[optimizeDeps]
include = ["schart.js"]

# Import prefix rewriting. Targets are project-root-relative.
[resolve.alias]
"@" = "/src"
"~" = "/src/assets"

# Compile-time constants. Values are pre-serialized literal text.
[define]
__HYDRATION_MISMATCH_DETAILS__ = "true"

[build]
assetsDir = "assets"
sourcemap = false

# Production enables source maps and splits vendor code explicitly.
[profiles.production.build]
sourcemap = true

[profiles.production.build.manualChunks]
vendor = ["vue", "element-plus"]
"#;

pub fn execute(args: InitArgs) -> Result<()> {
    let root = utils::project_root(args.root.as_deref())?;
    let path = root.join("trellis.toml");

    if path.exists() && !args.force {
        return Err(CliError::Custom(format!(
            "{} already exists\n\nHint: pass --force to overwrite it",
            path.display()
        )));
    }

    std::fs::write(&path, STARTER_CONFIG).with_path(&path)?;
    ui::success(&format!("wrote {}", path.display()));
    Ok(())
}
