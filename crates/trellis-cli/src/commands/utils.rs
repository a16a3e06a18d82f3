//! Shared helpers for command implementations.

use std::path::{Path, PathBuf};

use trellis_config::{ConfigDiscovery, ConfigDocument};

use crate::error::Result;

/// Resolve the project root: explicit flag or the current directory.
pub(crate) fn project_root(root: Option<&Path>) -> Result<PathBuf> {
    match root {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}

/// Load the document from an explicit path or by discovery under the root.
pub(crate) fn load_document(config: Option<&Path>, root: &Path) -> Result<ConfigDocument> {
    let discovery = ConfigDiscovery::new(root);
    let document = match config {
        Some(path) => discovery.load_from(path)?,
        None => discovery.load()?,
    };
    Ok(document)
}
