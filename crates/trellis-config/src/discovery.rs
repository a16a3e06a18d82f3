//! File-based config discovery for CLI use.
//!
//! Finds and loads Trellis configuration documents from a project
//! directory. Library embedders with in-memory documents should use
//! [`ConfigDocument::from_value`] directly.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::document::ConfigDocument;
use crate::error::{ConfigError, Result};

/// File-based configuration discovery.
///
/// Searches a root directory in this order:
/// 1. `trellis.toml`
/// 2. `trellis.config.json`
/// 3. `package.json` with a non-null `"trellis"` field
///
/// # Example
///
/// ```no_run
/// use trellis_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let document = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory.
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join("trellis.toml");
        if toml_path.exists() {
            return Some(toml_path);
        }

        let json_path = self.root.join("trellis.config.json");
        if json_path.exists() {
            return Some(json_path);
        }

        // package.json with a trellis field
        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get("trellis").is_some_and(|v| !v.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load the document from the discovered file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<ConfigDocument> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_from(&path)
    }

    /// Load the document and materialize a profile in one step.
    pub fn load_with_profile(&self, profile: &str) -> Result<ConfigDocument> {
        self.load()?.materialize_profile(Some(profile))
    }

    /// Load a document from a specific file path.
    pub fn load_from(&self, path: &Path) -> Result<ConfigDocument> {
        if path.file_name() == Some(OsStr::new("package.json")) {
            return self.load_from_package_json(path);
        }

        let content = fs::read_to_string(path)?;
        match path.extension().and_then(OsStr::to_str) {
            Some("toml") => ConfigDocument::from_toml_str(&content),
            Some("json") => ConfigDocument::from_json_str(&content),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    fn load_from_package_json(&self, path: &Path) -> Result<ConfigDocument> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidDocument {
                message: format!("invalid package.json: {e}"),
            })?;

        let trellis_value = parsed
            .get("trellis")
            .filter(|v| !v.is_null())
            .ok_or_else(|| ConfigError::InvalidDocument {
                message: "package.json has no \"trellis\" field".to_string(),
            })?;

        ConfigDocument::from_value(trellis_value.clone())
    }
}

/// Discover and load the document from the current directory.
pub fn discover() -> Result<ConfigDocument> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

/// Discover, load, and materialize a profile from the current directory.
pub fn discover_with_profile(profile: &str) -> Result<ConfigDocument> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_with_profile(profile)
}
