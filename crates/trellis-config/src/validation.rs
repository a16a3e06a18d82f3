//! Pluggable validation strategies over a normalized configuration.
//!
//! [`BuildConfig::resolve`](crate::BuildConfig::resolve) already enforces
//! every structural invariant for configurations coming out of a document.
//! These validators exist for the other two cases: configurations
//! assembled programmatically (field by field, where nothing stopped the
//! caller from violating an invariant), and opt-in filesystem checks the
//! resolver deliberately never performs.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::build::{is_valid_base, BuildConfig};
use crate::error::{ConfigError, Result};

/// Trait for pluggable validation strategies.
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Structural validation only, no filesystem access.
///
/// # Example
///
/// ```
/// use trellis_config::{validate_schema, BuildConfig, ConfigDocument, PluginRegistry};
///
/// let config = BuildConfig::resolve(&ConfigDocument::default(), &PluginRegistry::default()).unwrap();
/// validate_schema(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        if !is_valid_base(&config.base_path) {
            return Err(ConfigError::InvalidBasePath {
                value: config.base_path.clone(),
            });
        }

        for (prefix, target) in &config.path_aliases {
            if prefix.is_empty() || target.is_empty() {
                return Err(ConfigError::EmptyAlias {
                    key: prefix.clone(),
                    target: target.clone(),
                });
            }
        }

        // a hand-assembled chunk map can still violate single membership
        let mut membership: IndexMap<&str, &str> = IndexMap::new();
        for (chunk, modules) in &config.output.manual_chunks {
            for module in modules {
                if let Some(owner) = membership.insert(module.as_str(), chunk.as_str()) {
                    if owner != chunk.as_str() {
                        return Err(ConfigError::DuplicateChunkMembership {
                            module: module.clone(),
                            first: owner.to_string(),
                            second: chunk.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Filesystem validation for CLI use.
///
/// Checks that every alias target exists under the project root. The
/// resolver itself never touches the filesystem (the downstream build tool
/// resolves paths lazily), so this stays an explicit opt-in.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for (prefix, target) in &config.path_aliases {
            // targets are project-root-relative even when written "/src"
            let path = self.root.join(target.trim_start_matches('/'));
            if !path.exists() {
                return Err(ConfigError::AliasTargetNotFound {
                    alias: prefix.clone(),
                    path,
                });
            }
        }

        Ok(())
    }
}

/// Convenience function for structural validation.
pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation.
pub fn validate_fs(config: &BuildConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::OutputConfig;
    use crate::document::ConfigDocument;
    use crate::plugin::PluginRegistry;
    use indexmap::{IndexMap, IndexSet};
    use serde_json::json;

    fn hand_built() -> BuildConfig {
        BuildConfig {
            base_path: "/".to_string(),
            plugins: Vec::new(),
            prebundle_includes: IndexSet::new(),
            path_aliases: IndexMap::new(),
            defines: IndexMap::new(),
            output: OutputConfig {
                assets_dir: "assets".to_string(),
                sourcemap: false,
                manual_chunks: IndexMap::new(),
            },
        }
    }

    #[test]
    fn schema_validator_accepts_resolved_config() {
        let doc = ConfigDocument::from_value(json!({ "base": "/app/" })).unwrap();
        let config = BuildConfig::resolve(&doc, &PluginRegistry::default()).unwrap();
        assert!(SchemaValidator.validate(&config).is_ok());
    }

    #[test]
    fn schema_validator_rejects_hand_built_bad_base() {
        let mut config = hand_built();
        config.base_path = "app".to_string();
        let result = SchemaValidator.validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidBasePath { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_hand_built_double_membership() {
        let mut config = hand_built();
        config
            .output
            .manual_chunks
            .insert("vendor".to_string(), vec!["vue".to_string()]);
        config
            .output
            .manual_chunks
            .insert("other".to_string(), vec!["vue".to_string()]);

        let result = SchemaValidator.validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::DuplicateChunkMembership { .. }
        ));
    }

    #[test]
    fn fs_validator_checks_alias_targets() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("src")).unwrap();

        let mut config = hand_built();
        config
            .path_aliases
            .insert("@".to_string(), "/src".to_string());
        assert!(validate_fs(&config, dir.path()).is_ok());

        config
            .path_aliases
            .insert("~".to_string(), "/src/assets".to_string());
        let result = validate_fs(&config, dir.path());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::AliasTargetNotFound { alias, .. } if alias == "~"
        ));
    }
}
