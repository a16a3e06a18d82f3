//! Normalized build configuration and the resolution pass that produces it.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::document::ConfigDocument;
use crate::error::{ConfigError, Result};
use crate::plugin::PluginRegistry;

/// Fully validated, immutable build configuration.
///
/// Constructed once per build invocation by [`BuildConfig::resolve`] and
/// handed to the downstream build tool in-process; it is never mutated
/// afterwards and is rebuilt from scratch on the next invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// URL prefix for all emitted asset references
    pub base_path: String,

    /// Plugins in application order, disabled entries already filtered out
    pub plugins: Vec<ResolvedPlugin>,

    /// Module names eagerly pre-bundled
    pub prebundle_includes: IndexSet<String>,

    /// Import prefix rewrite rules, first-match, keys unique
    pub path_aliases: IndexMap<String, String>,

    /// Compile-time constants as pre-serialized literal text
    pub defines: IndexMap<String, String>,

    /// Output options
    pub output: OutputConfig,
}

/// A plugin that passed registry resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPlugin {
    pub name: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

/// Output options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    pub assets_dir: String,
    pub sourcemap: bool,
    /// Chunk name -> member modules; a module appears in at most one chunk
    pub manual_chunks: IndexMap<String, Vec<String>>,
}

impl BuildConfig {
    /// Resolve a raw document into a normalized configuration.
    ///
    /// This is a pure transform: its only side effects are `tracing`
    /// warnings for the soft checks. Validation is all-or-nothing and the
    /// first error wins; no partially-resolved configuration escapes.
    ///
    /// # Example
    ///
    /// ```
    /// use trellis_config::{BuildConfig, ConfigDocument, PluginRegistry};
    /// use serde_json::json;
    ///
    /// let doc = ConfigDocument::from_value(json!({
    ///     "base": "/app/",
    ///     "resolve": { "alias": { "@": "/src" } }
    /// }))
    /// .unwrap();
    ///
    /// let config = BuildConfig::resolve(&doc, &PluginRegistry::default()).unwrap();
    /// assert_eq!(config.base_path, "/app/");
    /// assert_eq!(config.path_aliases["@"], "/src");
    /// ```
    pub fn resolve(document: &ConfigDocument, registry: &PluginRegistry) -> Result<Self> {
        if !is_valid_base(&document.base) {
            return Err(ConfigError::InvalidBasePath {
                value: document.base.clone(),
            });
        }

        let mut plugins = Vec::with_capacity(document.plugins.len());
        for spec in &document.plugins {
            if !registry.contains(&spec.name) {
                return Err(ConfigError::UnknownPluginReference {
                    name: spec.name.clone(),
                    known: registry.known(),
                });
            }
            if !spec.enabled {
                debug!(plugin = %spec.name, "plugin disabled, skipping");
                continue;
            }
            plugins.push(ResolvedPlugin {
                name: spec.name.clone(),
                options: spec.options.clone(),
            });
        }

        let mut path_aliases = IndexMap::with_capacity(document.resolve.alias.len());
        for (prefix, target) in document.resolve.alias.iter() {
            if prefix.is_empty() || target.is_empty() {
                return Err(ConfigError::EmptyAlias {
                    key: prefix.clone(),
                    target: target.clone(),
                });
            }
            if path_aliases.insert(prefix.clone(), target.clone()).is_some() {
                return Err(ConfigError::DuplicateAliasKey {
                    key: prefix.clone(),
                });
            }
        }

        // module -> owning chunk, for cross-chunk membership checks
        let mut membership: IndexMap<String, String> = IndexMap::new();
        let mut manual_chunks = IndexMap::with_capacity(document.build.manual_chunks.len());
        for (chunk, modules) in document.build.manual_chunks.iter() {
            if manual_chunks.contains_key(chunk) {
                return Err(ConfigError::DuplicateChunkName {
                    chunk: chunk.clone(),
                });
            }
            let mut members = Vec::with_capacity(modules.len());
            for module in modules {
                match membership.get(module) {
                    Some(owner) if owner == chunk => {
                        debug!(module = %module, chunk = %chunk, "module repeated within its chunk, keeping one");
                    }
                    Some(owner) => {
                        return Err(ConfigError::DuplicateChunkMembership {
                            module: module.clone(),
                            first: owner.clone(),
                            second: chunk.clone(),
                        });
                    }
                    None => {
                        membership.insert(module.clone(), chunk.clone());
                        members.push(module.clone());
                    }
                }
            }
            manual_chunks.insert(chunk.clone(), members);
        }

        let prebundle_includes: IndexSet<String> =
            document.optimize_deps.include.iter().cloned().collect();

        // Soft check: the downstream tool resolves chunk members lazily, so
        // an unknown name is a warning rather than a failure.
        for (module, chunk) in &membership {
            if !prebundle_includes.contains(module) {
                warn!(
                    module = %module,
                    chunk = %chunk,
                    "manual chunk member is not listed in optimizeDeps.include; it will be resolved lazily"
                );
            }
        }

        Ok(Self {
            base_path: document.base.clone(),
            plugins,
            prebundle_includes,
            path_aliases,
            defines: document.define.clone(),
            output: OutputConfig {
                assets_dir: document.build.assets_dir.clone(),
                sourcemap: document.build.sourcemap,
                manual_chunks,
            },
        })
    }
}

/// The base must be slash-delimited: "/" alone, or "/…/".
pub(crate) fn is_valid_base(base: &str) -> bool {
    !base.is_empty() && base.starts_with('/') && base.ends_with('/')
}
