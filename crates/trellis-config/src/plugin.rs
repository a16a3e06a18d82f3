//! Plugin capability descriptors and the registry they resolve against.

use indexmap::IndexSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Plugin names the pipeline can execute out of the box.
pub const BUILTIN_PLUGINS: &[&str] = &["vue", "vue-setup-extend", "auto-import", "components"];

/// A single plugin entry from the document.
///
/// Order in the `plugins` list matters: plugins apply in sequence, and
/// later plugins observe the transforms of earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PluginSpec {
    /// Registered capability name (e.g. "vue")
    pub name: String,

    /// Plugin-specific configuration, forwarded opaquely
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,

    /// Whether the plugin participates in the build
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl PluginSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Value::Null,
            enabled: true,
        }
    }

    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }
}

/// The set of plugin capabilities resolution accepts.
///
/// A document naming a plugin outside the registry fails resolution: the
/// build cannot proceed without the capability. Embedders extend the
/// built-in set before resolving.
///
/// # Example
///
/// ```
/// use trellis_config::PluginRegistry;
///
/// let registry = PluginRegistry::default().with_plugin("legacy");
/// assert!(registry.contains("vue"));
/// assert!(registry.contains("legacy"));
/// ```
#[derive(Debug, Clone)]
pub struct PluginRegistry {
    names: IndexSet<String>,
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self {
            names: BUILTIN_PLUGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PluginRegistry {
    /// A registry with no capabilities at all
    pub fn empty() -> Self {
        Self {
            names: IndexSet::new(),
        }
    }

    /// Register an additional capability name
    pub fn with_plugin(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Comma-separated names, for error messages
    pub fn known(&self) -> String {
        self.names().collect::<Vec<_>>().join(", ")
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builtins_are_registered_by_default() {
        let registry = PluginRegistry::default();
        for name in BUILTIN_PLUGINS {
            assert!(registry.contains(name));
        }
    }

    #[test]
    fn empty_registry_knows_nothing() {
        assert!(!PluginRegistry::empty().contains("vue"));
    }

    #[test]
    fn with_plugin_extends_the_set() {
        let registry = PluginRegistry::empty().with_plugin("legacy");
        assert!(registry.contains("legacy"));
        assert_eq!(registry.known(), "legacy");
    }

    #[test]
    fn plugin_spec_defaults_to_enabled_with_no_options() {
        let spec: PluginSpec = serde_json::from_value(json!({ "name": "vue" })).unwrap();
        assert!(spec.enabled);
        assert!(spec.options.is_null());
    }

    #[test]
    fn plugin_spec_carries_nested_options() {
        let spec: PluginSpec = serde_json::from_value(json!({
            "name": "auto-import",
            "options": { "resolvers": ["element-plus"] }
        }))
        .unwrap();
        assert_eq!(spec.options["resolvers"][0], "element-plus");
    }
}
