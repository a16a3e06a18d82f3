//! On-disk configuration schema for Trellis.
//!
//! `ConfigDocument` mirrors the declarative document a project checks in
//! (trellis.toml, trellis.config.json, or a `"trellis"` field in
//! package.json). It is the *raw* form: alias and chunk maps keep their
//! source entries verbatim so duplicate keys stay observable until
//! validation. Resolution into the normalized form lives in the `build`
//! module; file discovery in `discovery`.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::plugin::PluginSpec;

/// Declarative build configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigDocument {
    /// URL prefix applied to every emitted asset reference.
    ///
    /// Must start and end with '/' (or be exactly "/"). Changing it
    /// invalidates all previously emitted asset URLs, so it holds for the
    /// lifetime of one build invocation.
    #[serde(default = "default_base")]
    pub base: String,

    /// Ordered plugin list; later plugins observe transforms of earlier ones
    #[serde(default)]
    pub plugins: Vec<PluginSpec>,

    /// Dependency pre-bundling hints
    #[serde(default)]
    pub optimize_deps: OptimizeDeps,

    /// Import resolution rules
    #[serde(default)]
    pub resolve: ResolveSection,

    /// Compile-time constant substitution.
    ///
    /// Values are pre-serialized literal text, not live expressions:
    /// `__FLAG__ = "\"on\""` substitutes the quoted string.
    #[serde(default)]
    #[schemars(with = "BTreeMap<String, String>")]
    pub define: IndexMap<String, String>,

    /// Output options
    #[serde(default)]
    pub build: BuildSection,

    /// Per-environment overrides, deep-merged over the base document
    #[serde(default)]
    #[schemars(with = "BTreeMap<String, Value>")]
    pub profiles: IndexMap<String, Value>,
}

/// Dependency pre-bundling options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OptimizeDeps {
    /// Module names eagerly pre-bundled, bypassing lazy discovery
    #[serde(default)]
    pub include: Vec<String>,
}

/// Import resolution options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResolveSection {
    /// Logical import prefix -> source-tree target.
    ///
    /// First-match resolution, no fallback chaining. Keys must be unique;
    /// duplicates in the source text are rejected during resolution.
    #[serde(default)]
    #[schemars(with = "BTreeMap<String, String>")]
    pub alias: RawEntries<String>,
}

/// Output options for the downstream build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuildSection {
    /// Output subdirectory for emitted static assets
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    /// Emit debug source maps alongside output
    #[serde(default)]
    pub sourcemap: bool,

    /// Explicit grouping of dependencies into named output bundles,
    /// overriding automatic chunking heuristics
    #[serde(default)]
    #[schemars(with = "BTreeMap<String, Vec<String>>")]
    pub manual_chunks: RawEntries<Vec<String>>,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            sourcemap: false,
            manual_chunks: RawEntries::default(),
        }
    }
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self {
            base: default_base(),
            plugins: Vec::new(),
            optimize_deps: OptimizeDeps::default(),
            resolve: ResolveSection::default(),
            define: IndexMap::new(),
            build: BuildSection::default(),
            profiles: IndexMap::new(),
        }
    }
}

impl ConfigDocument {
    /// Create from serde_json::Value (for programmatic config).
    ///
    /// Duplicate keys cannot survive inside a `Value`; use
    /// [`ConfigDocument::from_json_str`] when loading source text so that
    /// duplicate alias or chunk keys are still caught.
    ///
    /// # Example
    ///
    /// ```
    /// use trellis_config::ConfigDocument;
    /// use serde_json::json;
    ///
    /// let doc = ConfigDocument::from_value(json!({
    ///     "base": "/app/",
    ///     "resolve": { "alias": { "@": "/src" } }
    /// }))
    /// .unwrap();
    /// assert_eq!(doc.base, "/app/");
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidDocument {
            message: e.to_string(),
        })
    }

    /// Parse a JSON document from source text.
    ///
    /// Unlike [`ConfigDocument::from_value`], this path streams map entries
    /// straight off the parser, so duplicate alias and chunk keys in the
    /// text survive into the raw entry lists and fail resolution.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ConfigError::InvalidDocument {
            message: e.to_string(),
        })
    }

    /// Parse a TOML document from source text.
    ///
    /// TOML itself rejects duplicate keys at parse time, so the value
    /// bridge loses nothing here.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let toml_val: toml::Value = toml::from_str(text).map_err(|e| ConfigError::InvalidDocument {
            message: format!("invalid TOML syntax: {e}"),
        })?;
        let value = serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidDocument {
            message: e.to_string(),
        })?;
        Self::from_value(value)
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidDocument {
            message: e.to_string(),
        })
    }

    /// Deep-merge the named profile's overrides into the base document.
    ///
    /// Objects merge recursively; arrays and scalars replace. `None` keeps
    /// the base document untouched. Selecting a profile the document does
    /// not declare is an error rather than a silent no-op.
    pub fn materialize_profile(mut self, profile: Option<&str>) -> Result<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };

        let overrides = self
            .profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))?;

        if overrides.is_null() {
            return Ok(self);
        }

        let saved_profiles = std::mem::take(&mut self.profiles);
        let mut base = serde_json::to_value(&self).map_err(|err| {
            ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            }
        })?;
        merge_values(&mut base, &overrides);

        let mut merged: ConfigDocument =
            serde_json::from_value(base).map_err(|err| ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            })?;
        merged.profiles = saved_profiles;
        Ok(merged)
    }

    /// Add an alias rule (builder style, mostly for tests and embedders)
    pub fn with_alias(mut self, prefix: impl Into<String>, target: impl Into<String>) -> Self {
        self.resolve.alias.0.push((prefix.into(), target.into()));
        self
    }

    /// Add a manual chunk (builder style)
    pub fn with_chunk(
        mut self,
        name: impl Into<String>,
        modules: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.build
            .manual_chunks
            .0
            .push((name.into(), modules.into_iter().map(Into::into).collect()));
        self
    }

    /// Generate the JSON Schema for the document format.
    pub fn json_schema() -> Value {
        let schema = schemars::schema_for!(ConfigDocument);
        serde_json::to_value(schema).expect("schema serialization should never fail")
    }
}

/// Map entries kept in source order *without* key de-duplication.
///
/// Serde map containers drop repeated keys before validation can see them;
/// this type collects `(key, value)` pairs verbatim so resolution can
/// reject duplicates instead of silently overwriting.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntries<V>(pub Vec<(String, V)>);

impl<V> Default for RawEntries<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> RawEntries<V> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, V)> {
        self.0.iter()
    }
}

impl<V: Serialize> Serialize for RawEntries<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for RawEntries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = RawEntries<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map with string keys")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// Recursive deep merge: objects merge key-wise, everything else replaces.
fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, update) => {
            *target_slot = update.clone();
        }
    }
}

fn default_base() -> String {
    "/".to_string()
}

fn default_assets_dir() -> String {
    "assets".to_string()
}
