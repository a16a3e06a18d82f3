pub mod build;
pub mod discovery;
pub mod document;
pub mod error;
pub mod plugin;
pub mod validation;

// Re-export main types
pub use build::{BuildConfig, OutputConfig, ResolvedPlugin};
pub use document::{BuildSection, ConfigDocument, OptimizeDeps, RawEntries, ResolveSection};
pub use error::{ConfigError, Result};
pub use plugin::{PluginRegistry, PluginSpec, BUILTIN_PLUGINS};

// Re-export discovery and validation
pub use discovery::{discover, discover_with_profile, ConfigDiscovery};
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
