//! Error types for configuration loading, validation, and resolution.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration-specific errors.
///
/// All validation errors are fatal: the first one halts resolution before
/// any build work is handed downstream. Each variant carries enough context
/// to point at the offending entry.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base path is empty or not slash-delimited
    #[error("invalid base path {value:?}\n\nHint: the base must start and end with '/' (e.g. \"/app/\")")]
    InvalidBasePath {
        /// The rejected value
        value: String,
    },

    /// The same alias prefix appears more than once
    #[error("duplicate alias key {key:?}\n\nHint: each import prefix may map to exactly one target")]
    DuplicateAliasKey {
        /// The repeated prefix
        key: String,
    },

    /// An alias entry has an empty prefix or target
    #[error("empty alias entry {key:?} -> {target:?}\n\nHint: alias prefixes and targets must be non-empty")]
    EmptyAlias { key: String, target: String },

    /// The same manual chunk name appears more than once
    #[error("duplicate manual chunk {chunk:?}\n\nHint: chunk names must be unique")]
    DuplicateChunkName { chunk: String },

    /// A module is assigned to two distinct manual chunks
    #[error("module {module:?} is listed in both chunk {first:?} and chunk {second:?}\n\nHint: a module may belong to at most one manual chunk")]
    DuplicateChunkMembership {
        module: String,
        first: String,
        second: String,
    },

    /// A plugin is named in the document but not registered
    #[error("unknown plugin {name:?}\n\nHint: registered plugins are: {known}")]
    UnknownPluginReference {
        name: String,
        /// Comma-separated registered plugin names, for the message
        known: String,
    },

    /// The requested profile is not declared in the document
    #[error("profile '{0}' not found in config\n\nHint: declare it under [profiles.{0}]")]
    ProfileNotFound(String),

    /// No config file was found during discovery
    #[error("config not found\n\nHint: create trellis.toml, trellis.config.json, or a \"trellis\" field in package.json")]
    NotFound,

    /// The config file has an extension discovery does not handle
    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// The document failed to parse or deserialize
    #[error("invalid config document: {message}")]
    InvalidDocument { message: String },

    /// A profile override produced an unreadable document after merging
    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    /// An alias target does not exist on disk (filesystem validation only)
    #[error("alias target not found for {alias:?}: {}\n\nHint: aliases must point inside the project tree", .path.display())]
    AliasTargetNotFound { alias: String, path: PathBuf },

    /// I/O errors while reading config files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
