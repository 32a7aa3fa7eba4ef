//! Shared configuration loader for the qstr tools.
//!
//! `defaults/qstr.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`QstrConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use qstr::Delimiters;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/qstr.default.toml");

/// Top-level configuration consumed by qstr applications.
#[derive(Debug, Clone, Deserialize)]
pub struct QstrConfig {
    #[serde(default)]
    pub words: WordsConfig,
    pub padding: PaddingConfig,
    pub hex: HexConfig,
}

/// How text is split into words.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordsConfig {
    pub delimiters: Option<String>,
}

impl WordsConfig {
    /// Configured separator set, or whitespace when none is set.
    pub fn delimiters(&self) -> Delimiters {
        match &self.delimiters {
            Some(chars) => Delimiters::from(chars.as_str()),
            None => Delimiters::whitespace(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaddingConfig {
    pub pad_char: char,
    pub cut: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HexConfig {
    pub digits: usize,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<QstrConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<QstrConfig, ConfigError> {
    Loader::new().build()
}
