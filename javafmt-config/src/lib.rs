//! Shared configuration loader for the javafmt toolchain.
//!
//! `defaults/javafmt.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`JavafmtConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/javafmt.default.toml");

/// Top-level configuration consumed by javafmt applications.
#[derive(Debug, Clone, Deserialize)]
pub struct JavafmtConfig {
    pub formatting: FormattingConfig,
}

/// Formatting-related configuration groups.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    pub rules: FormattingRulesConfig,
}

/// Mirrors the knobs exposed by the javafmt pipeline, one field per pass
/// toggle plus the numeric indent/line-length knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingRulesConfig {
    pub format_curly_braces: bool,
    pub clear_spaces_near_brackets: bool,
    pub replace_multiple_spaces: bool,
    pub spaces_near_operators: bool,
    pub space_after_comma: bool,
    pub clear_line_breaks_in_signatures: bool,
    pub line_break_after_semicolon: bool,
    pub put_spaces_near_block_expression: bool,
    pub split_long_lines: bool,
    pub remove_redundant_line_breaks: bool,
    pub preserve_comment_indent: bool,
    pub line_break_after_comment: bool,
    pub indent: usize,
    pub split_indent: usize,
    pub switch_case_indent: usize,
    pub preferred_line_length: usize,
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
    pub fn build(self) -> Result<JavafmtConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_deserialize() {
        let config = Loader::new().build().expect("embedded defaults must load");
        let rules = config.formatting.rules;
        assert!(rules.format_curly_braces);
        assert!(rules.line_break_after_semicolon);
        assert!(!rules.preserve_comment_indent);
        assert_eq!(rules.indent, 4);
        assert_eq!(rules.preferred_line_length, 100);
    }

    #[test]
    fn override_beats_defaults() {
        let config = Loader::new()
            .set_override("formatting.rules.indent", 2i64)
            .expect("override must apply")
            .build()
            .expect("config must build");
        assert_eq!(config.formatting.rules.indent, 2);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("does/not/exist.toml")
            .build()
            .expect("optional files must not be required");
        assert_eq!(config.formatting.rules.switch_case_indent, 4);
    }
}
