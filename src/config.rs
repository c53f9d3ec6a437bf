//! Shared configuration loader.
//!
//! `defaults/pagesmith.default.toml` is embedded into the library so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those defaults via
//! [`Loader`] before deserializing into [`PagesmithConfig`].
//!
//! Every section also implements `Default` with the same values, so library callers that never
//! touch a config file get identical behavior.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/pagesmith.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PagesmithConfig {
    pub detection: DetectionConfig,
    pub analysis: AnalysisConfig,
    pub classification: ClassificationConfig,
    pub assembly: AssemblyConfig,
}

/// Size gates and limits for the component detector.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetectionConfig {
    pub max_content_length: usize,
    pub fast_path_threshold: usize,
    pub max_matches_per_type: usize,
    pub snippet_length: usize,
    pub oversize_policy: OversizePolicy,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            max_content_length: 50_000,
            fast_path_threshold: 10_000,
            max_matches_per_type: 50,
            snippet_length: 200,
            oversize_policy: OversizePolicy::Truncate,
        }
    }
}

/// What strict detection does with content above `max_content_length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OversizePolicy {
    Truncate,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisConfig {
    pub max_heading_depth: u8,
    pub words_per_minute: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_heading_depth: 3,
            words_per_minute: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassificationConfig {
    pub max_score: u32,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self { max_score: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssemblyConfig {
    pub class_prefix: String,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            class_prefix: "ps".to_string(),
        }
    }
}

/// Layers TOML files and key overrides over the embedded defaults, then deserializes the
/// result into a [`PagesmithConfig`]. Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        self
    }

    /// Layer a TOML file; building fails if it is missing.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file when it exists, e.g. a per-project `pagesmith.toml`.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Override one dotted key, e.g. `detection.max_content_length`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Strict detection: oversized content is rejected instead of truncated, optionally under
    /// a different cap.
    pub fn with_strict_detection(self, max_content_length: Option<usize>) -> Result<Self, ConfigError> {
        let loader = self.set_override("detection.oversize_policy", "reject")?;
        match max_content_length {
            Some(max) => loader.set_override("detection.max_content_length", max as u64),
            None => Ok(loader),
        }
    }

    pub fn build(self) -> Result<PagesmithConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<PagesmithConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.detection.max_content_length, 50_000);
        assert_eq!(config.detection.fast_path_threshold, 10_000);
        assert_eq!(config.analysis.max_heading_depth, 3);
        assert_eq!(config.assembly.class_prefix, "ps");
    }

    #[test]
    fn embedded_defaults_match_default_impls() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config, PagesmithConfig::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("detection.oversize_policy", "reject")
            .expect("override to apply")
            .set_override("analysis.max_heading_depth", 6)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.detection.oversize_policy, OversizePolicy::Reject);
        assert_eq!(config.analysis.max_heading_depth, 6);
    }

    #[test]
    fn strict_detection_sets_policy_and_cap() {
        let config = Loader::new()
            .with_strict_detection(Some(1_000))
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.detection.oversize_policy, OversizePolicy::Reject);
        assert_eq!(config.detection.max_content_length, 1_000);

        let config = Loader::new()
            .with_strict_detection(None)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.detection.max_content_length, 50_000);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[assembly]\nclass_prefix = \"acme\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.assembly.class_prefix, "acme");
        assert_eq!(config.detection.snippet_length, 200);
    }

    #[test]
    fn optional_file_may_be_missing() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/pagesmith.toml")
            .build()
            .expect("config to build");
        assert_eq!(config, PagesmithConfig::default());
    }
}
