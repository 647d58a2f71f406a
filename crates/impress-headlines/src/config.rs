//! Filter options for impress-headlines
//!
//! Options can be built in code, parsed from TOML, or layered from the
//! standard locations:
//!
//! ```toml
//! # ~/.impress/headlines.toml or <project>/.impress/headlines.toml
//! similarity_threshold = 80
//! max_kept = 20
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HeadlineError, Result};

/// Default similarity threshold (percent)
pub const DEFAULT_SIMILARITY_THRESHOLD: u8 = 80;

/// Default number of headlines kept after filtering
pub const DEFAULT_MAX_KEPT: usize = 20;

/// File name looked up inside `.impress/` directories
pub const OPTIONS_FILE_NAME: &str = "headlines.toml";

/// Minimum similarity (0–100) at which a headline is suppressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct SimilarityThreshold(u8);

impl SimilarityThreshold {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Build a threshold, clamping the value into 0..=100
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether a similarity score reaches this threshold
    pub fn is_met_by(self, similarity: f64) -> bool {
        similarity >= f64::from(self.0)
    }
}

impl Default for SimilarityThreshold {
    fn default() -> Self {
        Self(DEFAULT_SIMILARITY_THRESHOLD)
    }
}

impl TryFrom<i64> for SimilarityThreshold {
    type Error = HeadlineError;

    fn try_from(value: i64) -> Result<Self> {
        if (0..=100).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(HeadlineError::ThresholdOutOfRange(value))
        }
    }
}

impl From<SimilarityThreshold> for u8 {
    fn from(threshold: SimilarityThreshold) -> Self {
        threshold.0
    }
}

impl fmt::Display for SimilarityThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Options for the headline filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Headlines at or above this similarity to a kept headline are dropped
    pub similarity_threshold: SimilarityThreshold,
    /// Maximum number of headlines kept
    pub max_kept: usize,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: SimilarityThreshold::default(),
            max_kept: DEFAULT_MAX_KEPT,
        }
    }
}

/// TOML representation; every key is optional so files can be layered
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlOptions {
    similarity_threshold: Option<i64>,
    max_kept: Option<usize>,
}

impl TomlOptions {
    fn apply_to(self, options: &mut FilterOptions) -> Result<()> {
        if let Some(threshold) = self.similarity_threshold {
            options.similarity_threshold = SimilarityThreshold::try_from(threshold)?;
        }
        if let Some(max_kept) = self.max_kept {
            options.max_kept = max_kept;
        }
        Ok(())
    }
}

impl FilterOptions {
    pub fn new(similarity_threshold: SimilarityThreshold, max_kept: usize) -> Self {
        Self {
            similarity_threshold,
            max_kept,
        }
    }

    pub fn with_threshold(mut self, similarity_threshold: SimilarityThreshold) -> Self {
        self.similarity_threshold = similarity_threshold;
        self
    }

    pub fn with_max_kept(mut self, max_kept: usize) -> Self {
        self.max_kept = max_kept;
        self
    }

    /// Apply command-line style overrides on top of loaded options
    ///
    /// `None` keeps the current value. Thresholds above 100 are clamped.
    pub fn with_overrides(mut self, threshold: Option<u8>, max_kept: Option<usize>) -> Self {
        if let Some(threshold) = threshold {
            self.similarity_threshold = SimilarityThreshold::clamped(i64::from(threshold));
        }
        if let Some(max_kept) = max_kept {
            self.max_kept = max_kept;
        }
        self
    }

    /// Parse options from TOML, filling missing keys with defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut options = Self::default();
        options.merge_toml_str(content)?;
        Ok(options)
    }

    /// Load options from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let mut options = Self::default();
        options.merge_file(path)?;
        Ok(options)
    }

    /// Load options from standard locations
    ///
    /// Loads in order: defaults, user (~/.impress/headlines.toml),
    /// project (.impress/headlines.toml). Later files override earlier ones
    /// key by key.
    pub fn load_standard(project_root: Option<&Path>) -> Result<Self> {
        Self::load_from_locations(dirs::home_dir().as_deref(), project_root)
    }

    /// Same as [`FilterOptions::load_standard`] with an explicit home directory
    pub fn load_from_locations(home: Option<&Path>, project_root: Option<&Path>) -> Result<Self> {
        let mut options = Self::default();

        for path in [home, project_root].into_iter().flatten().map(options_path) {
            if path.is_file() {
                options.merge_file(&path)?;
                tracing::debug!("Loaded headline options from {:?}", path);
            }
        }

        Ok(options)
    }

    fn merge_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| HeadlineError::Io(format!("{}: {}", path.display(), e)))?;
        self.merge_toml_str(&content)
    }

    fn merge_toml_str(&mut self, content: &str) -> Result<()> {
        let toml: TomlOptions =
            toml::from_str(content).map_err(|e| HeadlineError::ConfigParse(e.to_string()))?;
        toml.apply_to(self)
    }
}

/// `<dir>/.impress/headlines.toml`
pub fn options_path(dir: &Path) -> PathBuf {
    dir.join(".impress").join(OPTIONS_FILE_NAME)
}
