//! Extractor configuration
//!
//! Runtime knobs for a [`crate::PathExtractor`] scan. Every field has a
//! default, so a configuration file only needs to name what it changes.

mod validation;

use serde::{Deserialize, Serialize};

pub use validation::{ConfigValidator, ConfigurationError};

/// Runtime configuration for scanning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Initial capacity of the tokenizer read buffer in bytes
    pub buffer_capacity: usize,
    /// Deepest element nesting accepted before the scan fails
    pub max_depth: usize,
    /// Stop reading once every pattern has a value
    pub stop_when_satisfied: bool,
    /// Drop whitespace-only character data from rendered markup
    pub skip_whitespace_text: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: 8192, // 8KB
            max_depth: 512,
            stop_when_satisfied: true,
            skip_whitespace_text: true,
        }
    }
}

impl ExtractorConfig {
    /// Large buffers, early stop; suited to big documents with few targets
    #[must_use]
    pub fn streaming() -> Self {
        Self {
            buffer_capacity: 65_536, // 64KB
            ..Self::default()
        }
    }

    /// Read every document to its end, so trailing corruption is always reported
    #[must_use]
    pub fn exhaustive() -> Self {
        Self {
            stop_when_satisfied: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_buffer_capacity(mut self, buffer_capacity: usize) -> Self {
        self.buffer_capacity = buffer_capacity;
        self
    }

    #[must_use]
    pub fn with_stop_when_satisfied(mut self, stop: bool) -> Self {
        self.stop_when_satisfied = stop;
        self
    }

    #[must_use]
    pub fn with_skip_whitespace_text(mut self, skip: bool) -> Self {
        self.skip_whitespace_text = skip;
        self
    }

    /// Parse and validate a JSON configuration document
    ///
    /// # Errors
    /// Returns [`ConfigurationError`] for malformed JSON or out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ConfigurationError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check all values are usable
    ///
    /// # Errors
    /// Returns the first [`ConfigurationError`] found.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        ConfigValidator::validate(self)
    }
}
