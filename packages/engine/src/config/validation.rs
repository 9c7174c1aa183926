//! Configuration validation

use super::ExtractorConfig;

/// Largest accepted read buffer
const MAX_BUFFER_CAPACITY: usize = 16_777_216; // 16MB

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid buffer size: {0}")]
    InvalidBufferSize(String),

    #[error("Invalid nesting depth: {0}")]
    InvalidDepth(String),

    #[error("Malformed configuration: {0}")]
    Malformed(String),
}

/// Validates [`ExtractorConfig`] values
pub struct ConfigValidator;

impl ConfigValidator {
    /// # Errors
    /// Returns the first out-of-range value.
    pub fn validate(config: &ExtractorConfig) -> Result<(), ConfigurationError> {
        if config.buffer_capacity == 0 {
            return Err(ConfigurationError::InvalidBufferSize(
                "buffer_capacity must be greater than zero".to_string(),
            ));
        }
        if config.buffer_capacity > MAX_BUFFER_CAPACITY {
            return Err(ConfigurationError::InvalidBufferSize(format!(
                "buffer_capacity {} exceeds {MAX_BUFFER_CAPACITY}",
                config.buffer_capacity
            )));
        }
        if config.max_depth == 0 {
            return Err(ConfigurationError::InvalidDepth(
                "max_depth must be at least 1".to_string(),
            ));
        }
        if config.max_depth > 4096 {
            log::warn!(
                "max_depth {} is unusually large; deeply nested input will use proportional memory",
                config.max_depth
            );
        }
        Ok(())
    }
}
