//! Scan settings on the builder

use xmlsift_engine::ExtractorConfig;

use crate::builder::core::SiftBuilder;

impl<K> SiftBuilder<K> {
    /// Replace all settings at once
    ///
    /// The configuration is validated when the extraction runs.
    #[must_use]
    pub fn config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Fail documents nested deeper than `depth`
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config = self.config.with_max_depth(depth);
        self
    }

    /// Read buffer capacity in bytes
    #[must_use]
    pub fn buffer_capacity(mut self, bytes: usize) -> Self {
        self.config = self.config.with_buffer_capacity(bytes);
        self
    }

    /// Keep reading after every selector has a value
    ///
    /// Malformed content after the last match is then reported instead of
    /// ignored.
    #[must_use]
    pub fn read_to_end(mut self) -> Self {
        self.config = self.config.with_stop_when_satisfied(false);
        self
    }

    /// Keep whitespace-only character data in markup output
    #[must_use]
    pub fn keep_whitespace(mut self) -> Self {
        self.config = self.config.with_skip_whitespace_text(false);
        self
    }
}
