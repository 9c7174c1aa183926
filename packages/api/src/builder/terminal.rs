//! Terminal methods
//!
//! Each terminal runs exactly one scan over its input and converts the
//! engine's values into the builder's output kind.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use hashbrown::HashMap;
use xmlsift_engine::{
    PathExpression, PathExtractor, ResourceReader, ScanStats, SiftError, SiftResult,
};

use crate::builder::core::SiftBuilder;
use crate::builder::output::OutputKind;

/// Values of one extraction keyed by canonical selector
///
/// Lookups accept any spelling of a selector (`foo`, `//foo`) and normalize
/// it the same way the builder did.
#[derive(Debug, Clone)]
pub struct Extracted<V> {
    values: HashMap<PathExpression, V>,
    stats: ScanStats,
}

impl<V> Extracted<V> {
    /// Value for `selector`; `None` if it did not match or does not parse
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<&V> {
        let pattern = PathExpression::new(selector).ok()?;
        self.values.get(pattern.as_str())
    }

    #[must_use]
    pub fn get_pattern(&self, pattern: &PathExpression) -> Option<&V> {
        self.values.get(pattern)
    }

    #[must_use]
    pub fn contains(&self, selector: &str) -> bool {
        self.get(selector).is_some()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Statistics of the scan that produced these values
    #[inline]
    #[must_use]
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.values.iter().map(|(pattern, value)| (pattern.as_str(), value))
    }

    /// Owned mapping from canonical selector text to value
    #[must_use]
    pub fn into_map(self) -> HashMap<String, V> {
        self.values
            .into_iter()
            .map(|(pattern, value)| (pattern.as_str().to_string(), value))
            .collect()
    }
}

impl<K: OutputKind> SiftBuilder<K> {
    /// Validate selectors and settings into a reusable extractor
    ///
    /// # Errors
    /// Returns the first rejected selector or a configuration error.
    pub fn build(self) -> SiftResult<PathExtractor> {
        if let Some(e) = self.error {
            return Err(e);
        }
        if self.debug_enabled {
            for pattern in &self.patterns {
                log::debug!("xmlsift: selector {pattern}");
            }
        }
        PathExtractor::new(self.patterns)
            .with_config(self.config)
            .map_err(SiftError::from)
    }

    /// Extract from an in-memory document
    ///
    /// # Errors
    /// Rejected selectors, invalid settings and malformed input are errors;
    /// unmatched selectors are simply absent from the result.
    pub fn from_str(self, xml: &str) -> SiftResult<Extracted<K::Value>> {
        let debug = self.debug_enabled;
        let extractor = self.build()?;
        run::<K, _>(&extractor, xml.as_bytes(), debug)
    }

    /// Extract from any reader
    ///
    /// # Errors
    /// See [`Self::from_str`]; read failures are stream errors.
    pub fn from_reader<R: Read>(self, input: R) -> SiftResult<Extracted<K::Value>> {
        let debug = self.debug_enabled;
        let extractor = self.build()?;
        let buffered = std::io::BufReader::with_capacity(extractor.config().buffer_capacity, input);
        run::<K, _>(&extractor, buffered, debug)
    }

    /// Extract from a file
    ///
    /// # Errors
    /// See [`Self::from_str`]; a file that cannot be opened is a resource error.
    pub fn from_file<P: AsRef<Path>>(self, path: P) -> SiftResult<Extracted<K::Value>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SiftError::resource(path.display().to_string(), e))?;
        self.from_reader(file)
    }

    /// Extract from a named resource
    ///
    /// # Errors
    /// See [`Self::from_str`]; loading failures are resource errors.
    pub fn from_resource(self, resources: &dyn ResourceReader, name: &str) -> SiftResult<Extracted<K::Value>> {
        let xml = resources.read_resource(name)?;
        self.from_str(&xml)
    }

    /// Value of the first selector added, if it matched
    ///
    /// # Errors
    /// See [`Self::from_str`].
    pub fn first(mut self, xml: &str) -> SiftResult<Option<K::Value>> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        let Some(pattern) = self.patterns.iter().next().cloned() else {
            return Ok(None);
        };
        let mut extracted = self.from_str(xml)?;
        Ok(extracted.values.remove(&pattern))
    }
}

fn run<K: OutputKind, R: std::io::BufRead>(
    extractor: &PathExtractor,
    input: R,
    debug: bool,
) -> SiftResult<Extracted<K::Value>> {
    let outcome = extractor.scan(input, K::REPRESENTATION)?;
    if debug {
        log::debug!(
            "xmlsift: {} of {} selector(s) matched, {} events, {} bytes, stopped early: {}",
            outcome.results.len(),
            extractor.patterns().len(),
            outcome.stats.events,
            outcome.stats.bytes_read,
            outcome.stats.stopped_early
        );
    }
    tracing::trace!(
        target: "xmlsift::api",
        matched = outcome.results.len(),
        representation = %K::REPRESENTATION,
        "extraction complete"
    );

    let mut values = HashMap::with_capacity(outcome.results.len());
    for (pattern, value) in outcome.results {
        values.insert(pattern, K::convert(value)?);
    }
    Ok(Extracted {
        values,
        stats: outcome.stats,
    })
}
