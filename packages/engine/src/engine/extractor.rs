//! `PathExtractor`: one configured engine instance

use std::io::{BufRead, BufReader, Read};
use std::sync::Arc;

use super::patterns::PatternSet;
use super::results::Extraction;
use super::scanner::Scanner;
use crate::config::{ConfigurationError, ExtractorConfig};
use crate::error::SiftResult;
use crate::serializer::Representation;
use crate::telemetry::ScanStats;
use crate::tree::{DefaultTreeBuilder, TreeBuilder};

/// Results of a scan together with its statistics
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub results: Extraction,
    pub stats: ScanStats,
}

/// Extracts the first match of each pattern from XML inputs
///
/// The extractor holds no per-scan state; every call to [`Self::extract`]
/// builds a fresh tokenizer for its input, so one instance can serve many
/// inputs and many threads.
#[derive(Clone)]
pub struct PathExtractor {
    patterns: PatternSet,
    config: ExtractorConfig,
    tree_builder: Arc<dyn TreeBuilder>,
}

impl std::fmt::Debug for PathExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathExtractor")
            .field("patterns", &self.patterns)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PathExtractor {
    #[must_use]
    pub fn new(patterns: PatternSet) -> Self {
        Self {
            patterns,
            config: ExtractorConfig::default(),
            tree_builder: Arc::new(DefaultTreeBuilder),
        }
    }

    /// Parse `selectors` into a new extractor
    ///
    /// # Errors
    /// Returns the first selector syntax error.
    pub fn from_selectors<I, S>(selectors: I) -> SiftResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(PatternSet::from_selectors(selectors)?))
    }

    /// Replace the configuration after validating it
    ///
    /// # Errors
    /// Returns [`ConfigurationError`] for out-of-range values.
    pub fn with_config(mut self, config: ExtractorConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Use a different builder for [`Representation::TreeNode`] values
    #[must_use]
    pub fn with_tree_builder(mut self, tree_builder: Arc<dyn TreeBuilder>) -> Self {
        self.tree_builder = tree_builder;
        self
    }

    #[inline]
    #[must_use]
    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Run one scan over a buffered input
    ///
    /// # Errors
    /// Malformed input or a read failure aborts the scan with a stream error;
    /// no partial mapping is returned.
    pub fn extract<R: BufRead>(&self, input: R, representation: Representation) -> SiftResult<Extraction> {
        self.scan(input, representation).map(|outcome| outcome.results)
    }

    /// Run one scan over an in-memory document
    ///
    /// # Errors
    /// See [`Self::extract`].
    pub fn extract_str(&self, xml: &str, representation: Representation) -> SiftResult<Extraction> {
        self.extract(xml.as_bytes(), representation)
    }

    /// Run one scan over an unbuffered reader
    ///
    /// # Errors
    /// See [`Self::extract`].
    pub fn extract_reader<R: Read>(
        &self,
        input: R,
        representation: Representation,
    ) -> SiftResult<Extraction> {
        let reader = BufReader::with_capacity(self.config.buffer_capacity, input);
        self.extract(reader, representation)
    }

    /// Run one scan and keep its statistics
    ///
    /// An empty pattern set returns an empty mapping without reading input.
    ///
    /// # Errors
    /// See [`Self::extract`].
    pub fn scan<R: BufRead>(&self, input: R, representation: Representation) -> SiftResult<ScanOutcome> {
        if self.patterns.is_empty() {
            let mut stats = ScanStats::new();
            stats.finish(0, true);
            return Ok(ScanOutcome {
                results: Extraction::new(),
                stats,
            });
        }

        let scanner = Scanner::new(
            input,
            &self.patterns,
            representation,
            &self.config,
            self.tree_builder.as_ref(),
        );
        let (results, stats) = scanner.run()?;
        Ok(ScanOutcome { results, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::PathExpression;
    use crate::serializer::ExtractedValue;

    const ORDER: &str = r#"<o:order xmlns:o="urn:o"><o:id>17</o:id><o:lines><o:line sku="a1">2</o:line><o:line sku="b2">5</o:line></o:lines></o:order>"#;

    #[test]
    fn first_match_wins() {
        let extractor = PathExtractor::from_selectors(["//line"]).expect("valid");
        let results = extractor.extract_str(ORDER, Representation::Text).expect("scan");
        assert_eq!(results.get_selector("//line").expect("valid"), Some(&ExtractedValue::Text("2".into())));
    }

    #[test]
    fn attribute_pattern_yields_attribute_value() {
        let extractor = PathExtractor::from_selectors(["//lines/line@sku"]).expect("valid");
        let results = extractor.extract_str(ORDER, Representation::Markup).expect("scan");
        assert_eq!(
            results.get_selector("//lines/line@sku").expect("valid"),
            Some(&ExtractedValue::Text("a1".into()))
        );
    }

    #[test]
    fn root_pattern_captures_document_element() {
        let extractor = PathExtractor::from_selectors(["/"]).expect("valid");
        let results = extractor.extract_str(ORDER, Representation::Text).expect("scan");
        assert_eq!(results.text(&PathExpression::root()), Some("1725"));
    }

    #[test]
    fn nested_patterns_are_captured_in_one_pass() {
        let extractor = PathExtractor::from_selectors(["//order/lines", "//lines/line"]).expect("valid");
        let outcome = extractor.scan(ORDER.as_bytes(), Representation::Text).expect("scan");
        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.results.get_selector("//order/lines").expect("valid").and_then(ExtractedValue::as_str), Some("25"));
        assert_eq!(outcome.results.get_selector("//lines/line").expect("valid").and_then(ExtractedValue::as_str), Some("2"));
        assert_eq!(outcome.stats.captures, 2);
    }

    #[test]
    fn stops_once_satisfied() {
        let extractor = PathExtractor::from_selectors(["//id"]).expect("valid");
        let outcome = extractor.scan(ORDER.as_bytes(), Representation::Text).expect("scan");
        assert!(outcome.stats.stopped_early);
        assert!(outcome.stats.bytes_read < ORDER.len() as u64);
    }

    #[test]
    fn exhaustive_config_reads_to_end() {
        let extractor = PathExtractor::from_selectors(["//id"])
            .expect("valid")
            .with_config(ExtractorConfig::exhaustive())
            .expect("config");
        let outcome = extractor.scan(ORDER.as_bytes(), Representation::Text).expect("scan");
        assert!(!outcome.stats.stopped_early);
        assert_eq!(outcome.stats.elements_opened, 5);
    }

    #[test]
    fn empty_pattern_set_reads_nothing() {
        let extractor = PathExtractor::new(PatternSet::new());
        let outcome = extractor.scan("not xml at all".as_bytes(), Representation::Text).expect("scan");
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.stats.events, 0);
    }

    #[test]
    fn tree_output_honours_configured_depth() {
        let xml = format!("{}{}", "<x>".repeat(600), "</x>".repeat(600));
        let extractor = PathExtractor::from_selectors(["/"])
            .expect("valid")
            .with_config(ExtractorConfig::default().with_max_depth(1000))
            .expect("config");

        let markup = extractor.extract_str(&xml, Representation::Markup).expect("markup scan");
        assert_eq!(markup.len(), 1);

        let tree = extractor.extract_str(&xml, Representation::TreeNode).expect("tree scan");
        let node = tree.get(&PathExpression::root()).and_then(ExtractedValue::as_node);
        assert_eq!(node.and_then(|n| n.as_element()).map(|e| e.local_name()), Some("x"));
    }

    #[test]
    fn malformed_input_fails_whole_scan() {
        let extractor = PathExtractor::from_selectors(["//a", "//zzz"]).expect("valid");
        let err = extractor
            .extract_str("<r><a>1</a><b></r>", Representation::Text)
            .expect_err("mismatched close");
        assert!(err.is_stream());
    }
}
