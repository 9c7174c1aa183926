//! Single-selector extraction

use std::io::Read;

use crate::engine::{PathExtractor, PatternSet};
use crate::error::SiftResult;
use crate::expression::PathExpression;
use crate::serializer::{ExtractedValue, Representation};

/// Extracts the first match of one selector
///
/// `None` means the selector matched nothing.
#[derive(Debug, Clone)]
pub struct SimpleContentExtractor {
    pattern: PathExpression,
    extractor: PathExtractor,
}

impl SimpleContentExtractor {
    /// # Errors
    /// Returns a selector syntax error for invalid `selector` text.
    pub fn new(selector: &str) -> SiftResult<Self> {
        Ok(Self::from_expression(PathExpression::new(selector)?))
    }

    #[must_use]
    pub fn from_expression(pattern: PathExpression) -> Self {
        let extractor = PathExtractor::new(PatternSet::from(pattern.clone()));
        Self { pattern, extractor }
    }

    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &PathExpression {
        &self.pattern
    }

    /// Standalone markup of the first match
    ///
    /// # Errors
    /// Malformed input is a stream error.
    pub fn extract_element(&self, xml: &str) -> SiftResult<Option<String>> {
        self.extract_element_as(xml, Representation::Markup)?
            .map(ExtractedValue::into_string)
            .transpose()
    }

    /// First match in the requested representation
    ///
    /// # Errors
    /// Malformed input is a stream error.
    pub fn extract_element_as(
        &self,
        xml: &str,
        representation: Representation,
    ) -> SiftResult<Option<ExtractedValue>> {
        let mut results = self.extractor.extract_str(xml, representation)?;
        Ok(results.take(&self.pattern))
    }

    /// Concatenated text of the first match
    ///
    /// # Errors
    /// Malformed input is a stream error.
    pub fn extract_element_text(&self, xml: &str) -> SiftResult<Option<String>> {
        self.extract_element_as(xml, Representation::Text)?
            .map(ExtractedValue::into_string)
            .transpose()
    }

    /// Reader form of [`Self::extract_element`]
    ///
    /// # Errors
    /// Malformed input or a read failure is a stream error.
    pub fn extract_element_from<R: Read>(&self, input: R) -> SiftResult<Option<String>> {
        self.extract_element_as_from(input, Representation::Markup)?
            .map(ExtractedValue::into_string)
            .transpose()
    }

    /// Reader form of [`Self::extract_element_as`]
    ///
    /// # Errors
    /// Malformed input or a read failure is a stream error.
    pub fn extract_element_as_from<R: Read>(
        &self,
        input: R,
        representation: Representation,
    ) -> SiftResult<Option<ExtractedValue>> {
        let mut results = self.extractor.extract_reader(input, representation)?;
        Ok(results.take(&self.pattern))
    }

    /// Reader form of [`Self::extract_element_text`]
    ///
    /// # Errors
    /// Malformed input or a read failure is a stream error.
    pub fn extract_element_text_from<R: Read>(&self, input: R) -> SiftResult<Option<String>> {
        self.extract_element_as_from(input, Representation::Text)?
            .map(ExtractedValue::into_string)
            .transpose()
    }
}
