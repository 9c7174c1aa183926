//! Result mapping for one scan

use hashbrown::HashMap;

use crate::error::SiftResult;
use crate::expression::PathExpression;
use crate::serializer::ExtractedValue;

/// Pattern → value mapping produced by one scan
///
/// A pattern without an entry never matched; that is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    values: HashMap<PathExpression, ExtractedValue>,
}

impl Extraction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the first value for a pattern; later values are ignored
    pub(crate) fn record(&mut self, pattern: PathExpression, value: ExtractedValue) -> bool {
        if self.values.contains_key(&pattern) {
            return false;
        }
        self.values.insert(pattern, value);
        true
    }

    #[must_use]
    pub fn get(&self, pattern: &PathExpression) -> Option<&ExtractedValue> {
        self.values.get(pattern)
    }

    /// Look up by selector text, normalized the same way as
    /// [`PathExpression::new`]
    ///
    /// # Errors
    /// Fails if `selector` is not a valid selector.
    pub fn get_selector(&self, selector: &str) -> SiftResult<Option<&ExtractedValue>> {
        let pattern = PathExpression::new(selector)?;
        Ok(self.values.get(pattern.as_str()))
    }

    /// String form of a text or markup value
    #[must_use]
    pub fn text(&self, pattern: &PathExpression) -> Option<&str> {
        self.get(pattern).and_then(ExtractedValue::as_str)
    }

    /// Remove and return the value for `pattern`
    pub fn take(&mut self, pattern: &PathExpression) -> Option<ExtractedValue> {
        self.values.remove(pattern)
    }

    #[must_use]
    pub fn contains(&self, pattern: &PathExpression) -> bool {
        self.values.contains_key(pattern)
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

    pub fn iter(&self) -> impl Iterator<Item = (&PathExpression, &ExtractedValue)> {
        self.values.iter()
    }

    /// Mapping from canonical selector text to value
    #[must_use]
    pub fn into_selector_map(self) -> HashMap<String, ExtractedValue> {
        self.values
            .into_iter()
            .map(|(pattern, value)| (pattern.as_str().to_string(), value))
            .collect()
    }
}

impl IntoIterator for Extraction {
    type Item = (PathExpression, ExtractedValue);
    type IntoIter = hashbrown::hash_map::IntoIter<PathExpression, ExtractedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
