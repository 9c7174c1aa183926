//! Pattern sets

use crate::error::SiftResult;
use crate::expression::PathExpression;

/// Ordered set of path expressions, unique by canonical selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<PathExpression>,
}

impl PatternSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every selector
    ///
    /// # Errors
    /// Returns the first selector syntax error.
    pub fn from_selectors<I, S>(selectors: I) -> SiftResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for selector in selectors {
            set.insert(PathExpression::new(selector.as_ref())?);
        }
        Ok(set)
    }

    /// Add a pattern; returns `false` if an equal pattern was already present
    pub fn insert(&mut self, pattern: PathExpression) -> bool {
        if self.patterns.contains(&pattern) {
            return false;
        }
        self.patterns.push(pattern);
        true
    }

    #[must_use]
    pub fn contains(&self, pattern: &PathExpression) -> bool {
        self.patterns.contains(pattern)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathExpression> {
        self.patterns.iter()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[PathExpression] {
        &self.patterns
    }
}

impl FromIterator<PathExpression> for PatternSet {
    fn from_iter<T: IntoIterator<Item = PathExpression>>(iter: T) -> Self {
        let mut set = Self::new();
        for pattern in iter {
            set.insert(pattern);
        }
        set
    }
}

impl From<PathExpression> for PatternSet {
    fn from(pattern: PathExpression) -> Self {
        Self {
            patterns: vec![pattern],
        }
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a PathExpression;
    type IntoIter = std::slice::Iter<'a, PathExpression>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse_by_canonical_text() {
        let set = PatternSet::from_selectors(["foo", "//foo", "/foo"]).expect("valid");
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[0].as_str(), "//foo");
        assert_eq!(set.as_slice()[1].as_str(), "/foo");
    }

    #[test]
    fn first_bad_selector_fails_the_set() {
        assert!(PatternSet::from_selectors(["//ok", "//bad/"]).is_err());
    }
}
