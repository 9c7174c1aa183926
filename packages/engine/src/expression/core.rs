//! The `PathExpression` type

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{
    matching::sequences_match, parser::parse_segments, qname::QualifiedName,
    validation::validate_selector,
};
use crate::error::{SiftError, SiftResult};

/// Immutable, path-like selector
///
/// Equality and hashing use the canonical selector string, so two expressions
/// built from different but equivalent text (`foo` and `//foo`) are equal.
/// Cloning is cheap: the segments are shared.
#[derive(Clone)]
pub struct PathExpression {
    selector: Arc<str>,
    segments: Arc<[QualifiedName]>,
    attribute: Option<Arc<str>>,
    relative: bool,
}

impl PathExpression {
    /// Parse a selector
    ///
    /// Text without a leading slash is treated as relative (`foo` becomes
    /// `//foo`).
    ///
    /// # Errors
    /// Returns [`SiftError::SelectorSyntax`] for empty or malformed text.
    pub fn new(selector: &str) -> SiftResult<Self> {
        let trimmed = selector.trim();
        if trimmed.is_empty() {
            return Err(SiftError::selector_syntax(selector, "selector is empty"));
        }

        let normalized = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("//{trimmed}")
        };

        validate_selector(&normalized)?;
        let (segments, attribute) = parse_segments(&normalized);
        let relative = normalized.starts_with("//");

        Ok(Self::from_parts(segments, relative, attribute))
    }

    /// Build an expression from segments
    ///
    /// An empty segment list always produces the absolute root expression.
    #[must_use]
    pub fn from_segments(segments: Vec<QualifiedName>, relative: bool) -> Self {
        Self::from_parts(segments, relative, None)
    }

    /// Absolute expression over the given segments
    #[must_use]
    pub fn absolute(segments: Vec<QualifiedName>) -> Self {
        Self::from_parts(segments, false, None)
    }

    /// The document root, `/`
    #[must_use]
    pub fn root() -> Self {
        Self::from_parts(Vec::new(), false, None)
    }

    fn from_parts(segments: Vec<QualifiedName>, relative: bool, attribute: Option<String>) -> Self {
        let relative = relative && !segments.is_empty();
        let attribute = if segments.is_empty() { None } else { attribute };
        let selector = render(&segments, relative, attribute.as_deref());
        Self {
            selector: Arc::from(selector),
            segments: Arc::from(segments),
            attribute: attribute.map(Arc::from),
            relative,
        }
    }

    /// Canonical selector text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.selector
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[QualifiedName] {
        &self.segments
    }

    #[inline]
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.relative
    }

    /// True for `/`
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Attribute named by a trailing `@attr`, if any
    #[inline]
    #[must_use]
    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// New expression with `qname` appended
    ///
    /// ```text
    /// /foo  push bar  ->  /foo/bar
    /// ```
    #[must_use]
    pub fn push(&self, qname: QualifiedName) -> Self {
        let mut segments = self.segments.to_vec();
        segments.push(qname);
        Self::from_parts(
            segments,
            self.relative,
            self.attribute.as_deref().map(str::to_string),
        )
    }

    /// New expression with the last segment removed
    ///
    /// Returns `None` for the root. Popping the only segment yields the
    /// absolute root, whatever the original flag was.
    ///
    /// ```text
    /// /foo/bar -> /foo
    /// //foo    -> /
    /// /        -> None
    /// ```
    #[must_use]
    pub fn pop(&self) -> Option<Self> {
        let (_, remaining) = self.segments.split_last()?;
        Some(Self::from_parts(
            remaining.to_vec(),
            self.relative,
            self.attribute.as_deref().map(str::to_string),
        ))
    }

    /// Suffix match against another expression
    ///
    /// Symmetric and reflexive. A segment without a namespace matches the same
    /// local name in any namespace. Two absolute expressions of different
    /// length never match.
    #[must_use]
    pub fn matches(&self, other: &PathExpression) -> bool {
        sequences_match(&self.segments, self.relative, &other.segments, other.relative)
    }

    /// Match against an absolute element path such as a scan's ancestor stack
    #[must_use]
    pub fn matches_path(&self, path: &[QualifiedName]) -> bool {
        sequences_match(&self.segments, self.relative, path, false)
    }
}

fn render(segments: &[QualifiedName], relative: bool, attribute: Option<&str>) -> String {
    let mut out = String::from(if relative { "//" } else { "/" });
    for (i, qname) in segments.iter().enumerate() {
        if i > 0 {
            out.push('/');
        }
        out.push_str(&qname.to_string());
    }
    if let Some(attr) = attribute {
        out.push('@');
        out.push_str(attr);
    }
    out
}

impl PartialEq for PathExpression {
    fn eq(&self, other: &Self) -> bool {
        self.selector == other.selector
    }
}

impl Eq for PathExpression {}

impl Hash for PathExpression {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Borrow<str> for PathExpression {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for PathExpression {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector)
    }
}

impl fmt::Debug for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PathExpression").field(&self.as_str()).finish()
    }
}

impl FromStr for PathExpression {
    type Err = SiftError;

    fn from_str(s: &str) -> SiftResult<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for PathExpression {
    type Error = SiftError;

    fn try_from(value: &str) -> SiftResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for PathExpression {
    type Error = SiftError;

    fn try_from(value: String) -> SiftResult<Self> {
        Self::new(&value)
    }
}

impl Serialize for PathExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PathExpression {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let selector = String::deserialize(deserializer)?;
        Self::new(&selector).map_err(serde::de::Error::custom)
    }
}
