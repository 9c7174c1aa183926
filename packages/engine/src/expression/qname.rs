//! Qualified names in Clark notation

use std::fmt;
use std::str::FromStr;

use crate::error::{SiftError, SiftResult};

/// A (namespace URI, local name) pair
///
/// An empty namespace means "no namespace" on document elements and acts as a
/// wildcard when a selector segment is compared against a document element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct QualifiedName {
    namespace: String,
    local_name: String,
}

impl QualifiedName {
    /// Create a qualified name in the given namespace
    pub fn new(namespace: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            local_name: local_name.into(),
        }
    }

    /// Create a qualified name without a namespace
    pub fn local(local_name: impl Into<String>) -> Self {
        Self::new(String::new(), local_name)
    }

    #[inline]
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[inline]
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    #[inline]
    #[must_use]
    pub fn has_namespace(&self) -> bool {
        !self.namespace.is_empty()
    }

    /// Segment equality used by path matching
    ///
    /// Local names must be equal. Namespaces must be equal unless either
    /// side has none, in which case any namespace is accepted.
    #[must_use]
    pub fn matches(&self, other: &QualifiedName) -> bool {
        self.local_name == other.local_name
            && (self.namespace == other.namespace
                || self.namespace.is_empty()
                || other.namespace.is_empty())
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            f.write_str(&self.local_name)
        } else {
            write!(f, "{{{}}}{}", self.namespace, self.local_name)
        }
    }
}

impl FromStr for QualifiedName {
    type Err = SiftError;

    /// Parse `{uri}local` or `local`
    fn from_str(s: &str) -> SiftResult<Self> {
        let s = s.trim();
        let (namespace, local_name) = match s.strip_prefix('{') {
            Some(rest) => match rest.split_once('}') {
                Some((ns, local)) => (ns, local),
                None => return Err(SiftError::selector_syntax(s, "unclosed namespace brace")),
            },
            None => ("", s),
        };

        if local_name.is_empty() {
            return Err(SiftError::selector_syntax(s, "missing local name"));
        }
        if local_name.contains(['{', '}', '/']) {
            return Err(SiftError::selector_syntax(s, "stray characters in local name"));
        }

        Ok(Self::new(namespace, local_name))
    }
}
