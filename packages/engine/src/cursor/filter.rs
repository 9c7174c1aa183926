//! Element filters for cursor navigation

use crate::expression::QualifiedName;

/// Selects element-open tokens by local name and optional namespace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementFilter {
    local_name: Option<String>,
    namespace: Option<String>,
}

impl ElementFilter {
    /// Accept every element
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Accept elements with this local name in any namespace
    #[must_use]
    pub fn local(local_name: impl Into<String>) -> Self {
        Self {
            local_name: Some(local_name.into()),
            namespace: None,
        }
    }

    /// Accept elements with exactly this namespace and local name
    #[must_use]
    pub fn qualified(namespace: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            local_name: Some(local_name.into()),
            namespace: Some(namespace.into()),
        }
    }

    #[must_use]
    pub fn matches(&self, name: &QualifiedName) -> bool {
        let Some(local_name) = &self.local_name else {
            return true;
        };
        if name.local_name() != local_name {
            return false;
        }
        self.namespace
            .as_deref()
            .map_or(true, |namespace| namespace == name.namespace())
    }
}

impl From<&str> for ElementFilter {
    fn from(local_name: &str) -> Self {
        Self::local(local_name)
    }
}

impl From<&QualifiedName> for ElementFilter {
    fn from(name: &QualifiedName) -> Self {
        Self::qualified(name.namespace(), name.local_name())
    }
}
