//! Namespace prefix scopes

use super::events::NamespaceBinding;

/// Namespace bound to the reserved `xml` prefix
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";
/// Namespace of `xmlns` declarations
pub const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";

/// Stack of declaration frames, one per open element
#[derive(Debug, Default, Clone)]
pub struct NamespaceScope {
    frames: Vec<Vec<NamespaceBinding>>,
}

impl NamespaceScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_frame(&mut self, declarations: Vec<NamespaceBinding>) {
        self.frames.push(declarations);
    }

    pub fn pop_frame(&mut self) {
        self.frames.pop();
    }

    /// Resolve a prefix to its namespace URI
    ///
    /// `None` resolves the default namespace, which is the empty string when
    /// undeclared. A named prefix without a declaration resolves to `None`.
    #[must_use]
    pub fn resolve(&self, prefix: Option<&str>) -> Option<&str> {
        match prefix {
            Some("xml") => return Some(XML_NAMESPACE),
            Some("xmlns") => return Some(XMLNS_NAMESPACE),
            _ => {}
        }

        let found = self
            .frames
            .iter()
            .rev()
            .flat_map(|frame| frame.iter().rev())
            .find(|binding| binding.prefix.as_deref() == prefix)
            .map(|binding| binding.uri.as_str());

        match (found, prefix) {
            (Some(uri), _) => Some(uri),
            (None, None) => Some(""),
            (None, Some(_)) => None,
        }
    }

    /// Effective bindings, innermost declaration of each prefix winning
    #[must_use]
    pub fn in_scope(&self) -> Vec<NamespaceBinding> {
        let mut seen: Vec<NamespaceBinding> = Vec::new();
        for binding in self.frames.iter().rev().flat_map(|frame| frame.iter().rev()) {
            if !seen.iter().any(|b| b.prefix == binding.prefix) {
                seen.push(binding.clone());
            }
        }
        seen.reverse();
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_frames_shadow_outer_frames() {
        let mut scope = NamespaceScope::new();
        scope.push_frame(vec![
            NamespaceBinding::new(None, "urn:outer"),
            NamespaceBinding::new(Some("a"), "urn:a"),
        ]);
        scope.push_frame(vec![NamespaceBinding::new(None, "urn:inner")]);

        assert_eq!(scope.resolve(None), Some("urn:inner"));
        assert_eq!(scope.resolve(Some("a")), Some("urn:a"));
        assert_eq!(scope.resolve(Some("b")), None);

        scope.pop_frame();
        assert_eq!(scope.resolve(None), Some("urn:outer"));
        assert_eq!(scope.in_scope().len(), 2);
    }

    #[test]
    fn default_namespace_is_empty_when_undeclared() {
        let scope = NamespaceScope::new();
        assert_eq!(scope.resolve(None), Some(""));
        assert_eq!(scope.resolve(Some("xml")), Some(XML_NAMESPACE));
    }
}
