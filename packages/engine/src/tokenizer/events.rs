//! Event types emitted by [`super::XmlTokenizer`]

use crate::expression::QualifiedName;

/// A namespace declaration: `xmlns="uri"` or `xmlns:prefix="uri"`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespaceBinding {
    pub prefix: Option<String>,
    pub uri: String,
}

impl NamespaceBinding {
    pub fn new(prefix: Option<&str>, uri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.map(str::to_string),
            uri: uri.into(),
        }
    }

    /// Attribute name used to declare this binding
    #[must_use]
    pub fn attribute_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("xmlns:{prefix}"),
            None => "xmlns".to_string(),
        }
    }
}

/// A regular (non-declaration) attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    pub prefix: Option<String>,
    pub name: QualifiedName,
    pub value: String,
}

impl XmlAttribute {
    /// Name as written in the source, `prefix:local` or `local`
    #[must_use]
    pub fn raw_name(&self) -> String {
        raw_name(self.prefix.as_deref(), self.name.local_name())
    }
}

/// An element-open token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementStart {
    /// Resolved name
    pub name: QualifiedName,
    /// Prefix as written in the source
    pub prefix: Option<String>,
    /// Attributes in document order, declarations excluded
    pub attributes: Vec<XmlAttribute>,
    /// Namespace declarations written on this element, in document order
    pub namespaces: Vec<NamespaceBinding>,
}

impl ElementStart {
    /// Name as written in the source
    #[must_use]
    pub fn raw_name(&self) -> String {
        raw_name(self.prefix.as_deref(), self.name.local_name())
    }

    /// Binding that gives this element its namespace
    #[must_use]
    pub fn name_binding(&self) -> NamespaceBinding {
        NamespaceBinding::new(self.prefix.as_deref(), self.name.namespace())
    }

    /// Look up an attribute by local name
    #[must_use]
    pub fn attribute(&self, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.local_name() == local_name)
            .map(|a| a.value.as_str())
    }
}

/// An element-close token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementEnd {
    pub name: QualifiedName,
    pub prefix: Option<String>,
}

impl ElementEnd {
    #[must_use]
    pub fn raw_name(&self) -> String {
        raw_name(self.prefix.as_deref(), self.name.local_name())
    }
}

/// Token stream item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlEvent {
    StartDocument,
    StartElement(ElementStart),
    /// Unescaped character data
    Characters(String),
    /// CDATA section content, verbatim
    CData(String),
    EndElement(ElementEnd),
    EndDocument,
}

pub(crate) fn raw_name(prefix: Option<&str>, local_name: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}:{local_name}"),
        None => local_name.to_string(),
    }
}
