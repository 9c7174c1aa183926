//! Tree node types

use crate::error::SiftResult;
use crate::expression::QualifiedName;
use crate::serializer::MarkupWriter;
use crate::tokenizer::{ElementEnd, ElementStart, NamespaceBinding, XmlAttribute};

/// A node of an extracted tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
    CData(String),
}

impl XmlNode {
    #[must_use]
    pub fn as_element(&self) -> Option<&XmlElement> {
        match self {
            XmlNode::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Value of a text or CDATA node; `None` for elements
    #[must_use]
    pub fn node_value(&self) -> Option<&str> {
        match self {
            XmlNode::Text(text) | XmlNode::CData(text) => Some(text),
            XmlNode::Element(_) => None,
        }
    }

    /// Character content of this node and its descendants
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            XmlNode::Text(text) | XmlNode::CData(text) => text.clone(),
            XmlNode::Element(element) => element.text_content(),
        }
    }

    /// Render as markup
    ///
    /// # Errors
    /// Fails only if the writer fails.
    pub fn to_markup(&self) -> SiftResult<String> {
        let mut writer = MarkupWriter::new(false);
        self.write_to(&mut writer)?;
        writer.finish()
    }

    /// Render as markup, optionally pretty-printed and with an XML declaration
    ///
    /// An `indent` of zero renders compactly, like [`Self::to_markup`].
    ///
    /// # Errors
    /// Fails only if the writer fails.
    pub fn to_markup_with(&self, indent: usize, declaration: bool) -> SiftResult<String> {
        let mut writer = if indent == 0 {
            MarkupWriter::new(false)
        } else {
            MarkupWriter::indented(false, indent)
        };
        if declaration {
            writer.declaration()?;
        }
        self.write_to(&mut writer)?;
        writer.finish()
    }

    fn write_to(&self, writer: &mut MarkupWriter) -> SiftResult<()> {
        match self {
            XmlNode::Text(text) => writer.characters(text),
            XmlNode::CData(content) => writer.cdata(content),
            XmlNode::Element(element) => {
                writer.start(&element.start_token())?;
                for child in &element.children {
                    child.write_to(writer)?;
                }
                writer.end(&ElementEnd {
                    name: element.name.clone(),
                    prefix: element.prefix.clone(),
                })
            }
        }
    }
}

/// An element with its attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub name: QualifiedName,
    pub prefix: Option<String>,
    pub attributes: Vec<XmlAttribute>,
    pub namespaces: Vec<NamespaceBinding>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    pub(crate) fn from_start(start: ElementStart) -> Self {
        Self {
            name: start.name,
            prefix: start.prefix,
            attributes: start.attributes,
            namespaces: start.namespaces,
            children: Vec::new(),
        }
    }

    fn start_token(&self) -> ElementStart {
        ElementStart {
            name: self.name.clone(),
            prefix: self.prefix.clone(),
            attributes: self.attributes.clone(),
            namespaces: self.namespaces.clone(),
        }
    }

    #[inline]
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.name.local_name()
    }

    #[inline]
    #[must_use]
    pub fn namespace_uri(&self) -> &str {
        self.name.namespace()
    }

    /// Name as written, e.g. `ord:quantity`
    #[must_use]
    pub fn node_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}:{}", self.name.local_name()),
            None => self.name.local_name().to_string(),
        }
    }

    /// Attribute value by local name
    #[must_use]
    pub fn attribute(&self, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name.local_name() == local_name)
            .map(|attr| attr.value.as_str())
    }

    #[must_use]
    pub fn first_child(&self) -> Option<&XmlNode> {
        self.children.first()
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    /// First descendant element (depth-first, document order) with this local name
    #[must_use]
    pub fn find(&self, local_name: &str) -> Option<&XmlElement> {
        for child in self.child_elements() {
            if child.local_name() == local_name {
                return Some(child);
            }
            if let Some(found) = child.find(local_name) {
                return Some(found);
            }
        }
        None
    }

    #[must_use]
    pub fn text_content(&self) -> String {
        self.children.iter().map(XmlNode::text_content).collect()
    }
}
