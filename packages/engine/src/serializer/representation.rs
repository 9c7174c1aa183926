//! Output representations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{SiftError, SiftResult};
use crate::tree::XmlNode;

/// Requested output kind for extracted subtrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Representation {
    /// Concatenated character content
    #[default]
    Text,
    /// Standalone markup string
    Markup,
    /// Owned navigable tree
    TreeNode,
}

impl Representation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Representation::Text => "text",
            Representation::Markup => "markup",
            Representation::TreeNode => "node",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Representation {
    type Err = SiftError;

    /// Accepts `text`, `markup`/`xml`, `node`/`element`/`tree`, case-insensitively
    fn from_str(s: &str) -> SiftResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "string" => Ok(Representation::Text),
            "markup" | "xml" => Ok(Representation::Markup),
            "node" | "element" | "tree" => Ok(Representation::TreeNode),
            _ => Err(SiftError::unsupported_representation(s)),
        }
    }
}

impl Serialize for Representation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Representation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// One extracted subtree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedValue {
    Text(String),
    Markup(String),
    Node(XmlNode),
}

impl ExtractedValue {
    /// Representation this value was rendered in
    #[must_use]
    pub fn representation(&self) -> Representation {
        match self {
            ExtractedValue::Text(_) => Representation::Text,
            ExtractedValue::Markup(_) => Representation::Markup,
            ExtractedValue::Node(_) => Representation::TreeNode,
        }
    }

    /// Borrow the string form of a text or markup value
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ExtractedValue::Text(s) | ExtractedValue::Markup(s) => Some(s),
            ExtractedValue::Node(_) => None,
        }
    }

    #[must_use]
    pub fn as_node(&self) -> Option<&XmlNode> {
        match self {
            ExtractedValue::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Take the string form of a text or markup value
    ///
    /// # Errors
    /// Returns [`SiftError::UnsupportedRepresentation`] for tree values.
    pub fn into_string(self) -> SiftResult<String> {
        match self {
            ExtractedValue::Text(s) | ExtractedValue::Markup(s) => Ok(s),
            ExtractedValue::Node(_) => Err(SiftError::unsupported_representation(
                "node value requested as string",
            )),
        }
    }

    /// Take the tree form of a value
    ///
    /// # Errors
    /// Returns [`SiftError::UnsupportedRepresentation`] for string values.
    pub fn into_node(self) -> SiftResult<XmlNode> {
        match self {
            ExtractedValue::Node(node) => Ok(node),
            other => Err(SiftError::unsupported_representation(format!(
                "{} value requested as node",
                other.representation()
            ))),
        }
    }
}

impl fmt::Display for ExtractedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractedValue::Text(s) | ExtractedValue::Markup(s) => f.write_str(s),
            ExtractedValue::Node(node) => match node.to_markup() {
                Ok(markup) => f.write_str(&markup),
                Err(_) => Err(fmt::Error),
            },
        }
    }
}
