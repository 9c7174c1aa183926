//! Output kind markers
//!
//! The type parameter of [`crate::SiftBuilder`] fixes the representation at
//! compile time, so terminal methods return concrete value types instead of
//! a tagged [`ExtractedValue`].

use xmlsift_engine::{ExtractedValue, Representation, SiftResult, XmlNode};

/// Conversion from an engine value to the builder's value type
pub trait OutputKind {
    /// Value type handed to callers
    type Value;

    /// Representation requested from the engine
    const REPRESENTATION: Representation;

    /// # Errors
    /// Fails when the engine produced a different representation.
    fn convert(value: ExtractedValue) -> SiftResult<Self::Value>;
}

/// Concatenated character content
#[derive(Debug, Clone, Copy, Default)]
pub struct AsText;

/// Standalone markup fragment
#[derive(Debug, Clone, Copy, Default)]
pub struct AsMarkup;

/// Owned navigable tree
#[derive(Debug, Clone, Copy, Default)]
pub struct AsTree;

impl OutputKind for AsText {
    type Value = String;
    const REPRESENTATION: Representation = Representation::Text;

    fn convert(value: ExtractedValue) -> SiftResult<String> {
        value.into_string()
    }
}

impl OutputKind for AsMarkup {
    type Value = String;
    const REPRESENTATION: Representation = Representation::Markup;

    // Attribute selectors yield text whatever was requested
    fn convert(value: ExtractedValue) -> SiftResult<String> {
        value.into_string()
    }
}

impl OutputKind for AsTree {
    type Value = XmlNode;
    const REPRESENTATION: Representation = Representation::TreeNode;

    fn convert(value: ExtractedValue) -> SiftResult<XmlNode> {
        match value {
            ExtractedValue::Text(text) => Ok(XmlNode::Text(text)),
            other => other.into_node(),
        }
    }
}
