//! xmlsift Public API
//!
//! Fluent, single-pass extraction of XML subtrees by path selector. Pick an
//! output kind, add selectors, then run one terminal method over the input.
//!
//! ```
//! use xmlsift::Sift;
//!
//! let xml = r#"<o:order xmlns:o="urn:orders"><o:id>42</o:id><o:note>rush</o:note></o:order>"#;
//!
//! let markup = Sift::markup().select("//order/note").first(xml)?;
//! assert_eq!(markup.as_deref(), Some(r#"<o:note xmlns:o="urn:orders">rush</o:note>"#));
//!
//! let text = Sift::text().select_all(["//id", "//note"]).from_str(xml)?;
//! assert_eq!(text.get("id").map(String::as_str), Some("42"));
//! # Ok::<(), xmlsift::SiftError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::*;

// Re-export the engine surface callers need alongside the builder
pub use xmlsift_engine::{
    DocumentTypeExtractor, ElementFilter, ErrorKind, ExtractedValue, ExtractorConfig,
    FileResourceReader, PathExpression, PathExtractor, QualifiedName, Representation,
    ResourceReader, ScanCursor, ScanStats, SiftError, SiftResult, SimpleContentExtractor,
    XmlElement, XmlNode,
};

/// Main xmlsift entry point providing static builder methods
pub struct Sift;

impl Sift {
    /// Builder yielding concatenated text
    ///
    /// Shorthand for `SiftBuilder::text()`
    #[must_use]
    pub fn text() -> SiftBuilder<AsText> {
        SiftBuilder::text()
    }

    /// Builder yielding standalone markup fragments
    ///
    /// Shorthand for `SiftBuilder::markup()`
    #[must_use]
    pub fn markup() -> SiftBuilder<AsMarkup> {
        SiftBuilder::markup()
    }

    /// Builder yielding owned trees
    ///
    /// Shorthand for `SiftBuilder::tree()`
    #[must_use]
    pub fn tree() -> SiftBuilder<AsTree> {
        SiftBuilder::tree()
    }

    /// Qualified name of the document element in `{uri}local` form
    ///
    /// # Errors
    /// Fails if the prolog is malformed or there is no root element.
    pub fn document_type(xml: &str) -> SiftResult<String> {
        DocumentTypeExtractor::new().extract_document_type(xml)
    }

    /// Forward cursor over an in-memory document
    #[must_use]
    pub fn cursor(xml: &str) -> ScanCursor<&[u8]> {
        ScanCursor::from_str(xml)
    }
}

/// Builder yielding concatenated text
///
/// Shorthand for `Sift::text()`
#[must_use]
pub fn text() -> SiftBuilder<AsText> {
    SiftBuilder::text()
}

/// Builder yielding standalone markup fragments
///
/// Shorthand for `Sift::markup()`
#[must_use]
pub fn markup() -> SiftBuilder<AsMarkup> {
    SiftBuilder::markup()
}

/// Builder yielding owned trees
///
/// Shorthand for `Sift::tree()`
#[must_use]
pub fn tree() -> SiftBuilder<AsTree> {
    SiftBuilder::tree()
}
