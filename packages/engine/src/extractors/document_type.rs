//! Document element identification

use std::io::BufRead;

use crate::cursor::{ElementFilter, ScanCursor};
use crate::error::{SiftError, SiftResult};
use crate::expression::QualifiedName;

/// Reports the qualified name of a document's root element
///
/// Only the prolog and the root's open tag are read.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTypeExtractor;

impl DocumentTypeExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Root element name in `{uri}local` form (plain `local` without a namespace)
    ///
    /// # Errors
    /// Fails if the prolog is malformed or there is no root element.
    pub fn extract_document_type(&self, xml: &str) -> SiftResult<String> {
        self.document_name(xml.as_bytes()).map(|name| name.to_string())
    }

    /// Root element name of a buffered input
    ///
    /// # Errors
    /// See [`Self::extract_document_type`].
    pub fn document_name<R: BufRead>(&self, input: R) -> SiftResult<QualifiedName> {
        let mut cursor = ScanCursor::new(input);
        if !cursor.next_element(&ElementFilter::any())? {
            return Err(SiftError::stream("document has no root element"));
        }
        cursor
            .current_name()
            .cloned()
            .ok_or_else(|| SiftError::stream("document has no root element"))
    }
}
