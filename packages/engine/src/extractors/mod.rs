//! Convenience extractors built on the engine and the cursor

mod document_type;
mod simple;

pub use document_type::DocumentTypeExtractor;
pub use simple::SimpleContentExtractor;
