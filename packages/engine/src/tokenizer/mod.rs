//! Pull tokenizer producing namespace-resolved XML events
//!
//! Wraps `quick_xml::Reader` and adds what the extraction engine needs on top
//! of raw tokens: prefix resolution through a scope stack, expansion of empty
//! elements into open/close pairs, and strict well-formedness checks at end of
//! input.

mod core;
mod events;
mod namespaces;

pub use self::core::XmlTokenizer;
pub use events::{ElementEnd, ElementStart, NamespaceBinding, XmlAttribute, XmlEvent};
pub use namespaces::{NamespaceScope, XMLNS_NAMESPACE, XML_NAMESPACE};
