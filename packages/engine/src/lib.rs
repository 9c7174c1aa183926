//! # xmlsift engine
//!
//! Streaming extraction of XML subtrees by path selector. One forward pass
//! over the input answers many selectors at once, without building the
//! document in memory.
//!
//! ## Features
//!
//! - **Path selectors** such as `//Order/{urn:items}Item@sku` with namespace
//!   braces, relative and absolute forms, and suffix matching
//! - **Single pass** over any `BufRead`, stopping as soon as every selector
//!   has a value
//! - **Standalone fragments** with the minimal set of namespace declarations
//! - **Three representations**: concatenated text, markup, or a small tree
//! - **Forward cursor** for hand-written navigation over the same tokenizer
//!
//! ## Usage
//!
//! ```rust
//! use xmlsift_engine::{PathExtractor, Representation};
//!
//! let xml = r#"<order xmlns="urn:o"><id>42</id><total>9.50</total></order>"#;
//! let extractor = PathExtractor::from_selectors(["//id", "/order/total"])?;
//! let results = extractor.extract_str(xml, Representation::Text)?;
//!
//! assert_eq!(results.get_selector("//id")?.and_then(|v| v.as_str()), Some("42"));
//! assert_eq!(results.get_selector("/order/total")?.and_then(|v| v.as_str()), Some("9.50"));
//! # Ok::<(), xmlsift_engine::SiftError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod expression;
pub mod extractors;
pub mod prelude;
pub mod resource;
pub mod serializer;
pub mod telemetry;
pub mod tokenizer;
pub mod tree;

pub use config::{ConfigurationError, ExtractorConfig};
pub use cursor::{ElementFilter, ScanCursor};
pub use engine::{Extraction, PathExtractor, PatternSet, ScanOutcome};
pub use error::{ErrorKind, SiftError, SiftResult};
pub use expression::{PathExpression, QualifiedName};
pub use extractors::{DocumentTypeExtractor, SimpleContentExtractor};
pub use resource::{read_to_string, FileResourceReader, ResourceReader};
pub use serializer::{ExtractedValue, Representation};
pub use telemetry::ScanStats;
pub use tree::{DefaultTreeBuilder, TreeBuilder, XmlElement, XmlNode};
