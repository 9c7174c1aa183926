//! xmlsift prelude
//!
//! The types most callers need to run an extraction.

// Selectors
pub use crate::expression::{PathExpression, QualifiedName};

// Engine
pub use crate::engine::{Extraction, PathExtractor, PatternSet, ScanOutcome};
pub use crate::config::ExtractorConfig;

// Values
pub use crate::serializer::{ExtractedValue, Representation};
pub use crate::tree::{XmlElement, XmlNode};

// Errors
pub use crate::error::{ErrorKind, SiftError, SiftResult};
