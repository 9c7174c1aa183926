//! Subtree serialization
//!
//! A captured element is rendered in one of three representations: its
//! character content, standalone markup, or an owned tree. Markup output is
//! namespace-minimal: each binding is declared once, at the first element of
//! the fragment that needs it, and the fragment never depends on declarations
//! made outside it.

mod capture;
mod markup;
mod representation;
mod text;

pub use capture::Capture;
pub use markup::MarkupWriter;
pub use representation::{ExtractedValue, Representation};
pub use text::TextCollector;
