//! Single-pass streaming extraction
//!
//! The engine pulls tokens, keeps the ancestor stack of open elements, and
//! tests the stack against every pattern that has no value yet. The first
//! element a pattern matches is captured through its balanced close and
//! rendered; later matches for that pattern are ignored. Scanning stops as
//! soon as every pattern has a value.

mod extractor;
mod patterns;
mod results;
mod scanner;

pub use extractor::{PathExtractor, ScanOutcome};
pub use patterns::PatternSet;
pub use results::Extraction;
