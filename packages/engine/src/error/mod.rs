//! Error handling for selector parsing and streaming extraction
//!
//! Provides the error type shared by every stage of the pipeline, the
//! classification used by callers, and conversions from the tokenizer's
//! error types.

mod constructors;
mod conversions;
mod types;

pub use types::{ErrorKind, SiftError, SiftResult};
