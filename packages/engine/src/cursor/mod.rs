//! Forward-only cursor over one document
//!
//! [`ScanCursor`] is the imperative counterpart to [`crate::PathExtractor`]:
//! callers step through elements themselves and pull text, counts or
//! rendered subtrees as they go. Like the tokenizer underneath, a cursor is
//! bound to a single input and is not reusable.

mod core;
mod filter;

pub use self::core::ScanCursor;
pub use filter::ElementFilter;
