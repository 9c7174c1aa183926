//! Path expressions: the selector language used to pick subtrees
//!
//! A selector is a slash separated list of qualified names, either absolute
//! (`/a/b`) or relative (`//a/b`, which matches at any depth). Each segment may
//! carry an explicit namespace in Clark notation (`{uri}local`) and the last
//! segment may name an attribute (`/a/b@id`).
//!
//! ```text
//! /
//! //foo
//! /foo/bar/car@attr
//! //{http://com.example/order}foo/bar
//! ```

mod core;
mod matching;
mod parser;
mod qname;
mod validation;

pub use self::core::PathExpression;
pub use qname::QualifiedName;
pub use validation::validate_selector;
