//! Owned XML trees for the `TreeNode` representation
//!
//! Trees are detached copies: they own their data, can be cloned freely and
//! outlive the scan that produced them.

mod builder;
mod node;

pub use builder::{DefaultTreeBuilder, TreeBuilder};
pub use node::{XmlElement, XmlNode};
