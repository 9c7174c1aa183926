//! Fluent extraction builder
//!
//! Selectors and settings are collected first; a terminal method then runs
//! the scan and converts every value to the builder's output kind.

mod core;
mod output;
mod settings;
mod terminal;

pub use self::core::SiftBuilder;
pub use output::{AsMarkup, AsText, AsTree, OutputKind};
pub use terminal::Extracted;
