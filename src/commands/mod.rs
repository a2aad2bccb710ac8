//! CLI command implementations for mapgrid operations.

pub mod extract;

pub use extract::{handle_extract, ExtractConfig};
