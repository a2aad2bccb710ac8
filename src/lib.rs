// Export modules for library usage
pub mod builder;
pub mod cli;
pub mod commands;
pub mod core;
pub mod discover;
pub mod extract;
pub mod output;

// Re-export commonly used types
pub use crate::core::{Error, GameMode, MapCollection, MapRecord, Result};

pub use crate::builder::collect_maps;
pub use crate::extract::{detect_game_modes, extract_fields, LevelFields};
