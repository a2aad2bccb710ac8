//! Field extraction from `level.blk` text.
//!
//! Extracted level files are loosely formatted key:value text, not a real
//! grammar, so each field is matched independently against the whole file
//! content with a fixed pattern. A field whose pattern does not match is
//! absent; one missing or garbled field never blocks the others.

use crate::core::GameMode;
use once_cell::sync::Lazy;
use regex::Regex;

// Pre-compiled patterns. The capture groups only admit valid decimal
// lexemes, so parsing a match can only fail on overflow.
static MAP_SIZE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"mapSize\s*:\s*\[\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)\s*\]").unwrap()
});
static GROUND_GRID_STEP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bgridStep\s*:\s*(\d+(?:\.\d+)?)").unwrap());
static AIR_GRID_STEP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bairGridStep\s*:\s*(\d+(?:\.\d+)?)").unwrap());
static NAVAL_GRID_STEP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bnavalGridStep\s*:\s*(\d+(?:\.\d+)?)").unwrap());

/// Fields extracted from one level file, each independently optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelFields {
    pub map_size: Option<[f64; 2]>,
    pub ground_grid_step: Option<f64>,
    pub air_grid_step: Option<f64>,
    pub naval_grid_step: Option<f64>,
    pub game_modes: Vec<GameMode>,
}

/// Run every field extractor over the file content
pub fn extract_fields(content: &str) -> LevelFields {
    LevelFields {
        map_size: extract_map_size(content),
        ground_grid_step: extract_ground_grid_step(content),
        air_grid_step: extract_air_grid_step(content),
        naval_grid_step: extract_naval_grid_step(content),
        game_modes: detect_game_modes(content),
    }
}

/// Extract the `mapSize: [w, h]` pair, first match anywhere in the text
pub fn extract_map_size(content: &str) -> Option<[f64; 2]> {
    let caps = MAP_SIZE.captures(content)?;
    let width = parse_finite(caps.get(1)?.as_str())?;
    let height = parse_finite(caps.get(2)?.as_str())?;
    Some([width, height])
}

/// Extract `gridStep`, the grid spacing for ground vehicles
pub fn extract_ground_grid_step(content: &str) -> Option<f64> {
    extract_step(&GROUND_GRID_STEP, content)
}

/// Extract `airGridStep`, the grid spacing for aircraft
pub fn extract_air_grid_step(content: &str) -> Option<f64> {
    extract_step(&AIR_GRID_STEP, content)
}

/// Extract `navalGridStep`, the grid spacing for ships
pub fn extract_naval_grid_step(content: &str) -> Option<f64> {
    extract_step(&NAVAL_GRID_STEP, content)
}

/// Detect supported game modes by case-insensitive substring presence.
/// Detection order is fixed (ground, air, naval) so output stays
/// deterministic; `unknown` is the fallback when nothing matches.
pub fn detect_game_modes(content: &str) -> Vec<GameMode> {
    let lower = content.to_lowercase();
    let mut modes = Vec::new();

    if lower.contains("ground") || lower.contains("tank") {
        modes.push(GameMode::Ground);
    }
    if lower.contains("air") {
        modes.push(GameMode::Air);
    }
    if lower.contains("naval") {
        modes.push(GameMode::Naval);
    }

    if modes.is_empty() {
        modes.push(GameMode::Unknown);
    }
    modes
}

fn extract_step(pattern: &Regex, content: &str) -> Option<f64> {
    pattern
        .captures(content)
        .and_then(|caps| caps.get(1))
        .and_then(|lexeme| parse_finite(lexeme.as_str()))
}

fn parse_finite(lexeme: &str) -> Option<f64> {
    lexeme.parse::<f64>().ok().filter(|value| value.is_finite())
}
