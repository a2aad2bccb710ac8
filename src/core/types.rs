//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Game modes a map can support, in detection order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Ground,
    Air,
    Naval,
    Unknown,
}

impl GameMode {
    /// Get the token used in serialized output for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Ground => "ground",
            GameMode::Air => "air",
            GameMode::Naval => "naval",
            GameMode::Unknown => "unknown",
        }
    }
}

/// One entry per discovered map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRecord {
    /// Raw directory name, unique key within the collection
    pub name: String,
    /// Display name derived from `name`
    pub localized_name: String,
    /// Map size [width, height] in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_size: Option<[f64; 2]>,
    /// Grid step for ground vehicles (tanks) in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground_grid_step: Option<f64>,
    /// Grid step for aircraft in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_grid_step: Option<f64>,
    /// Grid step for naval in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naval_grid_step: Option<f64>,
    /// Game modes available on this map, never empty
    pub game_modes: Vec<GameMode>,
}

/// Collection of records keyed by map name.
///
/// A `BTreeMap` keeps the records in lexical key order, which both
/// serializers rely on, and `insert` gives last-write-wins semantics when the
/// same name is discovered twice.
pub type MapCollection = BTreeMap<String, MapRecord>;

/// Derive a display name from a raw map directory name: strip the `avg_`
/// prefix, replace underscores with spaces, and title-case each word.
pub fn localize_name(name: &str) -> String {
    let stripped = name.strip_prefix("avg_").unwrap_or(name);
    stripped
        .split('_')
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localize_strips_prefix_and_title_cases() {
        assert_eq!(localize_name("avg_european_province"), "European Province");
        assert_eq!(localize_name("avg_mozdok"), "Mozdok");
    }

    #[test]
    fn localize_without_prefix() {
        assert_eq!(localize_name("air_afghan"), "Air Afghan");
    }

    #[test]
    fn localize_lowercases_the_rest_of_each_word() {
        assert_eq!(localize_name("avg_NORMANDY"), "Normandy");
    }

    #[test]
    fn duplicate_names_overwrite_in_collection() {
        let record = |step| MapRecord {
            name: "avg_mozdok".to_string(),
            localized_name: localize_name("avg_mozdok"),
            map_size: None,
            ground_grid_step: Some(step),
            air_grid_step: None,
            naval_grid_step: None,
            game_modes: vec![GameMode::Ground],
        };

        let mut maps = MapCollection::new();
        maps.insert("avg_mozdok".to_string(), record(200.0));
        maps.insert("avg_mozdok".to_string(), record(225.0));

        assert_eq!(maps.len(), 1);
        assert_eq!(maps["avg_mozdok"].ground_grid_step, Some(225.0));
    }
}
