//! Interchange document serialization.
//!
//! The document is pretty-printed JSON keyed by map name. Absent optional
//! fields are omitted entirely, never emitted as `null`: a consumer must
//! treat a missing key as "unknown", not "zero". Records appear in lexical
//! name order, the same order the source generator uses.

use crate::core::{MapCollection, Result};

/// Render the collection as the JSON database document
pub fn to_document(maps: &MapCollection) -> Result<String> {
    Ok(serde_json::to_string_pretty(maps)?)
}

/// Re-parse a document produced by [`to_document`]
pub fn from_document(text: &str) -> Result<MapCollection> {
    Ok(serde_json::from_str(text)?)
}
