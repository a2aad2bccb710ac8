//! Walks the levels directory and assembles the map collection.

use crate::core::{localize_name, Error, MapCollection, MapRecord, Result};
use crate::extract;
use std::path::Path;
use walkdir::WalkDir;

/// Name of the per-map config file inside each level directory
const LEVEL_FILE: &str = "level.blk";

/// Build one [`MapRecord`] per map directory under `<root>/content/levels`.
///
/// Directories without a `level.blk` are skipped silently (most entries under
/// the levels directory are not maps). A read failure on a single file is
/// logged and skips only that map. A missing levels directory is an error;
/// a levels directory with zero maps is an empty collection.
pub fn collect_maps(root: &Path) -> Result<MapCollection> {
    let levels = root.join("content").join("levels");
    if !levels.is_dir() {
        return Err(Error::MissingLevels { path: levels });
    }

    let mut maps = MapCollection::new();
    for entry in WalkDir::new(&levels)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("skipping unreadable entry under {}: {err}", levels.display());
                continue;
            }
        };
        // path-based check so symlinked map directories are followed
        if !entry.path().is_dir() {
            continue;
        }

        let level_file = entry.path().join(LEVEL_FILE);
        if !level_file.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        // Extracted level files occasionally carry non-UTF-8 bytes; decode
        // lossily rather than dropping the map.
        let content = match std::fs::read(&level_file) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {
                log::warn!("failed to read {}: {err}", level_file.display());
                continue;
            }
        };

        log::debug!("parsing {name}");
        let fields = extract::extract_fields(&content);
        maps.insert(
            name.clone(),
            MapRecord {
                localized_name: localize_name(&name),
                name,
                map_size: fields.map_size,
                ground_grid_step: fields.ground_grid_step,
                air_grid_step: fields.air_grid_step,
                naval_grid_step: fields.naval_grid_step,
                game_modes: fields.game_modes,
            },
        );
    }

    log::info!("discovered {} maps under {}", maps.len(), levels.display());
    Ok(maps)
}
