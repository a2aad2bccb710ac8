//! Terminal statistics block printed after a successful run.

use crate::core::{GameMode, MapCollection};
use colored::*;

pub fn print_summary(maps: &MapCollection) {
    println!("{}", "Map grid extraction".bold().blue());
    println!("{}", "===================".blue());
    println!("  Maps found: {}", maps.len());
    println!("  Ground maps: {}", count_mode(maps, GameMode::Ground));
    println!("  Air maps: {}", count_mode(maps, GameMode::Air));
    println!("  Naval maps: {}", count_mode(maps, GameMode::Naval));

    let steps = distinct_ground_steps(maps);
    if !steps.is_empty() {
        println!("  Ground grid steps: {steps:?}");
    }
    println!();
}

fn count_mode(maps: &MapCollection, mode: GameMode) -> usize {
    maps.values()
        .filter(|record| record.game_modes.contains(&mode))
        .count()
}

fn distinct_ground_steps(maps: &MapCollection) -> Vec<f64> {
    let mut steps: Vec<f64> = maps
        .values()
        .filter_map(|record| record.ground_grid_step)
        .collect();
    steps.sort_by(f64::total_cmp);
    steps.dedup();
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MapRecord;

    #[test]
    fn ground_steps_are_sorted_and_deduplicated() {
        let mut maps = MapCollection::new();
        for (name, step) in [("a", 225.0), ("b", 200.0), ("c", 225.0)] {
            maps.insert(
                name.to_string(),
                MapRecord {
                    name: name.to_string(),
                    localized_name: name.to_uppercase(),
                    map_size: None,
                    ground_grid_step: Some(step),
                    air_grid_step: None,
                    naval_grid_step: None,
                    game_modes: vec![GameMode::Ground],
                },
            );
        }

        assert_eq!(distinct_ground_steps(&maps), vec![200.0, 225.0]);
        assert_eq!(count_mode(&maps, GameMode::Ground), 3);
        assert_eq!(count_mode(&maps, GameMode::Naval), 0);
    }
}
