//! Generated source fragment for the static map table.
//!
//! The fragment is a flat sequence of insertion statements meant to be
//! pasted verbatim into the body of the downstream `MapDatabase` loader,
//! which declares the `maps` table and the `MapGridInfo` element type.
//! Optional fields render as `Some(..)` / `None` so a present-but-zero value
//! and an absent value can never be confused.

use crate::core::{MapCollection, MapRecord};

/// Render the collection as Rust insertion statements, preceded by a header
/// comment stating the record count. Records appear in lexical name order
/// for reproducible diffs across regenerations.
pub fn generate(maps: &MapCollection) -> String {
    let mut code = String::new();
    code.push_str("// Auto-generated from extracted level.blk files\n");
    code.push_str(&format!("// Total maps: {}\n", maps.len()));

    for record in maps.values() {
        code.push('\n');
        push_insert_statement(&mut code, record);
    }
    code
}

fn push_insert_statement(code: &mut String, record: &MapRecord) {
    let name = escape(&record.name);
    let localized = escape(&record.localized_name);
    let modes = record
        .game_modes
        .iter()
        .map(|mode| format!("\"{}\".to_string()", mode.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    code.push_str(&format!("        // {localized}\n"));
    code.push_str(&format!(
        "        self.maps.insert(\"{name}\".to_string(), MapGridInfo {{\n"
    ));
    code.push_str(&format!("            name: \"{name}\".to_string(),\n"));
    code.push_str(&format!(
        "            localized_name: \"{localized}\".to_string(),\n"
    ));
    code.push_str(&format!(
        "            ground_grid_step: {},\n",
        option_literal(record.ground_grid_step)
    ));
    code.push_str(&format!(
        "            air_grid_step: {},\n",
        option_literal(record.air_grid_step)
    ));
    code.push_str(&format!(
        "            naval_grid_step: {},\n",
        option_literal(record.naval_grid_step)
    ));
    code.push_str(&format!(
        "            map_size: {},\n",
        map_size_literal(record.map_size)
    ));
    code.push_str(&format!("            game_modes: vec![{modes}],\n"));
    code.push_str("        });\n");
}

fn option_literal(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("Some({})", float_literal(value)),
        None => "None".to_string(),
    }
}

fn map_size_literal(size: Option<[f64; 2]>) -> String {
    match size {
        Some([width, height]) => format!(
            "Some([{}, {}])",
            float_literal(width),
            float_literal(height)
        ),
        None => "None".to_string(),
    }
}

/// Whole numbers still need a decimal point to read as float literals
fn float_literal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameMode, MapCollection, MapRecord};
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn record(name: &str) -> MapRecord {
        MapRecord {
            name: name.to_string(),
            localized_name: crate::core::localize_name(name),
            map_size: Some([4096.0, 4096.0]),
            ground_grid_step: Some(225.0),
            air_grid_step: None,
            naval_grid_step: None,
            game_modes: vec![GameMode::Ground],
        }
    }

    #[test]
    fn generates_one_insert_statement_per_record() {
        let mut maps = MapCollection::new();
        maps.insert("avg_attica".to_string(), record("avg_attica"));

        let expected = indoc! {r#"
            // Auto-generated from extracted level.blk files
            // Total maps: 1

                    // Attica
                    self.maps.insert("avg_attica".to_string(), MapGridInfo {
                        name: "avg_attica".to_string(),
                        localized_name: "Attica".to_string(),
                        ground_grid_step: Some(225.0),
                        air_grid_step: None,
                        naval_grid_step: None,
                        map_size: Some([4096.0, 4096.0]),
                        game_modes: vec!["ground".to_string()],
                    });
        "#};
        assert_eq!(generate(&maps), expected);
    }

    #[test]
    fn header_states_the_record_count() {
        let mut maps = MapCollection::new();
        maps.insert("a".to_string(), record("a"));
        maps.insert("b".to_string(), record("b"));
        assert!(generate(&maps).contains("// Total maps: 2"));
    }

    #[test]
    fn absent_fields_render_as_none() {
        let mut bare = record("avg_bare");
        bare.map_size = None;
        bare.ground_grid_step = None;
        bare.game_modes = vec![GameMode::Unknown];

        let mut maps = MapCollection::new();
        maps.insert(bare.name.clone(), bare);
        let code = generate(&maps);
        assert!(code.contains("ground_grid_step: None"));
        assert!(code.contains("map_size: None"));
        assert!(code.contains("vec![\"unknown\".to_string()]"));
    }

    #[test]
    fn zero_is_rendered_as_a_present_value() {
        let mut zeroed = record("avg_zero");
        zeroed.ground_grid_step = Some(0.0);

        let mut maps = MapCollection::new();
        maps.insert(zeroed.name.clone(), zeroed);
        assert!(generate(&maps).contains("ground_grid_step: Some(0.0)"));
    }

    #[test]
    fn whole_floats_keep_a_decimal_point() {
        assert_eq!(float_literal(50.0), "50.0");
        assert_eq!(float_literal(62.5), "62.5");
    }

    #[test]
    fn string_fields_are_escaped() {
        let mut tricky = record("avg_quoted");
        tricky.localized_name = "The \"Gap\"".to_string();

        let mut maps = MapCollection::new();
        maps.insert(tricky.name.clone(), tricky);
        assert!(generate(&maps).contains(r#"localized_name: "The \"Gap\"".to_string()"#));
    }
}
