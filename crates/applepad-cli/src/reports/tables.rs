use applepad_core::api::Derivation;
use applepad_core::refine::ParamDelta;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

pub fn derivation(d: &Derivation) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Param").add_attribute(Attribute::Bold),
        Cell::new("Group"),
        Cell::new("Value").fg(Color::Cyan),
    ]);
    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (key, value) in d.normalized.iter() {
        table.add_row(vec![
            Cell::new(key),
            Cell::new(key.group()),
            Cell::new(format!("{:.3}", value)).fg(Color::Cyan),
        ]);
    }
    table.add_row(vec![
        Cell::new("S-score").add_attribute(Attribute::Bold),
        Cell::new(d.band),
        Cell::new(format!("{:.3}", d.score)).add_attribute(Attribute::Bold),
    ]);
    println!("\n{}", table);
    println!(
        "Candidates: {} | {}",
        d.candidates.first, d.candidates.second
    );
}

pub fn deltas(all: &[ParamDelta], threshold: f64) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Param").add_attribute(Attribute::Bold),
        Cell::new("Before"),
        Cell::new("After"),
        Cell::new("Delta"),
    ]);
    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for d in all {
        let delta_cell = Cell::new(format!("{:+.2}", d.delta));
        let delta_cell = if !d.is_significant(threshold) {
            delta_cell
        } else if d.delta > 0.0 {
            delta_cell.fg(Color::Green)
        } else {
            delta_cell.fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(d.key),
            Cell::new(format!("{:.2}", d.before)),
            Cell::new(format!("{:.2}", d.after)),
            delta_cell,
        ]);
    }
    println!("\n{}", table);
}
