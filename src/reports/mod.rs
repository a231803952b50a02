use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keyanneal::keyboard::Keyboard;
use keyanneal::stats::{LayoutStats, StatsReport};

pub fn print_layout_grid(name: &str, kb: &Keyboard) {
    println!("\nLayout: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in kb.rows() {
        let cells: Vec<Cell> = row
            .chars()
            .map(|c| Cell::new(c).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

/// One row per layout, percentages of the corpus. The best value of each
/// column is highlighted.
pub fn print_stats_table(report: &StatsReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Keyboard").add_attribute(Attribute::Bold),
        Cell::new("Alternate"),
        Cell::new("Roll"),
        Cell::new("SFB").fg(Color::Red),
        Cell::new("3Roll"),
        Cell::new("A+R-S").add_attribute(Attribute::Bold),
    ]);

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let all: Vec<&LayoutStats> = report.layouts.values().collect();
    let best_alt = best_of(&all, |s| s.alternate, false);
    let best_roll = best_of(&all, |s| s.roll, false);
    let best_sfb = best_of(&all, |s| s.sfb, true);
    let best_3roll = best_of(&all, |s| s.three_roll, false);
    let best_net = best_of(&all, LayoutStats::net, false);

    for (name, s) in &report.layouts {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            stat_cell(s.alternate, best_alt),
            stat_cell(s.roll, best_roll),
            stat_cell(s.sfb, best_sfb),
            stat_cell(s.three_roll, best_3roll),
            stat_cell(s.net(), best_net).add_attribute(Attribute::Bold),
        ]);
    }
    println!("\n{}", table);
}

fn best_of(all: &[&LayoutStats], key: impl Fn(&LayoutStats) -> f64, lower: bool) -> f64 {
    let values = all.iter().map(|&s| key(s));
    if lower {
        values.fold(f64::INFINITY, f64::min)
    } else {
        values.fold(f64::NEG_INFINITY, f64::max)
    }
}

fn stat_cell(value: f64, best: f64) -> Cell {
    let cell = Cell::new(format!("{:.2}", value));
    if value == best {
        cell.fg(Color::Green)
    } else {
        cell
    }
}
