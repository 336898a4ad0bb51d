use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use crate::types::DemoResult;

pub fn print_demo_summary(result: &DemoResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Actor"),
        header_cell("Action"),
        header_cell("Outcome"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for (index, step) in result.steps.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            actor_cell(step.actor),
            Cell::new(&step.action),
            Cell::new(&step.outcome),
            status_cell(step.ok),
        ]);
    }
    println!("{table}");
    if result.has_errors {
        eprintln!("demo finished with failed steps");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(3)),
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn actor_cell(actor: &str) -> Cell {
    if actor == "admin" {
        Cell::new(actor).fg(Color::Magenta)
    } else {
        Cell::new(actor).fg(Color::Blue)
    }
}

fn status_cell(ok: bool) -> Cell {
    if ok {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗").fg(Color::Red).add_attribute(Attribute::Bold)
    }
}
