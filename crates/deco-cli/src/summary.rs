use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use deco_model::{CanonicalSize, Vocabulary};
use deco_normalization::UnmatchedValue;

/// Table of vocabulary members in canonical order.
pub fn vocabulary_table(vocabulary: Vocabulary) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    let labels = vocabulary.labels();
    if vocabulary == Vocabulary::Sizes {
        table.set_header(vec![header_cell("#"), header_cell("Size"), header_cell("Code")]);
        for (index, size) in CanonicalSize::ALL.iter().enumerate() {
            table.add_row(vec![
                dim_cell(index + 1),
                Cell::new(size.as_str()),
                Cell::new(size.shorthand()).fg(Color::Yellow),
            ]);
        }
    } else {
        table.set_header(vec![header_cell("#"), header_cell("Value")]);
        for (index, label) in labels.iter().enumerate() {
            table.add_row(vec![dim_cell(index + 1), Cell::new(label)]);
        }
    }
    align_column(&mut table, 0, CellAlignment::Right);
    table
}

/// Table of attribute values that were kept raw.
pub fn unmatched_table(unmatched: &[(usize, UnmatchedValue)]) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Asset"),
        header_cell("Field"),
        header_cell("Raw value"),
    ]);
    for (index, value) in unmatched {
        table.add_row(vec![
            dim_cell(index),
            Cell::new(value.field.as_str()),
            Cell::new(&value.raw).fg(Color::Yellow),
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
