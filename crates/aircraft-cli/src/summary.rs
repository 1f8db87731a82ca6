use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use aircraft_cli::types::{MergeCounts, RunResult, StageOutcome};

/// Hex digits of the SHA-256 shown per file.
const DIGEST_PREFIX_LEN: usize = 12;

pub fn print_summary(result: &RunResult) {
    println!("Data: {}", result.data_dir.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Input rows"),
        header_cell("File"),
        header_cell("Rows"),
        header_cell("SHA-256"),
        header_cell("Time (ms)"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for outcome in &result.stages {
        add_stage_rows(&mut table, outcome);
    }
    println!("{table}");

    for counts in result.stages.iter().filter_map(|outcome| outcome.merge_counts) {
        print_merge_counts(counts);
    }
}

fn add_stage_rows(table: &mut Table, outcome: &StageOutcome) {
    for (index, output) in outcome.outputs.iter().enumerate() {
        let first = index == 0;
        let file_name = match output.path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => output.path.display().to_string(),
        };
        table.add_row(vec![
            if first {
                stage_cell(outcome.stage.label())
            } else {
                dim_cell("")
            },
            if first {
                Cell::new(outcome.input_rows)
            } else {
                dim_cell("")
            },
            Cell::new(file_name),
            count_cell(output.rows),
            dim_cell(short_digest(&output.sha256)),
            if first {
                dim_cell(outcome.duration.as_millis())
            } else {
                dim_cell("")
            },
        ]);
    }
}

fn print_merge_counts(counts: MergeCounts) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("FAA"),
        header_cell("OpenSky"),
        header_cell("Both"),
        header_cell("Union"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(counts.faa),
        Cell::new(counts.opensky),
        Cell::new(counts.intersection)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Cell::new(counts.union).add_attribute(Attribute::Bold),
    ]);
    println!();
    println!("Merge:");
    println!("{table}");
}

fn short_digest(digest: &str) -> &str {
    digest.get(..DIGEST_PREFIX_LEN).unwrap_or(digest)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn stage_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
