use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use vptranspose::ranges::KnownRange;
use vptranspose::scorer::Badness;
use vptranspose::search::{Candidate, SearchResult};

pub fn print_candidates(candidates: &[Candidate], result: &SearchResult) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Offset").add_attribute(Attribute::Bold),
        Cell::new("Accidentals"),
        Cell::new("Out of Range").fg(Color::Red),
        Cell::new("Bad Notes").fg(Color::Cyan),
    ]);

    for i in 0..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for c in candidates {
        let offset_cell = if result.offsets.contains(&c.offset) {
            Cell::new(format!("{:+}", c.offset))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(format!("{:+}", c.offset))
        };

        table.add_row(vec![
            offset_cell,
            Cell::new(c.badness.accidentals),
            Cell::new(c.badness.out_of_bounds).fg(Color::Red),
            Cell::new(c.badness.total()).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_search_summary(result: &SearchResult) {
    let offsets: Vec<String> = result.offsets.iter().map(|o| format!("{:+}", o)).collect();
    println!("\n=== 🏆 BEST TRANSPOSITION ===");
    println!("Offsets: {}", offsets.join(", "));
    println!("Bad notes: {}", result.badness);
    if result.is_already_best() {
        println!("This sheet is already at the best transposition possible.");
    }
}

pub fn print_range_scores(scores: &[(KnownRange, Badness)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Range").add_attribute(Attribute::Bold),
        Cell::new("Keys"),
        Cell::new("Accidentals"),
        Cell::new("Lost Notes").fg(Color::Red),
        Cell::new("Bad Notes").fg(Color::Cyan),
    ]);

    for i in 2..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let best = scores.iter().map(|(_, b)| b.total()).min();

    for (known, badness) in scores {
        let range = known.key_range();
        let name_cell = if Some(badness.total()) == best {
            Cell::new(known)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(known).add_attribute(Attribute::Bold)
        };

        table.add_row(vec![
            name_cell,
            Cell::new(format!("{}..={}", range.min(), range.max())),
            Cell::new(badness.accidentals),
            Cell::new(badness.out_of_bounds).fg(Color::Red),
            Cell::new(badness.total()).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}
