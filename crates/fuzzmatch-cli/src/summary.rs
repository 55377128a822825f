use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use fuzzmatch_model::{AlgorithmCategory, MatchRecord, PerformanceTier, ScoreBand};
use fuzzmatch_report::format_percent;
use fuzzmatch_similarity::AlgorithmRegistry;

use fuzzmatch_cli::types::{ColumnListing, MatchRun, SearchRun};

const BANDS: [ScoreBand; 4] = [
    ScoreBand::Excellent,
    ScoreBand::Good,
    ScoreBand::Fair,
    ScoreBand::Poor,
];

pub fn print_match_summary(run: &MatchRun, top: usize) {
    let outcome = &run.outcome;
    let stats = &run.stats;
    println!(
        "Source: {} ({})",
        run.source.file_name, run.source.column
    );
    println!(
        "Target: {} ({})",
        run.target.file_name, run.target.column
    );
    println!(
        "Algorithm: {}  Threshold: {}  Time: {:.2?}",
        outcome.algorithm,
        format_percent(run.threshold),
        run.elapsed
    );
    match &run.output_dir {
        Some(dir) if run.report.is_some() => println!("Output: {}", dir.display()),
        _ => println!("Output: none (dry run)"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Side"),
        header_cell("Items"),
        header_cell("Matched"),
        header_cell("Unmatched"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let matched = outcome.match_count();
    table.add_row(vec![
        Cell::new("Source"),
        Cell::new(outcome.source_count()),
        count_cell(matched, Color::Green),
        count_cell(outcome.unmatched_sources.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Target"),
        Cell::new(outcome.target_count()),
        count_cell(matched, Color::Green),
        count_cell(outcome.unmatched_targets.len(), Color::Yellow),
    ]);
    println!("{table}");

    let mut quality = Table::new();
    quality.set_header(vec![header_cell("Quality"), header_cell("Matches")]);
    apply_table_style(&mut quality);
    align_column(&mut quality, 1, CellAlignment::Right);
    for band in BANDS {
        quality.add_row(vec![
            Cell::new(band.label()).fg(band_color(band)),
            count_cell(stats.distribution.count(band), band_color(band)),
        ]);
    }
    quality.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} ({:.2}% of source, avg {:.2}%)",
            stats.total_matches, stats.match_percentage, stats.average_score
        ))
        .add_attribute(Attribute::Bold),
    ]);
    println!("{quality}");

    if top > 0 && !outcome.matches.is_empty() {
        print_top_matches(&outcome.matches, top);
    }

    if outcome.has_warnings() {
        eprintln!("Warnings:");
        for warning in &outcome.warnings {
            eprintln!("- {}", warning.message());
        }
    }

    let files = run.written_files();
    if !files.is_empty() {
        println!();
        println!("Files:");
        for path in files {
            println!("- {}", path.display());
        }
    }
}

fn print_top_matches(matches: &[MatchRecord], top: usize) {
    let mut ranked: Vec<&MatchRecord> = matches.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Target"),
        header_cell("Score"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for record in ranked.into_iter().take(top) {
        table.add_row(vec![
            Cell::new(&record.source),
            Cell::new(&record.target),
            score_cell(record.score),
            dim_cell(format!("{} -> {}", record.source_row + 1, record.target_row + 1)),
        ]);
    }
    println!();
    println!("Top matches:");
    println!("{table}");
}

pub fn print_algorithms(registry: &AlgorithmRegistry) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Category"),
        header_cell("Speed"),
        header_cell("Best for"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for descriptor in registry.descriptors() {
        table.add_row(vec![
            Cell::new(&descriptor.id).add_attribute(Attribute::Bold),
            Cell::new(&descriptor.display_name),
            category_cell(descriptor.category),
            performance_cell(descriptor.performance),
            Cell::new(&descriptor.best_for),
        ]);
    }
    println!("{table}");
}

pub fn print_columns(listing: &ColumnListing) {
    println!(
        "{} ({}, {} rows)",
        listing.file_name, listing.format, listing.rows
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Filled"),
        header_cell("Example"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (index, column) in listing.columns.iter().enumerate() {
        let filled = if column.non_blank == listing.rows {
            Cell::new(column.non_blank)
        } else {
            Cell::new(format!("{}/{}", column.non_blank, listing.rows)).fg(Color::Yellow)
        };
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&column.name).add_attribute(Attribute::Bold),
            filled,
            column
                .sample
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    println!("{table}");
}

pub fn print_search(run: &SearchRun) {
    if let Some(warning) = &run.fallback {
        eprintln!("warning: {}", warning.message());
    }
    if run.hits.is_empty() {
        println!(
            "No values in {} candidates resemble \"{}\" ({}).",
            run.candidates, run.query, run.algorithm
        );
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rank"),
        header_cell("Value"),
        header_cell("Score"),
        header_cell("Row"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (rank, hit) in run.hits.iter().enumerate() {
        table.add_row(vec![
            dim_cell(rank + 1),
            Cell::new(&hit.value),
            score_cell(hit.score),
            dim_cell(hit.row_index + 1),
        ]);
    }
    println!(
        "\"{}\" against {} candidates ({}):",
        run.query, run.candidates, run.algorithm
    );
    println!("{table}");
}

fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Excellent => Color::Green,
        ScoreBand::Good => Color::Cyan,
        ScoreBand::Fair => Color::Yellow,
        ScoreBand::Poor => Color::Red,
    }
}

fn score_cell(score: f64) -> Cell {
    Cell::new(format_percent(score)).fg(band_color(ScoreBand::classify(score)))
}

fn category_cell(category: AlgorithmCategory) -> Cell {
    let color = match category {
        AlgorithmCategory::Basic => Color::Reset,
        AlgorithmCategory::Advanced => Color::Blue,
        AlgorithmCategory::SearchEngine => Color::Magenta,
    };
    Cell::new(category).fg(color)
}

fn performance_cell(tier: PerformanceTier) -> Cell {
    let color = match tier {
        PerformanceTier::Fast => Color::Green,
        PerformanceTier::Medium => Color::Yellow,
        PerformanceTier::Slow => Color::Red,
    };
    Cell::new(tier).fg(color)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() == 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
        ]);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(80);
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
    Cell::new(value).fg(Color::DarkGrey)
}
