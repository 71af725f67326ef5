// ===== scorecard/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use scorecard::api::ScorecardSession;
use scorecard::nav::NavigationState;

pub fn print_view(session: &ScorecardSession) {
    match session.nav_state() {
        NavigationState::Overview => print_overview(session),
        NavigationState::Detail(i) => print_detail(session, i),
        NavigationState::Summary => print_summary(session),
    }
}

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn tile(index: usize, title: &str) -> Cell {
    Cell::new(format!("[{index}] {title}")).set_alignment(CellAlignment::Center)
}

fn print_overview(session: &ScorecardSession) {
    let model = session.model();
    let mut table = base_table();

    // Tile placement mirrors the 3x3 grid: 0 north, 2 west, 3 east, 1 south,
    // topic in the center.
    table.add_row(vec![
        Cell::new(""),
        tile(0, &model.perspectives[0].title),
        Cell::new(""),
    ]);
    table.add_row(vec![
        tile(2, &model.perspectives[2].title),
        Cell::new(&model.main_topic)
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Center),
        tile(3, &model.perspectives[3].title),
    ]);
    table.add_row(vec![
        Cell::new(""),
        tile(1, &model.perspectives[1].title),
        Cell::new(""),
    ]);

    println!("{table}");
    println!("open <0-3> to drill in, 'summary' for the evaluation.");
}

fn print_detail(session: &ScorecardSession, index: usize) {
    let model = session.model();
    let perspective = &model.perspectives[index];

    let mut table = base_table();
    table.set_header(vec![
        Cell::new("#"),
        Cell::new(&perspective.title).add_attribute(Attribute::Bold),
        Cell::new("Rating").set_alignment(CellAlignment::Right),
    ]);
    for (i, criterion) in perspective.criteria.iter().enumerate() {
        let name = if criterion.name.is_empty() {
            "(unnamed)"
        } else {
            criterion.name.as_str()
        };
        table.add_row(vec![
            Cell::new(i),
            Cell::new(name),
            Cell::new(criterion.rating).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
    if session.edit_mode() {
        println!("add | name <n> <text> | rate <n> <value> | back");
    } else {
        println!("rate <n> <value> | back");
    }
}

fn print_summary(session: &ScorecardSession) {
    let model = session.model();

    let mut table = base_table();
    table.set_header(vec![
        Cell::new(format!("{}: Evaluation", model.main_topic)).add_attribute(Attribute::Bold),
        Cell::new("Ø Rating").set_alignment(CellAlignment::Right),
    ]);
    for row in session.averages() {
        table.add_row(vec![
            Cell::new(row.title),
            Cell::new(fmt_average(row.average)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Overall").add_attribute(Attribute::Bold),
        Cell::new(fmt_average(session.overall_average()))
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right),
    ]);

    println!("{table}");
    println!("'back' returns to the overview.");
}

fn fmt_average(average: Option<f64>) -> String {
    match average {
        Some(a) => format!("{a:.2}"),
        None => "-".to_string(),
    }
}
