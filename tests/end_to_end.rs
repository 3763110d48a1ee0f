// tests/end_to_end.rs
//
// File on disk -> controller -> rendered page / export file.

use std::fs;

use stat_viewer::config::options::{DatasetScope, ViewerOptions};
use stat_viewer::controller::{Controller, LoadOutcome};
use stat_viewer::query::{self, FilterSpec, SortDirection, SortSpec};
use stat_viewer::{csv, file, render, store};

const SAMPLE: &str = "season,player,undervalued_score\n\
2020,\"A. One\",5.0\n\
2021,\"B. Two\",-3.0\n\
2022,\"C. Three\",8.5\n";

#[test]
fn filter_then_sort_over_parsed_text() {
    let table = store::parse_table("sample", SAMPLE).unwrap();
    let roles = ViewerOptions::default().columns;
    let filters = FilterSpec { min_metric: "0".into(), ..FilterSpec::default() };
    let sort = SortSpec::new("undervalued_score", SortDirection::Descending);

    let ix = query::run(&table, &roles, &filters, &sort);
    let got: Vec<(&str, &str)> = ix.iter().map(|&i| (table.cell(i, 1), table.cell(i, 2))).collect();
    assert_eq!(got, vec![("C. Three", "8.5"), ("A. One", "5.0")]);
}

#[test]
fn controller_loads_renders_and_exports() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("sample.csv");
    fs::write(&src, SAMPLE).unwrap();

    let opts = ViewerOptions {
        datasets: vec![DatasetScope::new("Sample", &[src.to_str().unwrap()])],
        ..ViewerOptions::default()
    };
    let mut ctl = Controller::new(opts);
    assert_eq!(ctl.load_blocking(0, None), LoadOutcome::Applied);
    ctl.set_min_metric("0");

    let view = render::table_view(&ctl);
    let labels: Vec<&str> = view.columns.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Season", "Player", "Undervalued Score"]);
    assert_eq!(view.columns[2].sorted, Some(SortDirection::Descending));
    assert_eq!(view.rows, vec![
        vec!["2022".to_string(), "C. Three".into(), "8.5".into()],
        vec!["2020".to_string(), "A. One".into(), "5.0".into()],
    ]);

    let pills = render::summary(&ctl);
    assert!(pills.contains(&"Rows: 3".to_string()));
    assert!(pills.contains(&"Showing: 1–2 of 2".to_string()));

    let charts = render::chart_views(&ctl);
    assert_eq!(charts[0].bars[0].label, "C. Three (2022)");

    let out = dir.path().join("out/view.csv");
    let (headers, rows) = ctl.export_rows();
    file::write_csv(&out, &headers, &rows).unwrap();
    let back = csv::parse_rows(&fs::read_to_string(&out).unwrap());
    assert_eq!(back.len(), 3);
    assert_eq!(back[1][1], "C. Three");
}

#[test]
fn missing_file_shows_fallback_message() {
    let opts = ViewerOptions {
        datasets: vec![DatasetScope::new("Gone", &["/no/such/file.csv"])],
        ..ViewerOptions::default()
    };
    let mut ctl = Controller::new(opts);
    assert_eq!(ctl.load_blocking(0, None), LoadOutcome::Failed);

    let view = render::table_view(&ctl);
    assert!(view.columns.is_empty());
    assert_eq!(view.message.as_deref(), Some(stat_viewer::config::consts::FALLBACK_MESSAGE));
    assert_eq!(render::summary(&ctl), vec!["CSV not found".to_string()]);
}
