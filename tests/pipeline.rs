// tests/pipeline.rs
//
// filter -> sort over small in-memory tables.

use stat_viewer::config::options::ColumnRoles;
use stat_viewer::data::RawTable;
use stat_viewer::query::{self, FilterSpec, SortDirection, SortSpec};
use stat_viewer::row;

fn roles() -> ColumnRoles {
    ColumnRoles::default()
}

fn table() -> RawTable {
    RawTable::from_parsed(vec![
        row!["season", "player", "undervalued_score", "team"],
        row!["2019", "Michael Jordan", "4.0", "CHI"],
        row!["2021", "LeBron James", "-2.5", "LAL"],
        row!["2023", "Larry Bird", "7.25", "BOS"],
        row!["2020", "Jordan Poole", "", "GSW"],
        row!["2022", "Magic Johnson", "n/a", "LAL"],
    ])
    .unwrap()
}

fn players(t: &RawTable, ix: &[usize]) -> Vec<String> {
    ix.iter().map(|&i| t.cell(i, 1).to_string()).collect()
}

#[test]
fn filters_combine_with_and() {
    let t = table();
    let f = FilterSpec {
        player_query: s("jordan"),
        season_min: s("2020"),
        ..FilterSpec::default()
    };
    let ix = query::filter_rows(&t, &roles(), &f);
    assert_eq!(players(&t, &ix), vec!["Jordan Poole"]);
}

#[test]
fn clearing_filters_restores_every_row() {
    let t = table();
    let mut f = FilterSpec { player_query: s("bird"), min_metric: s("5"), ..FilterSpec::default() };
    assert_eq!(query::filter_rows(&t, &roles(), &f).len(), 1);
    f.clear();
    assert_eq!(query::filter_rows(&t, &roles(), &f), (0..t.nrows()).collect::<Vec<_>>());
}

#[test]
fn min_metric_excludes_blank_and_text_cells() {
    let t = table();
    let f = FilterSpec { min_metric: s("0"), ..FilterSpec::default() };
    let ix = query::filter_rows(&t, &roles(), &f);
    assert_eq!(players(&t, &ix), vec!["Michael Jordan", "Larry Bird"]);
}

#[test]
fn unparseable_bound_is_ignored() {
    let t = table();
    let f = FilterSpec { season_min: s("abc"), min_metric: s("  "), ..FilterSpec::default() };
    assert!(f.is_empty());
    assert_eq!(query::filter_rows(&t, &roles(), &f).len(), t.nrows());
}

#[test]
fn season_bounds_are_inclusive() {
    let t = table();
    let f = FilterSpec { season_min: s("2021"), season_max: s("2022"), ..FilterSpec::default() };
    let ix = query::filter_rows(&t, &roles(), &f);
    assert_eq!(players(&t, &ix), vec!["LeBron James", "Magic Johnson"]);
}

#[test]
fn mixed_column_sorts_blank_then_numbers_then_text() {
    let t = table();
    let sort = SortSpec::new("undervalued_score", SortDirection::Ascending);
    let ix = query::run(&t, &roles(), &FilterSpec::default(), &sort);
    assert_eq!(
        players(&t, &ix),
        vec!["Jordan Poole", "LeBron James", "Michael Jordan", "Larry Bird", "Magic Johnson"]
    );
}

#[test]
fn blank_metric_goes_last_when_descending() {
    let t = RawTable::from_parsed(vec![
        row!["season", "player", "undervalued_score"],
        row!["2020", "A. One", "5.0"],
        row!["2021", "B. Blank", ""],
        row!["2022", "C. Three", "8.5"],
    ])
    .unwrap();
    let sort = SortSpec::new("undervalued_score", SortDirection::Descending);
    let ix = query::run(&t, &roles(), &FilterSpec::default(), &sort);
    assert_eq!(players(&t, &ix), vec!["C. Three", "A. One", "B. Blank"]);
}

#[test]
fn descending_reverses_distinct_keys() {
    let t = table();
    let asc = query::run(&t, &roles(), &FilterSpec::default(), &SortSpec::new("season", SortDirection::Ascending));
    let mut desc = query::run(&t, &roles(), &FilterSpec::default(), &SortSpec::new("season", SortDirection::Descending));
    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn equal_keys_keep_source_order_both_ways() {
    let t = table();
    for dir in [SortDirection::Ascending, SortDirection::Descending] {
        let ix = query::run(&t, &roles(), &FilterSpec::default(), &SortSpec::new("team", dir));
        let lal: Vec<usize> = ix.into_iter().filter(|&i| t.cell(i, 3) == "LAL").collect();
        assert_eq!(lal, vec![1, 4]);
    }
}

#[test]
fn player_column_sorts_by_surname() {
    let t = RawTable::from_parsed(vec![
        row!["season", "player", "undervalued_score"],
        row!["2000", "Michael Jordan", "1"],
        row!["2000", "LeBron James", "1"],
        row!["2000", "Larry Bird", "1"],
    ])
    .unwrap();
    let ix = query::run(&t, &roles(), &FilterSpec::default(), &SortSpec::new("player", SortDirection::Ascending));
    assert_eq!(players(&t, &ix), vec!["Larry Bird", "LeBron James", "Michael Jordan"]);
}

#[test]
fn unknown_sort_field_keeps_filter_order() {
    let t = table();
    let ix = query::run(&t, &roles(), &FilterSpec::default(), &SortSpec::new("nope", SortDirection::Descending));
    assert_eq!(ix, (0..t.nrows()).collect::<Vec<_>>());
}

fn s(v: &str) -> String {
    v.to_string()
}
