// src/render.rs
//
// Derived data -> display structures. No drawing here; the GUI and the CLI
// both draw from these.

use crate::{
    config::{consts::RANK_TOP_N, options::ChartSpec, state::LoadStatus},
    controller::Controller,
    core::format::{column_label, format_cell, is_integer_column},
    data::cell_at,
    query::{RankedRow, SortDirection},
};

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderCell {
    /// Source column position.
    pub col: usize,
    pub name: String,
    pub label: String,
    /// Set on the active sort column.
    pub sorted: Option<SortDirection>,
}

/// The current page, formatted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableView {
    pub columns: Vec<HeaderCell>,
    pub rows: Vec<Vec<String>>,
    /// Shown instead of rows when the dataset couldn't be loaded.
    pub message: Option<String>,
}

pub fn table_view(ctl: &Controller) -> TableView {
    let state = ctl.state();
    let opts = ctl.options();

    let message = match &state.status {
        LoadStatus::Unavailable(msg) => Some(msg.clone()),
        _ => None,
    };

    let Some(page) = ctl.page_view() else {
        return TableView { message, ..TableView::default() };
    };

    let headers = state.headers();
    let cols = ctl.visible_columns();
    let columns: Vec<HeaderCell> = cols
        .iter()
        .map(|&c| HeaderCell {
            col: c,
            name: headers[c].clone(),
            label: column_label(&headers[c]),
            sorted: (headers[c] == state.sort.field).then_some(state.sort.direction),
        })
        .collect();

    let rows = page
        .iter()
        .map(|r| {
            columns
                .iter()
                .map(|h| format_cell(&h.name, cell_at(r, Some(h.col)), &opts.integer_columns))
                .collect()
        })
        .collect();

    TableView { columns, rows, message }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    /// "Player (2021)"
    pub label: String,
    pub value: f64,
    pub text: String,
    /// |value| relative to the largest |value| in the panel, 0..=1.
    pub fraction: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartView {
    pub title: String,
    pub metric_label: String,
    pub bars: Vec<Bar>,
}

pub fn chart_view(spec: &ChartSpec, ranked: &[RankedRow], integer_columns: &[String]) -> ChartView {
    let max = ranked.iter().map(|r| r.value.abs()).fold(0.0_f64, f64::max);
    let bars = ranked
        .iter()
        .take(RANK_TOP_N)
        .map(|r| Bar {
            label: format!("{} ({})", r.player, r.season.round()),
            value: r.value,
            text: format_cell(&spec.metric, &r.value.to_string(), integer_columns),
            fraction: if max > 0.0 { (r.value.abs() / max) as f32 } else { 0.0 },
        })
        .collect();

    ChartView { title: spec.title.clone(), metric_label: column_label(&spec.metric), bars }
}

pub fn chart_views(ctl: &Controller) -> Vec<ChartView> {
    let ints = &ctl.options().integer_columns;
    ctl.charts()
        .into_iter()
        .map(|(spec, ranked)| chart_view(spec, &ranked, ints))
        .collect()
}

/// Stat pills: rows, columns, visible range.
pub fn summary(ctl: &Controller) -> Vec<String> {
    let state = ctl.state();
    let Some(table) = state.table.as_ref() else {
        return vec![s!("CSV not found")];
    };

    let total = state.view.len();
    let range = crate::query::page_range(state.current_page, total, state.rows_per_page);
    let showing = if total == 0 {
        s!("Showing: 0 of 0")
    } else {
        format!("Showing: {}–{} of {}", range.start + 1, range.end, total)
    };

    vec![
        format!("Rows: {}", table.nrows()),
        format!("Columns: {}", table.ncols()),
        showing,
        format!("Page {} / {}", state.current_page, ctl.page_count()),
    ]
}

pub fn is_numeric_column(name: &str, integer_columns: &[String], rows: &[Vec<String>], ci: usize) -> bool {
    is_integer_column(name, integer_columns)
        || rows
            .iter()
            .filter_map(|r| r.get(ci))
            .find(|c| !c.is_empty())
            .is_some_and(|c| crate::core::try_parse_number(c).is_some())
}
