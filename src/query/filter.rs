// src/query/filter.rs
//
// Row predicates. Inputs are raw control text; a blank input is an inactive
// filter. All active filters must hold (AND).

use crate::{
    config::options::ColumnRoles,
    core::cell::try_parse_number,
    data::{cell_at, RawTable},
};

/// What the user typed into the filter controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub player_query: String,
    pub season_min: String,
    pub season_max: String,
    pub min_metric: String,
}

impl FilterSpec {
    pub fn is_empty(&self) -> bool {
        self.player_query.trim().is_empty()
            && bound(&self.season_min).is_none()
            && bound(&self.season_max).is_none()
            && bound(&self.min_metric).is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Numeric bound from control text. Blank or non-numeric text leaves the
/// bound inactive.
fn bound(text: &str) -> Option<f64> {
    try_parse_number(text)
}

/// A FilterSpec resolved against one table: columns looked up, bounds
/// parsed, query folded. Build once per pipeline run.
#[derive(Clone, Debug)]
pub struct ActiveFilters {
    player_col: Option<usize>,
    season_col: Option<usize>,
    metric_col: Option<usize>,
    query: Option<String>,
    season_min: Option<f64>,
    season_max: Option<f64>,
    min_metric: Option<f64>,
}

impl ActiveFilters {
    pub fn new(table: &RawTable, roles: &ColumnRoles, spec: &FilterSpec) -> Self {
        let q = spec.player_query.trim();
        Self {
            player_col: table.column(&roles.player),
            season_col: table.column(&roles.season),
            metric_col: table.column(&roles.metric),
            query: (!q.is_empty()).then(|| q.to_lowercase()),
            season_min: bound(&spec.season_min),
            season_max: bound(&spec.season_max),
            min_metric: bound(&spec.min_metric),
        }
    }

    pub fn is_pass_through(&self) -> bool {
        self.query.is_none()
            && self.season_min.is_none()
            && self.season_max.is_none()
            && self.min_metric.is_none()
    }

    pub fn matches(&self, row: &[String]) -> bool {
        if let Some(q) = &self.query {
            if !cell_at(row, self.player_col).to_lowercase().contains(q.as_str()) {
                return false;
            }
        }

        if self.season_min.is_some() || self.season_max.is_some() {
            let Some(season) = try_parse_number(cell_at(row, self.season_col)) else {
                return false;
            };
            if self.season_min.is_some_and(|min| season < min) { return false; }
            if self.season_max.is_some_and(|max| season > max) { return false; }
        }

        if let Some(min) = self.min_metric {
            match try_parse_number(cell_at(row, self.metric_col)) {
                Some(v) if v >= min => {}
                _ => return false,
            }
        }

        true
    }
}

/// Positions of the rows passing every active filter, in source order.
pub fn filter_rows(table: &RawTable, roles: &ColumnRoles, spec: &FilterSpec) -> Vec<usize> {
    let active = ActiveFilters::new(table, roles, spec);
    if active.is_pass_through() {
        return (0..table.nrows()).collect();
    }
    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, r)| active.matches(r))
        .map(|(i, _)| i)
        .collect()
}
