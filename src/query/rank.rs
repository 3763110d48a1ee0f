// src/query/rank.rs
//
// Top-N subsets feeding the chart panels. Pure: takes row positions, never
// touches the view it was given.

use std::cmp::Ordering;

use crate::{
    config::options::{ChartSpec, ColumnRoles, RankOrder},
    core::cell::try_parse_number,
    data::{cell_at, RawTable},
};

#[derive(Clone, Debug, PartialEq)]
pub struct RankedRow {
    /// Position in the table.
    pub row: usize,
    pub player: String,
    pub season: f64,
    pub value: f64,
}

/// Rank `row_ix` by the chart's metric and keep the first `n`.
///
/// Rows need a non-empty player and finite season and metric values.
/// Ties keep their order in `row_ix`.
pub fn ranked(
    table: &RawTable,
    row_ix: &[usize],
    roles: &ColumnRoles,
    chart: &ChartSpec,
    n: usize,
) -> Vec<RankedRow> {
    let player_col = table.column(&roles.player);
    let season_col = table.column(&roles.season);
    let Some(metric_col) = table.column(&chart.metric) else {
        logd!("Rank: '{}' has no column '{}'", chart.title, chart.metric);
        return Vec::new();
    };

    let mut out: Vec<RankedRow> = row_ix
        .iter()
        .filter_map(|&ix| {
            let r = table.rows.get(ix)?;
            let player = cell_at(r, player_col);
            if player.is_empty() {
                return None;
            }
            let season = try_parse_number(cell_at(r, season_col))?;
            let value = try_parse_number(cell_at(r, Some(metric_col)))?;
            Some(RankedRow { row: ix, player: s!(player), season, value })
        })
        .collect();

    out.sort_by(|a, b| by_order(chart.order, a.value, b.value));
    out.truncate(n);
    out
}

fn by_order(order: RankOrder, a: f64, b: f64) -> Ordering {
    let cmp = |x: f64, y: f64| x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    match order {
        RankOrder::Largest => cmp(b, a),
        RankOrder::Smallest => cmp(a, b),
        RankOrder::LargestAbs => cmp(b.abs(), a.abs()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RawTable {
        RawTable::from_parsed(vec![
            row!["season", "player", "undervalued_score"],
            row!["2020", "A. One", "5.0"],
            row!["2021", "B. Two", "-9.0"],
            row!["2022", "C. Three", "8.5"],
            row!["", "D. Four", "50"],
            row!["2023", "", "40"],
            row!["2024", "E. Five", "n/a"],
        ])
        .unwrap()
    }

    fn all(t: &RawTable) -> Vec<usize> { (0..t.nrows()).collect() }

    fn players(v: &[RankedRow]) -> Vec<&str> { v.iter().map(|r| r.player.as_str()).collect() }

    #[test]
    fn incomplete_rows_are_skipped() {
        let t = table();
        let chart = ChartSpec::new("top", "undervalued_score", RankOrder::Largest);
        let r = ranked(&t, &all(&t), &ColumnRoles::default(), &chart, 10);
        assert_eq!(players(&r), vec!["C. Three", "A. One", "B. Two"]);
    }

    #[test]
    fn smallest_and_absolute_orders() {
        let t = table();
        let roles = ColumnRoles::default();
        let low = ChartSpec::new("low", "undervalued_score", RankOrder::Smallest);
        assert_eq!(players(&ranked(&t, &all(&t), &roles, &low, 1)), vec!["B. Two"]);
        let abs = ChartSpec::new("abs", "undervalued_score", RankOrder::LargestAbs);
        assert_eq!(players(&ranked(&t, &all(&t), &roles, &abs, 2)), vec!["B. Two", "C. Three"]);
    }

    #[test]
    fn unknown_metric_is_empty() {
        let t = table();
        let chart = ChartSpec::new("x", "nope", RankOrder::Largest);
        assert!(ranked(&t, &all(&t), &ColumnRoles::default(), &chart, 10).is_empty());
    }
}
