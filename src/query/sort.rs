// src/query/sort.rs
//
// Ordering of the filtered view.
//
// Per pair of cells: both numeric -> numeric order; otherwise case-folded
// text, where the player column compares by "<surname> <full name>".
// A blank cell is below everything, as "" is in text order, so blanks end
// up last when descending. Mixed pairs of a number and non-blank text put
// the number first so the order stays total; without that,
// "9" < "10" < "1a" < "9" would cycle.

use std::cmp::Ordering;

use crate::core::cell::{fold, try_parse_number};
use crate::data::{cell_at, RawTable};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortSpec {
    /// Header name; empty = keep source order.
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: &str, direction: SortDirection) -> Self {
        Self { field: s!(field), direction }
    }
}

/// Comparison key for one cell, derived on demand.
#[derive(Clone, Debug, PartialEq)]
pub enum SortKey {
    Blank,
    Num(f64),
    Text(String),
}

impl SortKey {
    pub fn for_cell(cell: &str, player_column: bool) -> Self {
        if cell.trim().is_empty() {
            return Self::Blank;
        }
        match try_parse_number(cell) {
            Some(v) => Self::Num(v),
            None if player_column => Self::Text(surname_key(cell)),
            None => Self::Text(fold(cell)),
        }
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Blank, Self::Blank) => Ordering::Equal,
            (Self::Blank, _) => Ordering::Less,
            (_, Self::Blank) => Ordering::Greater,
            (Self::Num(a), Self::Num(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Num(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Num(_)) => Ordering::Greater,
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
        }
    }
}

/// `"<lastToken> <fullLowerTrimmedName>"`, e.g. "LeBron James" ->
/// "james lebron james".
pub fn surname_key(name: &str) -> String {
    let full = name.trim().to_lowercase();
    let last = full.split_whitespace().last().unwrap_or("");
    format!("{last} {full}")
}

/// Compare two cells under the rules above.
pub fn compare_cells(a: &str, b: &str, player_column: bool) -> Ordering {
    SortKey::for_cell(a, player_column).compare(&SortKey::for_cell(b, player_column))
}

/// Stable in-place sort of view positions. Unknown or empty field leaves the
/// order untouched.
pub fn sort_rows(table: &RawTable, row_ix: &mut Vec<usize>, spec: &SortSpec, player_field: &str) {
    if spec.field.trim().is_empty() {
        return;
    }
    let Some(col) = table.column(&spec.field) else {
        logd!("Sort: unknown field '{}', keeping order", spec.field);
        return;
    };
    let is_player = table.column(player_field) == Some(col);

    // One key per row, then a stable sort; ties keep their current order in
    // both directions.
    let mut keyed: Vec<(SortKey, usize)> = row_ix
        .iter()
        .map(|&ix| {
            let cell = table.rows.get(ix).map(|r| cell_at(r, Some(col))).unwrap_or("");
            (SortKey::for_cell(cell, is_player), ix)
        })
        .collect();

    match spec.direction {
        SortDirection::Ascending => keyed.sort_by(|a, b| a.0.compare(&b.0)),
        SortDirection::Descending => keyed.sort_by(|a, b| b.0.compare(&a.0)),
    }

    row_ix.clear();
    row_ix.extend(keyed.into_iter().map(|(_, ix)| ix));
}
