// src/query/mod.rs
//
// The query pipeline: filter -> sort -> paginate, plus ranked subsets.
// Everything here is a pure function of a table and a spec; session state
// lives in `controller`.

pub mod filter;
pub mod page;
pub mod rank;
pub mod sort;

pub use filter::{filter_rows, FilterSpec};
pub use page::{clamp_page, page_count, page_range};
pub use rank::{ranked, RankedRow};
pub use sort::{sort_rows, SortDirection, SortSpec};

use crate::{config::options::ColumnRoles, data::RawTable};

/// Filtered + sorted row positions (the full view, unpaginated).
pub fn run(table: &RawTable, roles: &ColumnRoles, filters: &FilterSpec, sort: &SortSpec) -> Vec<usize> {
    let mut ix = filter_rows(table, roles, filters);
    sort_rows(table, &mut ix, sort, &roles.player);
    ix
}
