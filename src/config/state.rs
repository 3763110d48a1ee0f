// src/config/state.rs
use std::collections::BTreeSet;

use crate::{
    data::RawTable,
    query::{FilterSpec, SortSpec},
};

/// Load lifecycle as the UI sees it.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading { scope: usize },
    Ready,
    /// Every candidate failed; one message regardless of cause.
    Unavailable(String),
}

/// The single session. Owned and mutated by `Controller` only.
#[derive(Clone, Debug)]
pub struct SessionState {
    /// Index into `ViewerOptions::datasets` of the loaded table.
    pub scope: usize,
    /// Active headers + rows; `None` until the first successful load.
    pub table: Option<RawTable>,
    /// Where `table` came from.
    pub source: Option<String>,

    /// Filtered + sorted positions into `table.rows`. Rebuilt, never patched.
    pub view: Vec<usize>,

    pub filters: FilterSpec,
    pub sort: SortSpec,
    /// 1-based, always clamped to the view.
    pub current_page: usize,
    pub rows_per_page: usize,
    /// Visible header names; empty = every column.
    pub selected_columns: BTreeSet<String>,

    pub status: LoadStatus,
}

impl SessionState {
    pub fn new(rows_per_page: usize, sort: SortSpec) -> Self {
        Self {
            scope: 0,
            table: None,
            source: None,
            view: Vec::new(),
            filters: FilterSpec::default(),
            sort,
            current_page: 1,
            rows_per_page: rows_per_page.max(1),
            selected_columns: BTreeSet::new(),
            status: LoadStatus::Idle,
        }
    }

    pub fn headers(&self) -> &[String] {
        self.table.as_ref().map(|t| t.headers.as_slice()).unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading { .. })
    }
}
