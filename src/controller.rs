// src/controller.rs
//
// Controller: the one owner of SessionState.
//
// Every user action is a method here. Each one updates the inputs and
// rebuilds the view from scratch (filter -> sort -> clamp page), so the
// view can never drift from the inputs.
//
// Loads are split into begin/finish so the fetch can run elsewhere. Each
// begin hands out a new generation; a finish carrying an older generation
// is dropped. The last request wins no matter which load returns first.

use std::collections::BTreeSet;

use crate::{
    config::{
        consts::{FALLBACK_MESSAGE, RANK_TOP_N},
        options::{ChartSpec, DatasetScope, ViewerOptions},
        state::{LoadStatus, SessionState},
    },
    data::RowView,
    progress::Progress,
    query::{self, FilterSpec, RankedRow, SortDirection, SortSpec},
    store::{self, LoadError, Loaded},
};

/// Handed out by `begin_load`; carry it to the loader and back.
#[derive(Clone, Debug)]
pub struct LoadRequest {
    pub generation: u64,
    pub scope: usize,
    pub dataset: DatasetScope,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// New table installed, pipeline reset.
    Applied,
    /// Load failed; previous table (if any) kept.
    Failed,
    /// A newer request exists; result ignored.
    Stale,
}

pub struct Controller {
    options: ViewerOptions,
    state: SessionState,
    generation: u64,
    pending_scope: Option<usize>,
}

impl Controller {
    pub fn new(options: ViewerOptions) -> Self {
        let sort = default_sort(&options);
        let state = SessionState::new(options.rows_per_page, sort);
        Self { options, state, generation: 0, pending_scope: None }
    }

    #[inline] pub fn options(&self) -> &ViewerOptions { &self.options }
    #[inline] pub fn state(&self) -> &SessionState { &self.state }

    /* ---------------- loading ---------------- */

    /// Start loading dataset `scope`. `None` if there is no such dataset.
    pub fn begin_load(&mut self, scope: usize) -> Option<LoadRequest> {
        let dataset = self.options.dataset(scope)?.clone();
        self.generation += 1;
        self.pending_scope = Some(scope);
        self.state.status = LoadStatus::Loading { scope };
        logf!("Session: load #{} '{}'", self.generation, dataset.name);
        Some(LoadRequest { generation: self.generation, scope, dataset })
    }

    /// Apply a load result if it answers the latest request.
    pub fn finish_load(&mut self, generation: u64, result: Result<Loaded, LoadError>) -> LoadOutcome {
        if generation != self.generation {
            logd!("Session: dropping stale load #{} (latest #{})", generation, self.generation);
            return LoadOutcome::Stale;
        }
        let scope = self.pending_scope.take().unwrap_or(self.state.scope);

        match result {
            Ok(loaded) => {
                self.install(scope, loaded);
                LoadOutcome::Applied
            }
            Err(e) => {
                loge!("Session: load #{} failed: {}", generation, e);
                self.state.status = LoadStatus::Unavailable(s!(FALLBACK_MESSAGE));
                LoadOutcome::Failed
            }
        }
    }

    /// begin + load on this thread + finish.
    pub fn load_blocking(&mut self, scope: usize, progress: Option<&mut dyn Progress>) -> LoadOutcome {
        let Some(req) = self.begin_load(scope) else {
            loge!("Session: no dataset #{}", scope);
            self.state.status = LoadStatus::Unavailable(s!(FALLBACK_MESSAGE));
            return LoadOutcome::Failed;
        };
        let result = store::load_dataset(&req.dataset, progress);
        self.finish_load(req.generation, result)
    }

    /// Replace the table and reset filters, sort, page and columns.
    fn install(&mut self, scope: usize, loaded: Loaded) {
        let hidden = &self.options.hidden_columns;
        let headers = &loaded.table.headers;
        let any_hidden = headers
            .iter()
            .any(|h| hidden.iter().any(|x| x.eq_ignore_ascii_case(h)));

        self.state.selected_columns = if any_hidden {
            headers
                .iter()
                .filter(|h| !hidden.iter().any(|x| x.eq_ignore_ascii_case(h)))
                .cloned()
                .collect()
        } else {
            BTreeSet::new()
        };

        logf!(
            "Session: showing {} (rows={}, cols={})",
            loaded.source,
            loaded.table.nrows(),
            loaded.table.ncols()
        );

        self.state.scope = scope;
        self.state.source = Some(loaded.source);
        self.state.table = Some(loaded.table);
        self.state.filters.clear();
        self.state.sort = default_sort(&self.options);
        self.state.current_page = 1;
        self.state.status = LoadStatus::Ready;
        self.refresh();
    }

    /* ---------------- filters ---------------- */

    pub fn set_filters(&mut self, filters: FilterSpec) {
        if self.state.filters != filters {
            self.state.filters = filters;
            self.state.current_page = 1;
            self.refresh();
        }
    }

    pub fn set_player_query(&mut self, text: &str) {
        let f = FilterSpec { player_query: s!(text), ..self.state.filters.clone() };
        self.set_filters(f);
    }

    pub fn set_season_min(&mut self, text: &str) {
        let f = FilterSpec { season_min: s!(text), ..self.state.filters.clone() };
        self.set_filters(f);
    }

    pub fn set_season_max(&mut self, text: &str) {
        let f = FilterSpec { season_max: s!(text), ..self.state.filters.clone() };
        self.set_filters(f);
    }

    pub fn set_min_metric(&mut self, text: &str) {
        let f = FilterSpec { min_metric: s!(text), ..self.state.filters.clone() };
        self.set_filters(f);
    }

    pub fn clear_filters(&mut self) {
        self.set_filters(FilterSpec::default());
    }

    /* ---------------- sort ---------------- */

    pub fn set_sort(&mut self, sort: SortSpec) {
        if self.state.sort != sort {
            self.state.sort = sort;
            self.state.current_page = 1;
            self.refresh();
        }
    }

    /// Header click: same column flips direction; a new column starts
    /// descending (player column ascending).
    pub fn sort_by_column(&mut self, field: &str) {
        let cur = &self.state.sort;
        let next = if cur.field == field {
            SortSpec::new(field, cur.direction.toggled())
        } else if field.eq_ignore_ascii_case(&self.options.columns.player) {
            SortSpec::new(field, SortDirection::Ascending)
        } else {
            SortSpec::new(field, SortDirection::Descending)
        };
        self.set_sort(next);
    }

    /* ---------------- pages ---------------- */

    pub fn set_page(&mut self, page: usize) {
        self.state.current_page =
            query::clamp_page(page, self.state.view.len(), self.state.rows_per_page);
    }

    pub fn next_page(&mut self) { self.set_page(self.state.current_page + 1); }
    pub fn prev_page(&mut self) { self.set_page(self.state.current_page.saturating_sub(1)); }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        let rpp = rows_per_page.max(1);
        if self.state.rows_per_page != rpp {
            self.state.rows_per_page = rpp;
            self.state.current_page = 1;
        }
    }

    pub fn page_count(&self) -> usize {
        query::page_count(self.state.view.len(), self.state.rows_per_page)
    }

    /* ---------------- columns ---------------- */

    pub fn is_column_visible(&self, name: &str) -> bool {
        self.state.selected_columns.is_empty() || self.state.selected_columns.contains(name)
    }

    /// Show/hide one column. The last visible column can't be hidden.
    pub fn toggle_column(&mut self, name: &str) {
        let headers = self.state.headers().to_vec();
        if !headers.iter().any(|h| h == name) {
            return;
        }
        let sel = &mut self.state.selected_columns;
        if sel.is_empty() {
            sel.extend(headers.iter().cloned());
        }

        if sel.contains(name) {
            if sel.len() > 1 {
                sel.remove(name);
            }
        } else {
            sel.insert(s!(name));
        }

        // Every column selected is the same as "all"
        if headers.iter().all(|h| sel.contains(h)) {
            sel.clear();
        }
    }

    pub fn show_all_columns(&mut self) {
        self.state.selected_columns.clear();
    }

    /// Source positions of the visible columns, in header order.
    pub fn visible_columns(&self) -> Vec<usize> {
        let headers = self.state.headers();
        let cols: Vec<usize> = (0..headers.len())
            .filter(|&i| self.is_column_visible(&headers[i]))
            .collect();
        if cols.is_empty() { (0..headers.len()).collect() } else { cols }
    }

    /* ---------------- derived views ---------------- */

    /// Full filtered + sorted view.
    pub fn view(&self) -> Option<RowView<'_>> {
        let table = self.state.table.as_ref()?;
        Some(RowView::new(table, self.state.view.clone()))
    }

    /// The current page of the view.
    pub fn page_view(&self) -> Option<RowView<'_>> {
        let table = self.state.table.as_ref()?;
        let range = query::page_range(self.state.current_page, self.state.view.len(), self.state.rows_per_page);
        Some(RowView::new(table, self.state.view[range].to_vec()))
    }

    /// Ranked subsets for every configured chart.
    pub fn charts(&self) -> Vec<(&ChartSpec, Vec<RankedRow>)> {
        let Some(table) = self.state.table.as_ref() else {
            return Vec::new();
        };
        let all: Vec<usize>;
        let rows: &[usize] = if self.options.charts_follow_filters {
            &self.state.view
        } else {
            all = (0..table.nrows()).collect();
            &all
        };
        self.options
            .charts
            .iter()
            .map(|c| (c, query::ranked(table, rows, &self.options.columns, c, RANK_TOP_N)))
            .collect()
    }

    /// Visible headers + the whole view restricted to them (copy/export).
    pub fn export_rows(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let Some(view) = self.view() else {
            return (Vec::new(), Vec::new());
        };
        let cols = self.visible_columns();
        let headers = cols.iter().map(|&c| self.state.headers()[c].clone()).collect();
        (headers, view.project(&cols))
    }

    /* ---------------- pipeline ---------------- */

    fn refresh(&mut self) {
        match self.state.table.as_ref() {
            Some(table) => {
                self.state.view =
                    query::run(table, &self.options.columns, &self.state.filters, &self.state.sort);
            }
            None => self.state.view.clear(),
        }
        self.state.current_page =
            query::clamp_page(self.state.current_page, self.state.view.len(), self.state.rows_per_page);
        logd!(
            "Pipeline: {} row(s) match, sort={:?} {:?}, page {}",
            self.state.view.len(),
            self.state.sort.field,
            self.state.sort.direction,
            self.state.current_page
        );
    }
}

/// Primary metric, descending.
pub fn default_sort(options: &ViewerOptions) -> SortSpec {
    SortSpec::new(&options.columns.metric, SortDirection::Descending)
}
