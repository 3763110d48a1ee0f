// src/config/options.rs
use serde::{Deserialize, Serialize};

use super::consts::*;

/// Everything the viewer is configured with. Read once at startup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    pub datasets: Vec<DatasetScope>,
    pub columns: ColumnRoles,
    pub integer_columns: Vec<String>,
    pub hidden_columns: Vec<String>,
    pub rows_per_page: usize,
    pub charts: Vec<ChartSpec>,
    /// Rank over the filtered rows (true) or over every loaded row.
    pub charts_follow_filters: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            datasets: vec![
                DatasetScope::new("Non-All-Stars", &[DATASET_NON_ALL_STARS]),
                DatasetScope::new("All players", &[DATASET_ALL_PLAYERS, DATASET_NON_ALL_STARS]),
            ],
            columns: ColumnRoles::default(),
            integer_columns: INTEGER_COLUMNS.iter().map(|s| s!(*s)).collect(),
            hidden_columns: HIDDEN_COLUMNS.iter().map(|s| s!(*s)).collect(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            charts: ChartSpec::defaults(METRIC_COLUMN),
            charts_follow_filters: true,
        }
    }
}

impl ViewerOptions {
    pub fn dataset(&self, ix: usize) -> Option<&DatasetScope> {
        self.datasets.get(ix)
    }

    pub fn dataset_index(&self, name: &str) -> Option<usize> {
        self.datasets
            .iter()
            .position(|d| d.name.eq_ignore_ascii_case(name.trim()))
    }
}

/// How a dataset's candidate sources are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Try sources in order; the first usable one wins.
    #[default]
    FirstAvailable,
    /// Concatenate every usable source sharing the first one's header.
    Merge,
}

/// A named dataset: ordered candidate sources (paths or http(s) URLs).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetScope {
    pub name: String,
    pub sources: Vec<String>,
    #[serde(default)]
    pub policy: LoadPolicy,
}

impl DatasetScope {
    pub fn new(name: &str, sources: &[&str]) -> Self {
        Self {
            name: s!(name),
            sources: sources.iter().map(|s| s!(*s)).collect(),
            policy: LoadPolicy::FirstAvailable,
        }
    }
}

/// Which headers play the player / season / primary-metric roles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnRoles {
    pub player: String,
    pub season: String,
    pub metric: String,
}

impl Default for ColumnRoles {
    fn default() -> Self {
        Self {
            player: s!(PLAYER_COLUMN),
            season: s!(SEASON_COLUMN),
            metric: s!(METRIC_COLUMN),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankOrder {
    Largest,
    Smallest,
    LargestAbs,
}

/// One ranked chart panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub metric: String,
    pub order: RankOrder,
}

impl ChartSpec {
    pub fn new(title: &str, metric: &str, order: RankOrder) -> Self {
        Self { title: s!(title), metric: s!(metric), order }
    }

    pub fn defaults(metric: &str) -> Vec<Self> {
        vec![
            Self::new("Most undervalued", metric, RankOrder::Largest),
            Self::new("Most overvalued", metric, RankOrder::Smallest),
            Self::new("Biggest gaps", metric, RankOrder::LargestAbs),
        ]
    }
}
