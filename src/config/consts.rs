// src/config/consts.rs

// Local store (log file lives here)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "stat_viewer.toml";

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("stat_viewer/", env!("CARGO_PKG_VERSION"));

// Datasets
pub const DATASET_NON_ALL_STARS: &str = "data/market_value_master_1991_2026_non_all_stars.csv";
pub const DATASET_ALL_PLAYERS: &str = "data/market_value_master_1991_2026.csv";

// Column roles
pub const PLAYER_COLUMN: &str = "player";
pub const SEASON_COLUMN: &str = "season";
pub const METRIC_COLUMN: &str = "undervalued_score";

/// Rendered rounded to whole numbers.
pub const INTEGER_COLUMNS: &[&str] = &[
    "season", "age", "g", "gs", "games", "games_started", "draft_year", "draft_pick", "salary", "rank",
];

/// Hidden until the user asks for them.
pub const HIDDEN_COLUMNS: &[&str] = &["id", "player_id", "team_id", "bbref_id", "row_id"];

// Pagination
pub const DEFAULT_ROWS_PER_PAGE: usize = 100;
pub const ROWS_PER_PAGE_OPTIONS: &[usize] = &[25, 50, 100, 250];

// Charts
pub const RANK_TOP_N: usize = 10;

pub const FALLBACK_MESSAGE: &str = "Could not load CSV. Check the dataset paths.";
