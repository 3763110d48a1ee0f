// src/config/settings.rs
//
// Optional TOML settings file. Missing file = defaults; a file that exists
// but doesn't parse is an error the caller gets to report.
//
//   rows_per_page = 50
//
//   [columns]
//   metric = "undervalued_score"
//
//   [[datasets]]
//   name = "All players"
//   sources = ["data/a.csv", "https://example.org/b.csv"]
//   policy = "merge"

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::consts::SETTINGS_FILE;
use super::options::ViewerOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read settings {path}: {err}")]
    Read { path: PathBuf, err: std::io::Error },
    #[error("invalid settings {path}: {err}")]
    Parse { path: PathBuf, err: toml::de::Error },
    #[error("settings {path}: {msg}")]
    Invalid { path: PathBuf, msg: String },
}

/// Load settings from `path`, or from `stat_viewer.toml` in the working
/// directory when no path is given.
pub fn load(path: Option<&Path>) -> Result<ViewerOptions, ConfigError> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(SETTINGS_FILE), false),
    };

    if !explicit && !path.exists() {
        logd!("Settings: {} not found, using defaults", path.display());
        return Ok(ViewerOptions::default());
    }

    let text = fs::read_to_string(&path).map_err(|err| ConfigError::Read { path: path.clone(), err })?;
    let opts = from_toml_str(&text).map_err(|err| ConfigError::Parse { path: path.clone(), err })?;
    validate(&opts).map_err(|msg| ConfigError::Invalid { path: path.clone(), msg })?;

    logf!("Settings: loaded {} (datasets={})", path.display(), opts.datasets.len());
    Ok(opts)
}

pub fn from_toml_str(text: &str) -> Result<ViewerOptions, toml::de::Error> {
    toml::from_str(text)
}

fn validate(opts: &ViewerOptions) -> Result<(), String> {
    if opts.datasets.is_empty() {
        return Err(s!("at least one [[datasets]] entry is required"));
    }
    if let Some(d) = opts.datasets.iter().find(|d| d.sources.is_empty()) {
        return Err(format!("dataset '{}' has no sources", d.name));
    }
    if opts.rows_per_page == 0 {
        return Err(s!("rows_per_page must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::{LoadPolicy, RankOrder};

    #[test]
    fn empty_file_is_all_defaults() {
        let opts = from_toml_str("").unwrap();
        assert_eq!(opts, ViewerOptions::default());
    }

    #[test]
    fn partial_file_overrides_only_what_it_names() {
        let text = r#"
            rows_per_page = 25

            [columns]
            metric = "value_over_replacement"

            [[datasets]]
            name = "Both"
            sources = ["a.csv", "b.csv"]
            policy = "merge"

            [[charts]]
            title = "Top"
            metric = "value_over_replacement"
            order = "largest_abs"
        "#;
        let opts = from_toml_str(text).unwrap();
        assert_eq!(opts.rows_per_page, 25);
        assert_eq!(opts.columns.metric, "value_over_replacement");
        assert_eq!(opts.columns.player, "player");
        assert_eq!(opts.datasets.len(), 1);
        assert_eq!(opts.datasets[0].policy, LoadPolicy::Merge);
        assert_eq!(opts.charts[0].order, RankOrder::LargestAbs);
        assert!(opts.charts_follow_filters);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = load(Some(Path::new("definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn zero_rows_per_page_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.toml");
        fs::write(&path, "rows_per_page = 0\n").unwrap();
        let err = load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
