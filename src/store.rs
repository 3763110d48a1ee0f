// src/store.rs
//
// Loading datasets: read/fetch text, parse, validate shape.
//
// A dataset is an ordered list of candidate sources. Sources are tried one
// after another (never concurrently); which one wins is part of the
// contract, so the order is kept explicit in `DatasetScope::sources`.

use std::fs;

use thiserror::Error;

use crate::{
    config::options::{DatasetScope, LoadPolicy},
    core::net::{self, HttpBody},
    csv::parse_rows,
    data::RawTable,
    progress::Progress,
};

#[derive(Debug, Error)]
pub enum LoadError {
    /// I/O or network failure.
    #[error("could not read {origin}: {message}")]
    Fetch { origin: String, message: String },
    /// The server answered with a non-success status.
    #[error("{origin} returned HTTP {status}")]
    Status { origin: String, status: u16 },
    /// Parsed, but no header + data row.
    #[error("{origin} has {rows} parsed row(s); need a header and at least one data row")]
    InsufficientData { origin: String, rows: usize },
    /// Every candidate failed.
    #[error("no usable source ({} tried)", .0.len())]
    Unavailable(Vec<LoadError>),
}

/// A successful load.
#[derive(Clone, Debug)]
pub struct Loaded {
    /// Where the rows came from (`a.csv + b.csv` for merged loads).
    pub source: String,
    pub table: RawTable,
}

/// Raw text of a source: http(s) URLs are fetched, anything else is a path.
pub fn fetch_text(source: &str) -> Result<String, LoadError> {
    if net::is_url(source) {
        match net::http_get(source) {
            Ok(HttpBody::Ok(text)) => Ok(text),
            Ok(HttpBody::Status(status)) => Err(LoadError::Status { origin: s!(source), status }),
            Err(e) => Err(LoadError::Fetch { origin: s!(source), message: e.to_string() }),
        }
    } else {
        fs::read_to_string(source)
            .map_err(|e| LoadError::Fetch { origin: s!(source), message: e.to_string() })
    }
}

/// Parse text into a table; fewer than two rows is a failure.
pub fn parse_table(origin: &str, text: &str) -> Result<RawTable, LoadError> {
    let parsed = parse_rows(text);
    let rows = parsed.len();
    RawTable::from_parsed(parsed).ok_or_else(|| LoadError::InsufficientData { origin: s!(origin), rows })
}

pub fn load_one(source: &str) -> Result<RawTable, LoadError> {
    let text = fetch_text(source)?;
    parse_table(source, &text)
}

/// First usable source wins. Failures are logged and skipped.
pub fn load_first_available(
    sources: &[String],
    mut progress: Option<&mut dyn Progress>,
) -> Result<Loaded, LoadError> {
    if let Some(p) = progress.as_deref_mut() { p.begin(sources.len()); }

    let mut errors = Vec::new();
    for src in sources {
        if let Some(p) = progress.as_deref_mut() { p.log(&format!("Loading {src}…")); }

        match load_one(src) {
            Ok(table) => {
                logf!("Load: {} ok (rows={}, cols={})", src, table.nrows(), table.ncols());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(src, true);
                    p.finish();
                }
                return Ok(Loaded { source: src.clone(), table });
            }
            Err(e) => {
                logd!("Load: {} skipped ({})", src, e);
                if let Some(p) = progress.as_deref_mut() { p.item_done(src, false); }
                errors.push(e);
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() { p.finish(); }
    loge!("Load: no usable source among {} candidate(s)", sources.len());
    Err(LoadError::Unavailable(errors))
}

/// Concatenate every usable source. The first usable source fixes the
/// header; later sources with a different header are skipped.
pub fn load_merged(
    sources: &[String],
    mut progress: Option<&mut dyn Progress>,
) -> Result<Loaded, LoadError> {
    if let Some(p) = progress.as_deref_mut() { p.begin(sources.len()); }

    let mut merged: Option<RawTable> = None;
    let mut used: Vec<&str> = Vec::new();
    let mut errors = Vec::new();

    for src in sources {
        if let Some(p) = progress.as_deref_mut() { p.log(&format!("Loading {src}…")); }

        let table = match load_one(src) {
            Ok(t) => t,
            Err(e) => {
                logd!("Load: {} skipped ({})", src, e);
                if let Some(p) = progress.as_deref_mut() { p.item_done(src, false); }
                errors.push(e);
                continue;
            }
        };

        let ok = if let Some(m) = merged.as_mut() {
            if m.headers == table.headers {
                m.rows.extend(table.rows);
                true
            } else {
                loge!("Load: {} has a different header, not merged", src);
                false
            }
        } else {
            merged = Some(table);
            true
        };
        if ok { used.push(src.as_str()); }
        if let Some(p) = progress.as_deref_mut() { p.item_done(src, ok); }
    }

    if let Some(p) = progress.as_deref_mut() { p.finish(); }

    match merged {
        Some(table) => {
            logf!("Load: merged {} source(s) (rows={})", used.len(), table.nrows());
            Ok(Loaded { source: used.join(" + "), table })
        }
        None => {
            loge!("Load: no usable source among {} candidate(s)", sources.len());
            Err(LoadError::Unavailable(errors))
        }
    }
}

/// Load a dataset according to its policy.
pub fn load_dataset(
    scope: &DatasetScope,
    progress: Option<&mut dyn Progress>,
) -> Result<Loaded, LoadError> {
    logf!("Load: dataset '{}' ({:?}, {} source(s))", scope.name, scope.policy, scope.sources.len());
    match scope.policy {
        LoadPolicy::FirstAvailable => load_first_available(&scope.sources, progress),
        LoadPolicy::Merge => load_merged(&scope.sources, progress),
    }
}
