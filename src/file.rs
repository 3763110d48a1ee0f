// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::csv::write_row;

/// Write headers + rows as CSV to `path`, creating parent directories.
/// Returns the path written to.
pub fn write_csv(
    path: &Path,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    if !headers.is_empty() {
        write_row(&mut out, headers)?;
    }
    for row in rows {
        write_row(&mut out, row)?;
    }
    out.flush()?;

    logf!("Export: {} row(s) -> {}", rows.len(), path.display());
    Ok(path.to_path_buf())
}

/// `user_o` as typed; a trailing separator or an existing directory means
/// "put `default_filename` in there".
pub fn resolve_out_path(user_o: &str, default_filename: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let user_o = user_o.trim();
    if user_o.is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(user_o) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

fn looks_like_dir_hint(s: &str) -> bool {
    s.ends_with('/') || s.ends_with('\\')
}

/// `All players` -> `all_players.csv`
pub fn export_filename(dataset_name: &str) -> String {
    let mut out = String::with_capacity(dataset_name.len() + 4);
    let mut last_us = false;
    for ch in dataset_name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_us = false;
        } else if !last_us {
            out.push('_');
            last_us = true;
        }
    }
    let stem = out.trim_matches('_');
    if stem.is_empty() { s!("export.csv") } else { format!("{stem}.csv") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_from_dataset_names() {
        assert_eq!(export_filename("All players"), "all_players.csv");
        assert_eq!(export_filename("Non-All-Stars"), "non_all_stars.csv");
        assert_eq!(export_filename("  "), "export.csv");
    }

    #[test]
    fn dir_hint_gets_default_name() {
        let dir = tempfile::tempdir().unwrap();
        let typed = format!("{}/", dir.path().join("out").display());
        let p = resolve_out_path(&typed, "x.csv").unwrap();
        assert!(p.ends_with("x.csv"));
        assert!(dir.path().join("out").is_dir());
    }

    #[test]
    fn written_file_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/view.csv");
        let headers = row!["player", "note"];
        let rows = vec![row!["A. One", "a,b"]];
        write_csv(&path, &headers, &rows).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(crate::csv::parse_rows(&text), vec![headers, rows[0].clone()]);
    }
}
