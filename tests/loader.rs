// tests/loader.rs
//
// Candidate fallback and merge over real files in a temp dir.

use std::fs;
use std::path::Path;

use stat_viewer::config::options::{DatasetScope, LoadPolicy};
use stat_viewer::progress::{LogProgress, NullProgress, Progress};
use stat_viewer::store::{self, LoadError};

fn write(dir: &Path, name: &str, text: &str) -> String {
    let p = dir.join(name);
    fs::write(&p, text).unwrap();
    p.to_string_lossy().into_owned()
}

#[test]
fn first_usable_candidate_wins() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.csv").to_string_lossy().into_owned();
    let header_only = write(dir.path(), "header.csv", "season,player\n");
    let good = write(dir.path(), "good.csv", "season,player\n2020,A. One\n");
    let later = write(dir.path(), "later.csv", "season,player\n2021,B. Two\n");

    let sources = vec![missing, header_only, good.clone(), later];
    let mut prog = LogProgress::default();
    let loaded = store::load_first_available(&sources, Some(&mut prog as &mut dyn Progress)).unwrap();

    assert_eq!(loaded.source, good);
    assert_eq!(loaded.table.nrows(), 1);
    assert_eq!(loaded.table.cell(0, 1), "A. One");
    // later candidates are never tried
    assert_eq!(prog.lines.iter().filter(|l| l.starts_with("skip")).count(), 2);
    assert_eq!(prog.lines.iter().filter(|l| l.starts_with("ok")).count(), 1);
}

#[test]
fn all_candidates_failing_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let empty = write(dir.path(), "empty.csv", "");
    let missing = dir.path().join("nope.csv").to_string_lossy().into_owned();

    let err = store::load_first_available(&[empty, missing], Some(&mut NullProgress as &mut dyn Progress)).unwrap_err();
    match err {
        LoadError::Unavailable(errs) => {
            assert_eq!(errs.len(), 2);
            assert!(matches!(errs[0], LoadError::InsufficientData { rows: 0, .. }));
            assert!(matches!(errs[1], LoadError::Fetch { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn merge_concatenates_matching_headers_only() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.csv", "season,player\n2020,A. One\n");
    let b = write(dir.path(), "b.csv", "season,player\n2021,B. Two\n2022,C. Three\n");
    let other = write(dir.path(), "other.csv", "year,name\n1999,X\n");

    let scope = DatasetScope {
        name: "merged".into(),
        sources: vec![a.clone(), other, b.clone()],
        policy: LoadPolicy::Merge,
    };
    let loaded = store::load_dataset(&scope, None).unwrap();

    assert_eq!(loaded.table.nrows(), 3);
    assert_eq!(loaded.source, format!("{a} + {b}"));
    assert_eq!(loaded.table.cell(2, 1), "C. Three");
}

#[test]
fn merge_with_nothing_usable_fails() {
    let scope = DatasetScope {
        name: "none".into(),
        sources: vec!["/definitely/not/here.csv".into()],
        policy: LoadPolicy::Merge,
    };
    assert!(matches!(store::load_dataset(&scope, None), Err(LoadError::Unavailable(_))));
}
