// src/progress.rs
/// Lightweight progress reporting for dataset loads.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of candidate sources.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one candidate source has been tried (`ok` = usable).
    fn item_done(&mut self, _source: &str, _ok: bool) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Collects every status line; handy for the CLI's --verbose and for tests.
#[derive(Default, Debug)]
pub struct LogProgress {
    pub lines: Vec<String>,
}

impl Progress for LogProgress {
    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }
    fn item_done(&mut self, source: &str, ok: bool) {
        self.lines.push(format!("{} {}", if ok { "ok  " } else { "skip" }, source));
    }
}
