// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv, gui::app::App};

/// Whole filtered view, visible columns only, as CSV text.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let (headers, rows) = app.ctl.export_rows();
    if rows.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    logf!("Copy: rows={}, headers={}", rows.len(), headers.len());
    ui_ctx.copy_text(csv::rows_to_string(&headers, &rows));
    app.status(format!("Copied {} row(s) to clipboard", rows.len()));
}
