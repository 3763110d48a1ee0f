// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    let (headers, rows) = app.ctl.export_rows();
    if rows.is_empty() {
        app.status("Nothing to export");
        logd!("Export: Clicked, but there's nothing to export");
        return;
    }

    let default_name = app
        .ctl
        .options()
        .dataset(app.ctl.state().scope)
        .map(|d| file::export_filename(&d.name))
        .unwrap_or_else(|| s!("export.csv"));

    let path = match file::resolve_out_path(&app.out_path_text, &default_name) {
        Ok(p) => p,
        Err(e) => {
            loge!("Export: bad output path '{}': {}", app.out_path_text, e);
            app.status(format!("Error: {e}"));
            return;
        }
    };

    match file::write_csv(&path, &headers, &rows) {
        Ok(p) => {
            app.out_path_dirty = false;
            app.status(format!("Exported {} row(s) to {}", rows.len(), p.display()));
        }
        Err(e) => {
            loge!("Export: failed {}: {}", path.display(), e);
            app.status(format!("Error: {e}"));
        }
    }
}
