// src/gui/components/tabs.rs
//
// Dataset tabs. Clicking a tab starts a load; the previous table stays on
// screen until the new one arrives.

use eframe::egui;

use crate::{config::state::LoadStatus, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let names: Vec<String> = app.ctl.options().datasets.iter().map(|d| d.name.clone()).collect();

    // Highlight the requested tab while it loads
    let cur = match app.ctl.state().status {
        LoadStatus::Loading { scope } => scope,
        _ => app.ctl.state().scope,
    };

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for (idx, name) in names.iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, name).clicked() && !selected {
                logf!("UI: Tab switch {} → {}", names.get(cur).map(String::as_str).unwrap_or("?"), name);
                let ctx = ui.ctx().clone();
                crate::gui::actions::load(app, idx, &ctx);
            }
        }

        if app.ctl.state().is_loading() {
            ui.spinner();
        }
    });
}
