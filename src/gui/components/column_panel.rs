// src/gui/components/column_panel.rs
use eframe::egui;

use crate::{core::format::column_label, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Columns");

    let headers = app.ctl.state().headers().to_vec();
    if headers.is_empty() {
        ui.label("No data loaded");
        return;
    }

    if ui.button("All").clicked() {
        logf!("UI: Show all columns");
        app.ctl.show_all_columns();
    }
    ui.separator();

    egui::ScrollArea::vertical().id_salt("columns_scroll").show(ui, |ui| {
        for name in &headers {
            let mut on = app.ctl.is_column_visible(name);
            if ui.checkbox(&mut on, column_label(name)).on_hover_text(name).changed() {
                logd!("UI: toggle column {} → {}", name, on);
                app.ctl.toggle_column(name);
            }
        }
    });
}
