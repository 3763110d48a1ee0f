// src/gui/components/filter_bar.rs
//
// Filter inputs + rows-per-page + panel toggles. Every edit goes straight
// into the controller; it decides whether anything changed.

use eframe::egui;

use crate::{
    config::consts::ROWS_PER_PAGE_OPTIONS,
    core::format::column_label,
    gui::app::App,
};

fn field(ui: &mut egui::Ui, label: &str, text: &mut String, width: f32) -> bool {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(text).desired_width(width)).changed()
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let metric_label = column_label(&app.ctl.options().columns.metric);

    ui.horizontal_wrapped(|ui| {
        if field(ui, "Player:", &mut app.inputs.player_query, 160.0) {
            app.ctl.set_player_query(&app.inputs.player_query);
        }
        if field(ui, "Season from:", &mut app.inputs.season_min, 60.0) {
            app.ctl.set_season_min(&app.inputs.season_min);
        }
        if field(ui, "to:", &mut app.inputs.season_max, 60.0) {
            app.ctl.set_season_max(&app.inputs.season_max);
        }
        if field(ui, &format!("Min {metric_label}:"), &mut app.inputs.min_metric, 60.0) {
            app.ctl.set_min_metric(&app.inputs.min_metric);
        }

        if ui
            .add_enabled(!app.inputs.is_empty(), egui::Button::new("Clear"))
            .clicked()
        {
            logf!("UI: Clear filters");
            app.inputs.clear();
            app.ctl.clear_filters();
        }

        ui.separator();

        let mut rpp = app.ctl.state().rows_per_page;
        egui::ComboBox::from_id_salt("rows_per_page")
            .selected_text(format!("{rpp} rows"))
            .show_ui(ui, |ui| {
                for &n in ROWS_PER_PAGE_OPTIONS {
                    ui.selectable_value(&mut rpp, n, format!("{n} rows"));
                }
            });
        if rpp != app.ctl.state().rows_per_page {
            logf!("UI: rows per page → {}", rpp);
            app.ctl.set_rows_per_page(rpp);
        }

        ui.separator();
        ui.toggle_value(&mut app.show_columns, "Columns");
        ui.toggle_value(&mut app.show_charts, "Charts");
    });
}
