// src/gui/components/pager.rs
use eframe::egui;

use crate::{gui::app::App, render};

/// Summary pills + Prev/Next.
pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let pills = render::summary(&app.ctl);
    let page = app.ctl.state().current_page;
    let pages = app.ctl.page_count();

    ui.horizontal(|ui| {
        for p in &pills {
            egui::Frame::new()
                .fill(ui.visuals().faint_bg_color)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(8, 2))
                .show(ui, |ui| {
                    ui.label(p);
                });
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(page < pages, egui::Button::new("Next ›")).clicked() {
                app.ctl.next_page();
            }
            if ui.add_enabled(page > 1, egui::Button::new("‹ Prev")).clicked() {
                app.ctl.prev_page();
            }
        });
    });
}
