// src/gui/components/charts.rs
//
// Ranked bar panels. Bars are painted directly; no plotting crate.

use eframe::egui::{self, Color32, Sense, Vec2};

use crate::{
    gui::app::App,
    render::{self, ChartView},
};

const BAR_H: f32 = 16.0;
const POS: Color32 = Color32::from_rgb(0x4C, 0x9A, 0xE8);
const NEG: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let charts = render::chart_views(&app.ctl);
    if charts.is_empty() {
        ui.label("No charts");
        return;
    }

    egui::ScrollArea::vertical().id_salt("charts_scroll").show(ui, |ui| {
        for chart in &charts {
            panel(ui, chart);
            ui.add_space(10.0);
        }
    });
}

fn panel(ui: &mut egui::Ui, chart: &ChartView) {
    ui.strong(&chart.title);
    ui.small(&chart.metric_label);

    if chart.bars.is_empty() {
        ui.weak("(no data)");
        return;
    }

    for bar in &chart.bars {
        ui.horizontal(|ui| {
            ui.add_sized([140.0, BAR_H], egui::Label::new(egui::RichText::new(&bar.label).small()).truncate())
                .on_hover_text(&bar.label);

            let full = (ui.available_width() - 50.0).max(20.0);
            let (rect, _) = ui.allocate_exact_size(Vec2::new(full, BAR_H), Sense::hover());
            let mut fill = rect;
            fill.set_width((full * bar.fraction).max(1.0));
            let color = if bar.value < 0.0 { NEG } else { POS };
            ui.painter().rect_filled(fill, 3.0, color);

            ui.small(&bar.text);
        });
    }
}
