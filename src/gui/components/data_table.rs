// src/gui/components/data_table.rs
//
// Draws the current page. Headers are clickable and sort the whole view;
// numeric columns are right-aligned.

use eframe::egui::{self, Align, CursorIcon, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::App, render};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let view = render::table_view(&app.ctl);

    if let Some(msg) = &view.message {
        ui.colored_label(ui.visuals().warn_fg_color, msg);
    }
    if view.columns.is_empty() {
        if view.message.is_none() {
            ui.label("No data loaded");
        }
        return;
    }

    // Scroll bars allocate space instead of floating over content
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let ints = app.ctl.options().integer_columns.clone();
    let numeric: Vec<bool> = view
        .columns
        .iter()
        .enumerate()
        .map(|(i, c)| render::is_numeric_column(&c.name, &ints, &view.rows, i))
        .collect();

    let mut clicked: Option<String> = None;
    let avail_h = ui.available_height();

    egui::ScrollArea::horizontal()
        .id_salt("table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("stat_table", app.ctl.state().scope));
            for (i, _) in view.columns.iter().enumerate() {
                let w = if numeric[i] { 70.0 } else { 160.0 };
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(30.0));
            }

            table
                .header(24.0, |mut header| {
                    for (i, c) in view.columns.iter().enumerate() {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let text = match c.sorted {
                                Some(d) => format!("{} {}", c.label, d.arrow()),
                                None => c.label.clone(),
                            };
                            let layout = if numeric[i] {
                                Layout::right_to_left(Align::Center)
                            } else {
                                Layout::left_to_right(Align::Center)
                            };
                            ui.with_layout(layout, |ui| {
                                let resp = ui
                                    .add(egui::Label::new(RichText::new(text).strong()).selectable(false))
                                    .interact(Sense::click())
                                    .on_hover_cursor(CursorIcon::PointingHand)
                                    .on_hover_text(&c.name);
                                if resp.clicked() {
                                    clicked = Some(c.name.clone());
                                }
                            });
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, view.rows.len(), |mut row| {
                        let Some(cells) = view.rows.get(row.index()) else { return };
                        for (i, cell) in cells.iter().enumerate() {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if numeric[i] {
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                        ui.label(RichText::new(cell).monospace());
                                    });
                                } else {
                                    ui.label(cell);
                                }
                            });
                        }
                    });
                });
        });

    if let Some(field) = clicked {
        logf!("UI: Sort by {}", field);
        app.ctl.sort_by_column(&field);
    }
}
