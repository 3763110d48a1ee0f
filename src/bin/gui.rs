// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use stat_viewer::{config::settings, gui, loge, log, logf};

fn main() {
    log::init();

    let viewer = match settings::load(None) {
        Ok(v) => v,
        Err(e) => {
            loge!("Settings: {}; using defaults", e);
            Default::default()
        }
    };
    logf!("Startup: GUI");

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Stat Viewer")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, viewer) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
