// src/gui/actions/load.rs
use std::thread;

use eframe::egui;

use crate::{
    gui::{app::App, progress::GuiProgress},
    progress::Progress,
    store,
};

/// Start loading dataset `scope` on a worker thread. The result comes back
/// through the app's channel; `App::poll_loads` applies it.
pub fn load(app: &mut App, scope: usize, ctx: &egui::Context) {
    let Some(req) = app.ctl.begin_load(scope) else {
        loge!("Load: no dataset #{}", scope);
        return;
    };
    app.status(format!("Loading {}…", req.dataset.name));

    let tx = app.load_tx.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let result = store::load_dataset(&req.dataset, Some(&mut prog as &mut dyn Progress));
        // Receiver gone means the window closed
        if tx.send((req.generation, result)).is_err() {
            logd!("Load: #{} finished after shutdown", req.generation);
        }
        ctx.request_repaint();
    });
}
