// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        mpsc::{self, Receiver, Sender},
        Arc, Mutex,
    },
};

use eframe::egui;

use crate::{
    config::{consts::FALLBACK_MESSAGE, options::ViewerOptions},
    controller::{Controller, LoadOutcome},
    file,
    query::FilterSpec,
    store::{LoadError, Loaded},
};

/// What a loader thread sends back: (generation, result).
pub type LoadMsg = (u64, Result<Loaded, LoadError>);

pub fn run(native: eframe::NativeOptions, options: ViewerOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Stat Viewer",
        native,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx, options)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub ctl: Controller,

    // filter box contents; pushed into the controller on change
    pub inputs: FilterSpec,

    // output text field for Export
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub show_columns: bool,
    pub show_charts: bool,

    // status line (loader threads write here too)
    pub status: Arc<Mutex<String>>,

    pub(crate) load_tx: Sender<LoadMsg>,
    load_rx: Receiver<LoadMsg>,
}

impl App {
    pub fn new(ctx: &egui::Context, options: ViewerOptions) -> Self {
        let (load_tx, load_rx) = mpsc::channel();
        let out_path_text = options
            .dataset(0)
            .map(|d| file::export_filename(&d.name))
            .unwrap_or_else(|| s!("export.csv"));

        logf!("Init: {} dataset(s)", options.datasets.len());

        let mut app = Self {
            ctl: Controller::new(options),
            inputs: FilterSpec::default(),
            out_path_text,
            out_path_dirty: false,
            show_columns: false,
            show_charts: true,
            status: Arc::new(Mutex::new(s!("Idle"))),
            load_tx,
            load_rx,
        };

        // First dataset loads right away
        super::actions::load(&mut app, 0, ctx);
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Apply finished loads. Stale ones are dropped by the controller.
    fn poll_loads(&mut self) {
        while let Ok((generation, result)) = self.load_rx.try_recv() {
            match self.ctl.finish_load(generation, result) {
                LoadOutcome::Applied => {
                    self.inputs = FilterSpec::default();
                    if !self.out_path_dirty {
                        if let Some(d) = self.ctl.options().dataset(self.ctl.state().scope) {
                            self.out_path_text = file::export_filename(&d.name);
                        }
                    }
                    let state = self.ctl.state();
                    let rows = state.table.as_ref().map(|t| t.nrows()).unwrap_or(0);
                    let src = state.source.clone().unwrap_or_default();
                    self.status(format!("Loaded: {src} ({rows} rows)"));
                }
                LoadOutcome::Failed => self.status(FALLBACK_MESSAGE),
                LoadOutcome::Stale => {}
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loads();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            super::components::tabs::draw(ui, self);
            ui.separator();
            super::components::filter_bar::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            super::components::export_bar::draw(ui, self);
        });

        if self.show_columns {
            egui::SidePanel::right("columns")
                .resizable(false)
                .show(ctx, |ui| {
                    super::components::column_panel::draw(ui, self);
                });
        }

        if self.show_charts {
            egui::SidePanel::left("charts")
                .resizable(true)
                .default_width(320.0)
                .show(ctx, |ui| {
                    super::components::charts::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::pager::draw(ui, self);
            ui.separator();
            super::components::data_table::draw(ui, self);
        });
    }
}
