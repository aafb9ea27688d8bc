// src/gui/app.rs
use std::{
    path::PathBuf,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::options::{AppOptions, Source},
    csv::CsvDocument,
    error::Result,
    runner::RunSummary,
};

pub fn run(options: eframe::NativeOptions) -> eframe::Result<()> {
    eframe::run_native(
        "SCP CSV Sampler",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppOptions::default())))),
    )
}

pub struct App {
    // single source of truth for the next run (UI thread only)
    pub options: AppOptions,

    // text fields we map <-> options on click
    pub url_text: String,
    pub out_path_text: String,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub pending: Option<Receiver<Result<RunSummary>>>,

    // last successful run
    pub preview: Option<CsvDocument>,
    pub last_path: Option<PathBuf>,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        let url_text = match &options.fetch.source {
            Source::Url(u) => u.clone(),
            Source::File(p) => p.display().to_string(),
        };
        let out_path_text = options
            .export
            .out_path()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();

        logf!("Init: source={} count={}", url_text, options.sample.count);

        Self {
            options,
            url_text,
            out_path_text,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            pending: None,
            preview: None,
            last_path: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Mirror text fields → options before a run.
    /// A source that starts with http(s):// is a URL, anything else a local file.
    pub fn sync_text_into_options(&mut self) {
        let src = self.url_text.trim();
        self.options.fetch.source = if src.starts_with("http://") || src.starts_with("https://") {
            Source::Url(s!(src))
        } else if src.is_empty() {
            Source::Url(s!())
        } else {
            Source::File(PathBuf::from(src))
        };
        self.options.export.set_path(&self.out_path_text);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::actions::poll(self, ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::controls::draw(ui, self);

            ui.separator();

            super::components::preview_table::draw(ui, self);
        });
    }
}
