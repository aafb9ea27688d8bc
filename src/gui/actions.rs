// src/gui/actions.rs
//
// "Download CSV": run the whole pipeline on a worker thread and pick the
// outcome up from the UI loop.

use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
    time::Duration,
};

use eframe::egui;

use crate::{gui::app::App, gui::progress::GuiProgress, runner};

pub fn download(app: &mut App) {
    if app.running {
        return;
    }
    app.sync_text_into_options();

    if let Err(e) = app.options.validate() {
        loge!("Download: {e}");
        app.status(format!("Error: {e}"));
        return;
    }

    let opts = app.options.clone();
    let status = app.status.clone();
    let (tx, rx) = mpsc::channel();

    logf!(
        "Download: Begin source={} count={}",
        opts.fetch.source.describe(),
        opts.sample.count
    );

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        // receiver gone → window closed; nothing left to report to
        let _ = tx.send(runner::run(&opts, Some(&mut prog)));
    });

    app.pending = Some(rx);
    app.running = true;
}

/// Check the worker channel once per frame.
pub fn poll(app: &mut App, ctx: &egui::Context) {
    let msg = match app.pending.as_ref() {
        Some(rx) => rx.try_recv(),
        None => return,
    };

    match msg {
        Err(TryRecvError::Empty) => {
            ctx.request_repaint_after(Duration::from_millis(100));
            return;
        }
        Ok(Ok(summary)) => {
            let rows = summary.document.row_count();
            let status = match &summary.path {
                Some(p) => {
                    logf!("Download: OK rows={} → {}", rows, p.display());
                    format!("Saved {} of {} record(s) to {}", rows, summary.available, p.display())
                }
                None => format!("Extracted {} of {} record(s)", rows, summary.available),
            };
            app.status(status);
            app.last_path = summary.path;
            app.preview = Some(summary.document);
        }
        Ok(Err(e)) => {
            loge!("Download: Error: {e}");
            app.status(format!("Error: {e}"));
        }
        Err(TryRecvError::Disconnected) => {
            loge!("Download: worker ended without a result");
            app.status("Error: worker stopped unexpectedly");
        }
    }

    app.pending = None;
    app.running = false;
}
