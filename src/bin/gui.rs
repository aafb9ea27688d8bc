// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use scp_csv::{gui, log::{self, LogOptions}};
use eframe::egui::ViewportBuilder;

fn main() {
    if let Err(e) = log::init(LogOptions::default()) {
        eprintln!("Logging disabled: {}", e);
    }

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([900.0, 560.0])
            .with_title("SCP CSV Sampler"),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
