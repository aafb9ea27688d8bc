// src/gui/components/controls.rs

use eframe::egui;
use crate::{
    config::{consts::MAX_GUI_SAMPLE_COUNT, options::Escaping},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let enabled = !app.running;

    ui.add_enabled_ui(enabled, |ui| {
        egui::Grid::new("controls")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Source");
                ui.add(egui::TextEdit::singleline(&mut app.url_text).desired_width(520.0))
                    .on_hover_text("URL of the JSON record document, or a local file path");
                ui.end_row();

                ui.label("Items");
                let before = app.options.sample.count;
                ui.add(egui::DragValue::new(&mut app.options.sample.count).range(0..=MAX_GUI_SAMPLE_COUNT));
                if app.options.sample.count != before {
                    logd!("UI: count → {}", app.options.sample.count);
                }
                ui.end_row();

                ui.label("Save as");
                ui.add(egui::TextEdit::singleline(&mut app.out_path_text).desired_width(520.0));
                ui.end_row();
            });

        let mut quote = app.options.export.escaping == Escaping::Rfc4180;
        if ui.checkbox(&mut quote, "Quote fields containing commas/quotes/newlines").changed() {
            app.options.export.escaping = if quote { Escaping::Rfc4180 } else { Escaping::None };
            logf!("UI: escaping → {:?}", app.options.export.escaping);
        }
    });

    ui.add_space(4.0);

    ui.horizontal(|ui| {
        let label = if app.running { "Loading..." } else { "Download CSV" };
        if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
            actions::download(app);
        }
        if app.running {
            ui.spinner();
        }
        ui.label(app.status_text());
    });
}
