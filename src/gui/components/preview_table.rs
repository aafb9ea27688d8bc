// src/gui/components/preview_table.rs
//
// Read-only view of the rows written by the last run.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

const WIDTHS: [f32; 3] = [90.0, 80.0, 320.0];

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(doc) = app.preview.as_ref() else {
        ui.label("No data yet. Pick a count and click Download CSV.");
        return;
    };

    if let Some(p) = &app.last_path {
        ui.label(format!("Preview of {}", p.display()));
    }

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0);
    for w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }
    table = table.column(Column::remainder().clip(true));

    table
        .header(24.0, |mut header| {
            for h in &doc.headers {
                header.col(|ui| {
                    ui.label(RichText::new(h.as_str()).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, doc.rows.len(), |mut row| {
                let Some(data) = doc.rows.get(row.index()) else { return };
                for cell in data {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        ui.label(cell.as_str()).on_hover_text(cell.as_str());
                    });
                }
            });
        });
}
