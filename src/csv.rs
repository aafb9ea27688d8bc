// src/csv.rs
use rand::Rng;

use crate::config::consts::{CSV_HEADER, CSV_SEP};
use crate::config::options::Escaping;
use crate::extract::{ExtractedFields, extract};
use crate::record::{RawRecord, RecordSet};
use crate::sample::sample;

/* ---------------- Document ---------------- */

/// Header plus one `[Name, Class, Containment, Description]` row per sampled id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvDocument {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Default for CsvDocument {
    fn default() -> Self {
        Self {
            headers: CSV_HEADER.iter().map(|h| s!(*h)).collect(),
            rows: Vec::new(),
        }
    }
}

impl CsvDocument {
    pub fn new() -> Self { Self::default() }

    /// Extract `record` and append its row under `id`.
    pub fn push_record(&mut self, id: &str, record: &RawRecord) {
        let ExtractedFields { object_class, containment, description } = extract(&record.raw_content);
        self.rows.push(vec![s!(id), object_class, containment, description]);
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    /// Header + rows joined by `\n`, no trailing newline.
    pub fn render(&self, escaping: Escaping) -> String {
        let mut out = render_row(&self.headers, escaping);
        for row in &self.rows {
            out.push('\n');
            out.push_str(&render_row(row, escaping));
        }
        out
    }
}

/* ---------------- Rows ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(CSV_SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// One line, no terminator.
pub fn render_row(row: &[String], escaping: Escaping) -> String {
    let mut line = s!();
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { line.push(CSV_SEP); }
        match escaping {
            Escaping::Rfc4180 if needs_quotes(cell) => {
                line.push('"');
                line.push_str(&cell.replace('"', "\"\""));
                line.push('"');
            }
            _ => line.push_str(cell),
        }
    }
    line
}

/* ---------------- Pipeline ---------------- */

/// Build the document for the given ids, in order. Ids missing from `records`
/// are extracted as empty records.
pub fn build_document(records: &RecordSet, ids: &[&str]) -> CsvDocument {
    build_document_with(records, ids, |_| {})
}

/// `build_document`, calling `on_row` with each id once its row is in.
pub fn build_document_with<F: FnMut(&str)>(records: &RecordSet, ids: &[&str], mut on_row: F) -> CsvDocument {
    let empty = RawRecord::default();
    let mut doc = CsvDocument::new();
    for id in ids {
        doc.push_record(id, records.get(id).unwrap_or(&empty));
        on_row(id);
    }
    doc
}

/// Sample `count` ids from `records`, extract each, and render unescaped CSV.
pub fn to_csv<R: Rng + ?Sized>(records: &RecordSet, count: usize, rng: &mut R) -> String {
    let ids = sample(&records.ids(), count, rng);
    build_document(records, &ids).render(Escaping::None)
}
