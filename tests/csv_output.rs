// tests/csv_output.rs
//
// RecordSet → CSV string: header, row counts, field order, escaping modes.
//
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use scp_csv::config::options::Escaping;
use scp_csv::csv::{build_document, build_document_with, render_row, to_csv, CsvDocument};
use scp_csv::{RawRecord, RecordSet};

const HEADER: &str = "Name,Class,Containment,Description";

fn record(class: &str) -> RawRecord {
    RawRecord::new(format!(
        "<p>Object Class: {class}\n</p><p>Special Containment Procedures: Box\n</p><p>Description: Thing\n</p>"
    ))
}

fn set_of(n: usize) -> RecordSet {
    (0..n).map(|i| (format!("scp-{i:03}"), record("Safe"))).collect()
}

#[test]
fn single_record_end_to_end() {
    let records: RecordSet = [(
        "scp-001",
        RawRecord::new(
            "<p>Object Class: Safe\n</p><p>Special Containment Procedures: Locked box\n</p><p>Description: A box.\n</p>",
        ),
    )]
    .into_iter()
    .collect();

    let csv = to_csv(&records, 1, &mut rand::thread_rng());
    assert_eq!(csv, "Name,Class,Containment,Description\nscp-001,Safe,Locked box,A box.");
}

#[test]
fn zero_count_is_header_only() {
    let csv = to_csv(&set_of(5), 0, &mut StdRng::seed_from_u64(0));
    assert_eq!(csv, HEADER);
}

#[test]
fn empty_record_set_is_header_only() {
    let csv = to_csv(&RecordSet::new(), 20, &mut StdRng::seed_from_u64(0));
    assert_eq!(csv, HEADER);
}

#[test]
fn no_trailing_newline() {
    let csv = to_csv(&set_of(3), 3, &mut StdRng::seed_from_u64(9));
    assert!(!csv.ends_with('\n'));
}

#[test]
fn record_without_markers_gives_empty_columns() {
    let records: RecordSet = [("scp-404", RawRecord::new("<p>[DATA EXPUNGED]</p>"))].into_iter().collect();
    let csv = to_csv(&records, 1, &mut StdRng::seed_from_u64(0));
    assert_eq!(csv, format!("{HEADER}\nscp-404,,,"));
}

#[test]
fn unescaped_by_default() {
    let records: RecordSet = [("scp-002", RawRecord::new("<p>Description: red, living room</p>"))]
        .into_iter()
        .collect();
    let csv = to_csv(&records, 1, &mut StdRng::seed_from_u64(0));
    // the comma is written raw and shifts columns; kept for output compatibility
    assert_eq!(csv.lines().nth(1), Some("scp-002,,,red, living room"));
}

#[test]
fn rfc4180_quotes_only_when_needed() {
    let row: Vec<String> = vec!["scp-002".into(), "Euclid".into(), "say \"hi\"".into(), "a, b".into()];
    assert_eq!(render_row(&row, Escaping::None), "scp-002,Euclid,say \"hi\",a, b");
    assert_eq!(render_row(&row, Escaping::Rfc4180), "scp-002,Euclid,\"say \"\"hi\"\"\",\"a, b\"");
}

#[test]
fn build_document_keeps_id_order_and_tolerates_unknown_ids() {
    let records = set_of(3);
    let doc = build_document(&records, &["scp-002", "scp-000", "nope"]);
    let names: Vec<&str> = doc.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(names, vec!["scp-002", "scp-000", "nope"]);
    assert_eq!(doc.rows[2], vec!["nope", "", "", ""]);
    assert_eq!(doc.render(Escaping::None).lines().count(), 4);
}

#[test]
fn row_callback_follows_rows() {
    let records = set_of(2);
    let mut seen = Vec::new();
    let doc = build_document_with(&records, &["scp-001", "missing", "scp-000"], |id| {
        seen.push(id.to_string())
    });
    assert_eq!(seen, vec!["scp-001", "missing", "scp-000"]);
    assert_eq!(doc, build_document(&records, &["scp-001", "missing", "scp-000"]));
}

#[test]
fn default_document_has_fixed_header() {
    assert_eq!(CsvDocument::new().render(Escaping::Rfc4180), HEADER);
}

proptest! {
    #[test]
    fn row_count_is_min_of_count_and_size_plus_header(n in 0usize..40, count in 0usize..60, seed in any::<u64>()) {
        let csv = to_csv(&set_of(n), count, &mut StdRng::seed_from_u64(seed));
        let lines: Vec<&str> = csv.split('\n').collect();
        prop_assert_eq!(lines.len(), count.min(n) + 1);
        prop_assert_eq!(lines[0], HEADER);
        for line in &lines[1..] {
            prop_assert!(line.ends_with(",Safe,Box,Thing"));
        }
    }
}
