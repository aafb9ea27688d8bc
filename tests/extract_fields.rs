// tests/extract_fields.rs
//
// Marker-based field extraction over realistic and broken markup.
//
use scp_csv::core::html::{HtmlDocument, TextNode};
use scp_csv::extract::{extract, extract_from, value_after_marker, ExtractedFields};

#[test]
fn no_markers_gives_empty_fields() {
    assert_eq!(extract("<p>no markers here</p>"), ExtractedFields::default());
}

#[test]
fn value_stops_at_first_newline() {
    let f = extract("<p>Object Class: Keter\nmore text</p>");
    assert_eq!(f.object_class, "Keter");
    assert_eq!(f.containment, "");
    assert_eq!(f.description, "");
}

#[test]
fn wiki_style_markup_with_strong_labels() {
    let html = r#"
        <div id="page-content">
          <p><strong>Item #:</strong> SCP-173</p>
          <p><strong>Object Class:</strong> Euclid</p>
          <p><strong>Special Containment Procedures:</strong> Item SCP-173 is to be kept in a locked container at all times.</p>
          <p><strong>Description:</strong> Moved to Site-19 1993. Origin is as of yet unknown.</p>
        </div>"#;
    let f = extract(html);
    assert_eq!(f.object_class, "Euclid");
    assert_eq!(f.containment, "Item SCP-173 is to be kept in a locked container at all times.");
    assert_eq!(f.description, "Moved to Site-19 1993. Origin is as of yet unknown.");
}

#[test]
fn first_paragraph_with_marker_wins() {
    let html = "<p>Description: first</p><p>Description: second</p>";
    assert_eq!(extract(html).description, "first");
}

#[test]
fn missing_trailing_newline_takes_rest_of_node() {
    assert_eq!(extract("<p>Description:   A box.  </p>").description, "A box.");
}

#[test]
fn value_cut_at_repeated_marker() {
    // text after the first marker only runs up to the next occurrence
    assert_eq!(value_after_marker("Description: a Description: b", "Description:"), "a");
}

#[test]
fn marker_outside_paragraph_is_ignored() {
    let html = "<div>Object Class: Safe</div><p>Description: inside</p>";
    let f = extract(html);
    assert_eq!(f.object_class, "");
    assert_eq!(f.description, "inside");
}

#[test]
fn entities_are_decoded_and_nbsp_trimmed() {
    let f = extract("<p>Object Class:&nbsp;Safe &amp; Sound</p>");
    assert_eq!(f.object_class, "Safe & Sound");
}

#[test]
fn crlf_line_break_is_trimmed() {
    assert_eq!(extract("<p>Object Class: Thaumiel\r\nnext</p>").object_class, "Thaumiel");
}

#[test]
fn malformed_markup_degrades_gracefully() {
    for html in [
        "",
        "<p",
        "<p>Object Class: Safe",           // never closed
        "<<<>>> </p></p> <p <p>",
        "<p class=\"unterminated>Description: x</p>",
        "<!-- <p>Object Class: Hidden</p>",
    ] {
        let _ = extract(html);
    }
    assert_eq!(extract("<p>Object Class: Safe").object_class, "Safe");
    assert_eq!(extract("<!-- <p>Object Class: Hidden</p>").object_class, "");
}

#[test]
fn extraction_is_pure() {
    let html = "<p>Object Class: Keter</p><p>Description: Big.</p>";
    assert_eq!(extract(html), extract(html));
}

struct FixedDoc(Vec<&'static str>);

impl HtmlDocument for FixedDoc {
    fn query_paragraphs(&self) -> Vec<TextNode> {
        self.0.iter().map(|t| TextNode { text: t.to_string() }).collect()
    }
}

#[test]
fn any_paragraph_source_can_be_injected() {
    let doc = FixedDoc(vec![
        "Special Containment Procedures: Keep cool.\nAlso dry.",
        "Object Class: Safe",
    ]);
    let f = extract_from(&doc);
    assert_eq!(f.object_class, "Safe");
    assert_eq!(f.containment, "Keep cool.");
    assert_eq!(f.description, "");
}

#[test]
fn typographic_entities_are_decoded() {
    let f = extract("<p>Description: It&rsquo;s a statue &mdash; don&#8217;t blink&hellip;</p>");
    assert_eq!(f.description, "It\u{2019}s a statue \u{2014} don\u{2019}t blink\u{2026}");

    let f = extract("<p>Object Class: &ldquo;Keter&rdquo;</p>");
    assert_eq!(f.object_class, "\u{201c}Keter\u{201d}");
}

#[test]
fn block_inside_paragraph_closes_it() {
    let f = extract("<p>Object Class: Safe<div>Description: hidden</div></p>");
    assert_eq!(f.object_class, "Safe");
    assert_eq!(f.description, "");

    let f = extract("<p>Special Containment Procedures: Lock it.<ul><li>Description: list item</li></ul>");
    assert_eq!(f.containment, "Lock it.");
    assert_eq!(f.description, "");
}

#[test]
fn gt_inside_quoted_attribute_does_not_leak() {
    let f = extract(r#"<p title="a>b">Object Class: Euclid</p>"#);
    assert_eq!(f.object_class, "Euclid");
}
