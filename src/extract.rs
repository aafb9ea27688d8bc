// src/extract.rs
//! Field extraction from a record's HTML body.
//!
//! Each field sits in a paragraph that contains a fixed marker phrase,
//! e.g. `<p><strong>Object Class:</strong> Keter</p>`. The value is what
//! follows the marker on the same line of that paragraph's text:
//!
//! 1. take the first paragraph (document order) whose text contains the marker;
//! 2. keep the text after the first occurrence of the marker, up to any
//!    second occurrence of it;
//! 3. cut at the first `\n`;
//! 4. trim surrounding whitespace.
//!
//! A missing marker yields an empty string. Matching is case-sensitive.

use crate::core::html::{HtmlDocument, MarkupDocument, TextNode};

pub const OBJECT_CLASS_MARKER: &str = "Object Class:";
pub const CONTAINMENT_MARKER: &str = "Special Containment Procedures:";
pub const DESCRIPTION_MARKER: &str = "Description:";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub object_class: String,
    pub containment: String,
    pub description: String,
}

/// Extract the three fields from raw HTML.
pub fn extract(html: &str) -> ExtractedFields {
    extract_from(&MarkupDocument::parse(html))
}

/// Extract from any paragraph source.
pub fn extract_from<D: HtmlDocument + ?Sized>(doc: &D) -> ExtractedFields {
    let paragraphs = doc.query_paragraphs();
    ExtractedFields {
        object_class: field_after(&paragraphs, OBJECT_CLASS_MARKER),
        containment: field_after(&paragraphs, CONTAINMENT_MARKER),
        description: field_after(&paragraphs, DESCRIPTION_MARKER),
    }
}

fn field_after(paragraphs: &[TextNode], marker: &str) -> String {
    let Some(node) = paragraphs.iter().find(|p| p.text.contains(marker)) else {
        return s!();
    };
    value_after_marker(&node.text, marker)
}

/// Value of `marker` within one text node (see module docs, steps 2–4).
pub fn value_after_marker(text: &str, marker: &str) -> String {
    let Some(after) = text.split(marker).nth(1) else {
        return s!();
    };
    let line = after.split('\n').next().unwrap_or_default();
    s!(line.trim())
}
