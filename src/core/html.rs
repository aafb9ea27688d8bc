// src/core/html.rs
// Paragraph-level view of an HTML document.
//
// The extractor only ever asks for "the text of each <p>, in document order",
// so that is the whole capability: `HtmlDocument::query_paragraphs`.
// `MarkupDocument` answers it from a full HTML5 parse (scraper/html5ever), so
// implied end tags, character references and comments behave as in a browser
// DOM. Parsing never fails, whatever the markup looks like.

use scraper::{ElementRef, Html};

/// Text of one paragraph, as `textContent` would report it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextNode {
    pub text: String,
}

/// Something that can list its paragraph text nodes in document order.
pub trait HtmlDocument {
    fn query_paragraphs(&self) -> Vec<TextNode>;
}

/// Parsed HTML document.
pub struct MarkupDocument {
    html: Html,
}

impl MarkupDocument {
    pub fn parse(src: &str) -> Self {
        Self { html: Html::parse_document(src) }
    }
}

impl HtmlDocument for MarkupDocument {
    fn query_paragraphs(&self) -> Vec<TextNode> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "p")
            .map(|el| TextNode { text: el.text().collect() })
            .collect()
    }
}
