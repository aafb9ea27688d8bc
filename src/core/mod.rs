// src/core/mod.rs

pub mod html;
pub mod net;

pub use html::{HtmlDocument, MarkupDocument, TextNode};
