//! Live preview renderer: pure `(document, template) -> Node` functions.
//!
//! No clock, randomness or I/O: the same input always produces the same tree,
//! and therefore the same HTML.

pub mod cover_letter;
pub mod portfolio;
pub mod resume;
pub mod template;
pub mod tree;

use crate::models::Document;
use crate::render::template::TemplateId;
use crate::render::tree::Node;

pub fn render_document(doc: &Document, template: TemplateId) -> Node {
    match doc {
        Document::Resume(resume) => resume::render_resume(resume, template),
        Document::CoverLetter(letter) => cover_letter::render_cover_letter(letter, template),
        Document::Portfolio(portfolio) => portfolio::render_portfolio(portfolio, template),
    }
}

/// `Some(trimmed)` unless the value is blank.
pub(crate) fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Splits a comma-separated field into trimmed, non-empty items.
pub(crate) fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',').filter_map(non_blank).collect()
}

pub(crate) fn section(
    id: &'static str,
    title: &str,
    children: impl IntoIterator<Item = Node>,
) -> Node {
    Node::el("section")
        .class(&format!("section section-{id}"))
        .attr("data-section", id)
        .child(Node::with_text("h2", title))
        .children(children)
}
