use crate::models::cover_letter::CoverLetterDocument;
use crate::render::template::TemplateId;
use crate::render::tree::Node;

pub const EMPTY_LETTER_PLACEHOLDER: &str = "Waiting for details...";

/// Renders the letter body one paragraph per blank-line-separated block.
/// An empty body renders the placeholder instead.
pub fn render_cover_letter(doc: &CoverLetterDocument, template: TemplateId) -> Node {
    let root = Node::el("article")
        .class("cover-letter")
        .attr("data-template", template.as_str())
        .attr("style", template.style_attr());

    if doc.content.trim().is_empty() {
        return root.child(Node::with_text("p", EMPTY_LETTER_PLACEHOLDER).class("placeholder"));
    }

    let paragraphs = doc
        .content
        .split("\n\n")
        .map(|block| Node::with_text("p", block.trim_matches('\n')));
    root.child(Node::el("div").class("letter-body").children(paragraphs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_shows_placeholder() {
        let tree = render_cover_letter(&CoverLetterDocument::default(), TemplateId::Modern);
        assert_eq!(tree.text_content(), EMPTY_LETTER_PLACEHOLDER);
        assert!(tree.find_by_class("letter-body").is_none());
    }

    #[test]
    fn test_paragraphs_follow_blank_lines() {
        let doc = CoverLetterDocument {
            content: "Dear Team,\n\nFirst.\n\nBest regards,".to_string(),
            ..Default::default()
        };
        let tree = render_cover_letter(&doc, TemplateId::Minimal);
        let body = tree.find_by_class("letter-body").unwrap();
        let Node::Element { children, .. } = body else {
            panic!("element expected")
        };
        assert_eq!(children.len(), 3);
        assert_eq!(children[2].text_content(), "Best regards,");
    }
}
