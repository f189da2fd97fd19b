pub mod cover_letter;
pub mod portfolio;
pub mod resume;
pub mod user;

use serde::{Deserialize, Serialize};

use crate::models::cover_letter::CoverLetterDocument;
use crate::models::portfolio::PortfolioDocument;
use crate::models::resume::ResumeDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    CoverLetter,
    Portfolio,
}

impl DocumentKind {
    /// Path segment of the editor page for this kind (`/resume/:id`, ...).
    pub fn route_segment(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::CoverLetter => "cover-letter",
            DocumentKind::Portfolio => "portfolio",
        }
    }

    #[cfg(test)]
    pub fn from_route_segment(segment: &str) -> Option<Self> {
        match segment {
            "resume" => Some(DocumentKind::Resume),
            "cover-letter" => Some(DocumentKind::CoverLetter),
            "portfolio" => Some(DocumentKind::Portfolio),
            _ => None,
        }
    }
}

/// Any document edited through a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Document {
    Resume(ResumeDocument),
    CoverLetter(CoverLetterDocument),
    Portfolio(PortfolioDocument),
}

impl Document {
    pub fn blank(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Resume => Document::Resume(ResumeDocument::default()),
            DocumentKind::CoverLetter => Document::CoverLetter(CoverLetterDocument::default()),
            DocumentKind::Portfolio => Document::Portfolio(PortfolioDocument::default()),
        }
    }

    /// Demo content; cover letters have none and start blank.
    pub fn demo(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Resume => Document::Resume(ResumeDocument::demo()),
            DocumentKind::CoverLetter => Document::CoverLetter(CoverLetterDocument::default()),
            DocumentKind::Portfolio => Document::Portfolio(PortfolioDocument::demo()),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Resume(_) => DocumentKind::Resume,
            Document::CoverLetter(_) => DocumentKind::CoverLetter,
            Document::Portfolio(_) => DocumentKind::Portfolio,
        }
    }

    /// Human-readable title used in listings.
    pub fn display_title(&self) -> String {
        let title = match self {
            Document::Resume(r) => r.personal_info.name.trim().to_string(),
            Document::CoverLetter(c) => c.company_name.trim().to_string(),
            Document::Portfolio(p) => p.title.trim().to_string(),
        };
        if title.is_empty() {
            "Untitled".to_string()
        } else {
            title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_segments_round_trip() {
        for kind in [
            DocumentKind::Resume,
            DocumentKind::CoverLetter,
            DocumentKind::Portfolio,
        ] {
            assert_eq!(DocumentKind::from_route_segment(kind.route_segment()), Some(kind));
        }
        assert_eq!(DocumentKind::from_route_segment("settings"), None);
    }

    #[test]
    fn test_document_tagging() {
        let json = serde_json::to_value(Document::blank(DocumentKind::CoverLetter)).unwrap();
        assert_eq!(json["kind"], "cover_letter");
        assert_eq!(json["data"]["tone"], "formal");
    }

    #[test]
    fn test_display_title_falls_back_to_untitled() {
        assert_eq!(Document::blank(DocumentKind::Resume).display_title(), "Untitled");
        assert_eq!(Document::demo(DocumentKind::Portfolio).display_title(), "Anu");
    }
}
