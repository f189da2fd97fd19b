use serde::{Deserialize, Serialize};

/// Writing tone of a generated cover letter.
///
/// Unrecognised values deserialize to `Formal`, the same fallback the generator applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Tone {
    #[default]
    Formal,
    Confident,
    Creative,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Confident => "confident",
            Tone::Creative => "creative",
        }
    }

    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "confident" => Tone::Confident,
            "creative" => Tone::Creative,
            _ => Tone::Formal,
        }
    }
}

impl From<String> for Tone {
    fn from(raw: String) -> Self {
        Tone::parse_lenient(&raw)
    }
}

/// The cover letter form. `content` holds the letter body, generated or hand-written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoverLetterDocument {
    pub recipient_name: String,
    pub company_name: String,
    pub job_title: String,
    pub job_description: String,
    /// Comma-separated.
    pub user_skills: String,
    pub tone: Tone,
    pub content: String,
}
