use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visual theme applied to a preview. Themes differ only in styling tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Modern,
    Minimal,
    Creative,
}

/// Styling tokens a template contributes to the rendered tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleTokens {
    /// Heading and rule color.
    pub accent_color: &'static str,
    /// Color of the selector swatch.
    pub swatch_color: &'static str,
    pub font_family: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub name: &'static str,
    pub tokens: StyleTokens,
}

const SERIF: &str = "Georgia, Cambria, 'Times New Roman', serif";
const SANS: &str = "Inter, 'Helvetica Neue', Arial, sans-serif";

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [TemplateId::Modern, TemplateId::Minimal, TemplateId::Creative];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Minimal => "minimal",
            TemplateId::Creative => "creative",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateId::Modern => "Modern Professional",
            TemplateId::Minimal => "Clean Minimal",
            TemplateId::Creative => "Accent Creative",
        }
    }

    pub fn tokens(&self) -> StyleTokens {
        match self {
            TemplateId::Modern => StyleTokens {
                accent_color: "#4338ca",
                swatch_color: "#4f46e5",
                font_family: SERIF,
            },
            TemplateId::Minimal => StyleTokens {
                accent_color: "#0f172a",
                swatch_color: "#1e293b",
                font_family: SANS,
            },
            TemplateId::Creative => StyleTokens {
                accent_color: "#047857",
                swatch_color: "#059669",
                font_family: SERIF,
            },
        }
    }

    /// Inline CSS custom properties carrying the tokens.
    pub fn style_attr(&self) -> String {
        let tokens = self.tokens();
        format!(
            "--accent: {}; font-family: {}",
            tokens.accent_color, tokens.font_family
        )
    }
}

impl FromStr for TemplateId {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| format!("Unknown template '{raw}'"))
    }
}

/// The template selector's options, in display order.
pub fn catalog() -> Vec<TemplateInfo> {
    TemplateId::ALL
        .iter()
        .map(|id| TemplateInfo {
            id: *id,
            name: id.display_name(),
            tokens: id.tokens(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let ids: Vec<_> = catalog().into_iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["modern", "minimal", "creative"]);
    }

    #[test]
    fn test_parse_template_name() {
        assert_eq!("Creative".parse::<TemplateId>(), Ok(TemplateId::Creative));
        assert!("fancy".parse::<TemplateId>().is_err());
    }

    #[test]
    fn test_minimal_is_the_only_sans_theme() {
        assert_eq!(TemplateId::Minimal.tokens().font_family, SANS);
        assert_eq!(TemplateId::Modern.tokens().font_family, SERIF);
        assert_eq!(TemplateId::Creative.tokens().font_family, SERIF);
    }

    #[test]
    fn test_unknown_template_is_rejected() {
        assert!(serde_json::from_str::<TemplateId>(r#""brutalist""#).is_err());
        assert_eq!(
            serde_json::from_str::<TemplateId>(r#""creative""#).unwrap(),
            TemplateId::Creative
        );
    }
}
