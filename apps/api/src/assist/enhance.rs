use serde::Deserialize;

/// Which part of a resume the enhancer rewrites. Anything but the summary is treated
/// as an experience bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum EnhanceSection {
    Summary,
    Bullet,
}

impl From<String> for EnhanceSection {
    fn from(raw: String) -> Self {
        if raw.trim().eq_ignore_ascii_case("summary") {
            EnhanceSection::Summary
        } else {
            EnhanceSection::Bullet
        }
    }
}

pub const ENHANCED_SUMMARY: &str = "Dynamic and results-oriented professional with a demonstrated history of excellence in the tech industry. Adept at leveraging cutting-edge technologies to solve complex problems and drive business growth through technical innovation.";

pub const ENHANCED_BULLET: &str = "Streamlined operational workflows by implementing automated solutions, resulting in a 40% reduction in manual effort and significant cost savings for the organization.";

/// Suggested rewrite, or `None` when there is nothing to enhance.
pub fn enhance_text(section: EnhanceSection, text: &str) -> Option<&'static str> {
    if text.trim().is_empty() {
        return None;
    }
    Some(match section {
        EnhanceSection::Summary => ENHANCED_SUMMARY,
        EnhanceSection::Bullet => ENHANCED_BULLET,
    })
}
