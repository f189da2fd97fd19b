//! Tone-driven cover letter template.
//!
//! Tone picks one opener and one body paragraph; the rest of the letter is shared.
//! Formal is the fallback for anything unrecognised (see `Tone::parse_lenient`).

use serde::Deserialize;

use crate::assist::AssistError;
use crate::models::cover_letter::{CoverLetterDocument, Tone};

const DEFAULT_RECIPIENT: &str = "Hiring Manager";
const DEFAULT_SKILL: &str = "relevant industry skills";
/// Characters of the job description quoted by the formal body.
const DESCRIPTION_EXCERPT_CHARS: usize = 50;

pub const MISSING_CONTEXT_MESSAGE: &str =
    "Please fill in the Job Title, Company, and Description first.";

/// Free-text inputs of the cover letter generator.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoverLetterContext {
    pub recipient_name: String,
    pub company_name: String,
    pub job_title: String,
    pub job_description: String,
    pub user_skills: String,
    pub tone: Tone,
}

impl From<&CoverLetterDocument> for CoverLetterContext {
    fn from(doc: &CoverLetterDocument) -> Self {
        CoverLetterContext {
            recipient_name: doc.recipient_name.clone(),
            company_name: doc.company_name.clone(),
            job_title: doc.job_title.clone(),
            job_description: doc.job_description.clone(),
            user_skills: doc.user_skills.clone(),
            tone: doc.tone,
        }
    }
}

impl CoverLetterContext {
    /// Company, job title and description are required before generating.
    pub fn validate(&self) -> Result<(), AssistError> {
        let missing = [
            &self.company_name,
            &self.job_title,
            &self.job_description,
        ]
        .iter()
        .any(|v| v.trim().is_empty());
        if missing {
            return Err(AssistError::MissingContext(MISSING_CONTEXT_MESSAGE.to_string()));
        }
        Ok(())
    }

    fn skills(&self) -> Vec<&str> {
        let skills: Vec<&str> = self
            .user_skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if skills.is_empty() {
            vec![DEFAULT_SKILL]
        } else {
            skills
        }
    }
}

fn opener(tone: Tone, company: &str, title: &str) -> String {
    match tone {
        Tone::Formal => format!(
            "I am writing to formally express my enthusiastic interest in the {title} position at {company}."
        ),
        Tone::Confident => format!(
            "With a proven track record of delivering high-impact results, I am excited to show how I can drive success as your next {title} at {company}."
        ),
        Tone::Creative => format!(
            "I\u{2019}ve always admired {company}\u{2019}s approach to innovation, and I couldn't resist the opportunity to apply for the {title} role."
        ),
    }
}

fn body(tone: Tone, description: &str, skills: &[&str]) -> String {
    match tone {
        Tone::Formal => {
            let excerpt: String = description.chars().take(DESCRIPTION_EXCERPT_CHARS).collect();
            format!(
                "My background in the industry has equipped me with a deep understanding of the requirements mentioned in your job description, specifically regarding {excerpt}..."
            )
        }
        Tone::Confident => format!(
            "I don't just meet the requirements for this role\u{2014}I exceed them. My expertise in {} makes me a plug-and-play asset for your current team.",
            skills.join(", ")
        ),
        Tone::Creative => format!(
            "I thrive at the intersection of logic and imagination. My experience with {} allows me to solve problems in ways others might overlook.",
            skills.first().copied().unwrap_or(DEFAULT_SKILL)
        ),
    }
}

/// Builds the full letter. Deterministic: the same context always yields the same text.
pub fn generate_cover_letter(ctx: &CoverLetterContext) -> String {
    let recipient = match ctx.recipient_name.trim() {
        "" => DEFAULT_RECIPIENT,
        name => name,
    };
    let skills = ctx.skills();

    format!(
        "Dear {recipient},\n\n{}\n\n{}\n\nThroughout my career, I have focused on sharpening my skills in {}. Your job description emphasizes a need for excellence, and my professional history demonstrates a consistent ability to meet that standard. I am particularly drawn to {} because of your reputation for excellence and growth.\n\nI would welcome the chance to discuss how my unique blend of experience and passion can contribute to the continued success of your team. Thank you for your time and consideration.\n\nBest regards,\n\n[Your Name]",
        opener(ctx.tone, &ctx.company_name, &ctx.job_title),
        body(ctx.tone, &ctx.job_description, &skills),
        skills.join(" and "),
        ctx.company_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme(tone: Tone) -> CoverLetterContext {
        CoverLetterContext {
            company_name: "Acme".to_string(),
            job_title: "Engineer".to_string(),
            job_description: "Build things".to_string(),
            tone,
            ..Default::default()
        }
    }

    #[test]
    fn test_confident_opener_substitutes_company_and_title() {
        let letter = generate_cover_letter(&acme(Tone::Confident));
        assert!(letter.contains(
            "With a proven track record of delivering high-impact results, I am excited to show how I can drive success as your next Engineer at Acme."
        ));
        assert!(letter.starts_with("Dear Hiring Manager,\n\n"));
        assert!(letter.ends_with("Best regards,\n\n[Your Name]"));
    }

    #[test]
    fn test_default_skill_when_none_given() {
        let letter = generate_cover_letter(&acme(Tone::Confident));
        assert!(letter.contains("My expertise in relevant industry skills makes me"));
        assert!(letter.contains("sharpening my skills in relevant industry skills."));
    }

    #[test]
    fn test_formal_body_quotes_first_fifty_chars() {
        let mut ctx = acme(Tone::Formal);
        ctx.job_description = "x".repeat(80);
        let letter = generate_cover_letter(&ctx);
        let expected = format!("specifically regarding {}...", "x".repeat(50));
        assert!(letter.contains(&expected));
        assert!(!letter.contains(&"x".repeat(51)));
    }

    #[test]
    fn test_formal_body_short_description_kept_whole() {
        let letter = generate_cover_letter(&acme(Tone::Formal));
        assert!(letter.contains("specifically regarding Build things..."));
        assert!(letter.contains("the Engineer position at Acme."));
    }

    #[test]
    fn test_creative_uses_first_skill_and_joins_with_and() {
        let mut ctx = acme(Tone::Creative);
        ctx.user_skills = "Rust, Go ,SQL".to_string();
        ctx.recipient_name = "Dr. Lee".to_string();
        let letter = generate_cover_letter(&ctx);
        assert!(letter.starts_with("Dear Dr. Lee,"));
        assert!(letter.contains("I\u{2019}ve always admired Acme\u{2019}s approach"));
        assert!(letter.contains("My experience with Rust allows me"));
        assert!(letter.contains("sharpening my skills in Rust and Go and SQL."));
    }

    #[test]
    fn test_empty_skill_items_are_dropped() {
        let mut ctx = acme(Tone::Formal);
        ctx.user_skills = "Rust, , Go,".to_string();
        assert!(generate_cover_letter(&ctx).contains("sharpening my skills in Rust and Go."));
        ctx.user_skills = " , ".to_string();
        assert!(generate_cover_letter(&ctx).contains("sharpening my skills in relevant industry skills."));
    }

    #[test]
    fn test_generation_is_deterministic() {
        for tone in [Tone::Formal, Tone::Confident, Tone::Creative] {
            assert_eq!(
                generate_cover_letter(&acme(tone)),
                generate_cover_letter(&acme(tone))
            );
        }
    }

    #[test]
    fn test_validate_requires_company_title_description() {
        assert!(acme(Tone::Formal).validate().is_ok());
        let mut ctx = acme(Tone::Formal);
        ctx.job_description = "   ".to_string();
        assert!(matches!(ctx.validate(), Err(AssistError::MissingContext(_))));
    }

    #[test]
    fn test_context_from_document() {
        let doc = CoverLetterDocument {
            company_name: "Acme".to_string(),
            tone: Tone::Creative,
            ..Default::default()
        };
        let ctx = CoverLetterContext::from(&doc);
        assert_eq!(ctx.company_name, "Acme");
        assert_eq!(ctx.tone, Tone::Creative);
    }
}
