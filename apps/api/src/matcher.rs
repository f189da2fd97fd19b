//! Job matcher: ATS keyword score plus the recommendation card shown beside it.
//!
//! Only the keyword score is computed; the recommendation, skill statuses and tips are
//! a fixed showcase result.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const JOB_DESCRIPTION_REQUIRED: &str = "Please enter a job description";
pub const UNSUPPORTED_UPLOAD: &str = "Please upload a PDF or DOCX file";

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("{0}")]
    MissingInput(&'static str),

    #[error("{0}")]
    UnsupportedUpload(&'static str),

    #[error("could not read resume PDF: {0}")]
    Pdf(String),
}

/// Share of keywords found in the resume, case-insensitively, as a whole percentage.
/// No keywords scores 0.
pub fn ats_score<S: AsRef<str>>(resume_text: &str, keywords: &[S]) -> u32 {
    if keywords.is_empty() {
        return 0;
    }
    let resume_lower = resume_text.to_lowercase();
    let matched = keywords
        .iter()
        .filter(|kw| resume_lower.contains(&kw.as_ref().to_lowercase()))
        .count();
    let pct = (matched * 100) / keywords.len();
    pct.min(100) as u32
}

/// Splits a job description into candidate keywords on commas, semicolons, bullets and
/// line breaks. Items are trimmed, de-duplicated case-insensitively and kept in order;
/// lines longer than `MAX_KEYWORD_WORDS` words are treated as prose and skipped.
pub fn extract_keywords(job_description: &str) -> Vec<String> {
    const MAX_KEYWORD_WORDS: usize = 4;

    let mut seen = std::collections::HashSet::new();
    job_description
        .split(|c: char| matches!(c, ',' | ';' | '\n' | '\r' | '•' | '|'))
        .map(|item| {
            item.trim()
                .trim_start_matches(['-', '*'])
                .trim()
                .trim_end_matches('.')
        })
        .filter(|item| !item.is_empty())
        .filter(|item| item.split_whitespace().count() <= MAX_KEYWORD_WORDS)
        .filter(|item| seen.insert(item.to_lowercase()))
        .map(str::to_string)
        .collect()
}

pub fn is_supported_upload(filename: &str, content_type: Option<&str>) -> bool {
    let lower = filename.to_lowercase();
    content_type == Some("application/pdf") || lower.ends_with(".pdf") || lower.ends_with(".docx")
}

/// Plain text of an uploaded resume. DOCX uploads are accepted but carry no extractable
/// text here, so they contribute an empty string.
pub fn resume_text_from_upload(filename: &str, bytes: &[u8]) -> Result<String, MatchError> {
    if filename.to_lowercase().ends_with(".docx") {
        return Ok(String::new());
    }
    let text =
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| MatchError::Pdf(e.to_string()))?;
    debug!("Extracted {} chars from {filename}", text.len());
    Ok(text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillStatus {
    Matched,
    Improve,
    Missing,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillMatch {
    pub skill: &'static str,
    pub status: SkillStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub company: &'static str,
    pub location: &'static str,
    pub package: &'static str,
    pub role: &'static str,
    pub reason: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub preferred_location: &'static str,
    pub expected_package: &'static str,
    pub role_level: &'static str,
    pub preferred_tech: &'static str,
}

pub const PREFERENCES: Preferences = Preferences {
    preferred_location: "Bengaluru / Remote",
    expected_package: "25 - 35 LPA",
    role_level: "Senior Engineer",
    preferred_tech: "React, Node.js, AWS",
};

pub const SHOWCASE_MATCH_SCORE: u32 = 88;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchRequest {
    pub job_description: String,
    pub resume_text: String,
    /// Explicit keyword list; extracted from the job description when empty.
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub match_score: u32,
    pub ats_score: u32,
    pub keywords: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub recommendation: Recommendation,
    pub skills_matched: Vec<SkillMatch>,
    pub suggestions: Vec<&'static str>,
}

fn showcase_recommendation() -> Recommendation {
    Recommendation {
        company: "Zomato / Swiggy (Product Engineering)",
        location: "Gurugram / Bengaluru (Hybrid)",
        package: "₹28 - 32 LPA",
        role: "Senior Frontend Engineer",
        reason: "Matches your expertise in high-scale React apps and salary expectations.",
    }
}

fn showcase_skills() -> Vec<SkillMatch> {
    [
        ("React / Next.js", SkillStatus::Matched),
        ("Tailwind CSS", SkillStatus::Matched),
        ("TypeScript", SkillStatus::Matched),
        ("Node.js", SkillStatus::Matched),
        ("System Design", SkillStatus::Improve),
        ("GraphQL", SkillStatus::Missing),
    ]
    .into_iter()
    .map(|(skill, status)| SkillMatch { skill, status })
    .collect()
}

const SUGGESTIONS: [&str; 3] = [
    "Highlight experience with Indian payment gateways (Razorpay/PayU) if applicable.",
    "Add your contributions to open-source or high-traffic Indian consumer apps.",
    "Quantify achievements: \"Reduced latency for 1M+ monthly active users in India market.\"",
];

pub fn analyze(req: &MatchRequest) -> Result<MatchReport, MatchError> {
    if req.job_description.trim().is_empty() {
        return Err(MatchError::MissingInput(JOB_DESCRIPTION_REQUIRED));
    }

    let keywords: Vec<String> = if req.keywords.is_empty() {
        extract_keywords(&req.job_description)
    } else {
        req.keywords
            .iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect()
    };

    let resume_lower = req.resume_text.to_lowercase();
    let (matched_keywords, missing_keywords): (Vec<String>, Vec<String>) = keywords
        .iter()
        .cloned()
        .partition(|kw| resume_lower.contains(&kw.to_lowercase()));

    let ats = ats_score(&req.resume_text, &keywords);
    debug!(
        "ATS score {ats} ({} of {} keywords)",
        matched_keywords.len(),
        keywords.len()
    );

    Ok(MatchReport {
        match_score: SHOWCASE_MATCH_SCORE,
        ats_score: ats,
        keywords,
        matched_keywords,
        missing_keywords,
        recommendation: showcase_recommendation(),
        skills_matched: showcase_skills(),
        suggestions: SUGGESTIONS.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ats_score_rounds_down_and_ignores_case() {
        let resume = "Built REACT apps with TypeScript";
        assert_eq!(ats_score(resume, &["react", "typescript", "graphql"]), 66);
        assert_eq!(ats_score(resume, &["React"]), 100);
    }

    #[test]
    fn test_ats_score_without_keywords_is_zero() {
        let none: [&str; 0] = [];
        assert_eq!(ats_score("anything", &none), 0);
    }

    #[test]
    fn test_extract_keywords() {
        let jd = "React, TypeScript, react\n- Node.js\nWe are looking for someone who loves shipping quality code.";
        assert_eq!(extract_keywords(jd), vec!["React", "TypeScript", "Node.js"]);
    }

    #[test]
    fn test_analyze_requires_job_description() {
        let err = analyze(&MatchRequest::default()).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a job description");
    }

    #[test]
    fn test_analyze_partitions_keywords() {
        let report = analyze(&MatchRequest {
            job_description: "ignored prose".to_string(),
            resume_text: "Rust and Tokio".to_string(),
            keywords: vec!["rust".to_string(), "GraphQL".to_string()],
        })
        .unwrap();
        assert_eq!(report.ats_score, 50);
        assert_eq!(report.matched_keywords, vec!["rust"]);
        assert_eq!(report.missing_keywords, vec!["GraphQL"]);
        assert_eq!(report.match_score, 88);
        assert_eq!(report.skills_matched.len(), 6);
        assert_eq!(report.suggestions.len(), 3);
    }

    #[test]
    fn test_upload_types() {
        assert!(is_supported_upload("cv.PDF", None));
        assert!(is_supported_upload("cv.docx", None));
        assert!(is_supported_upload("blob", Some("application/pdf")));
        assert!(!is_supported_upload("cv.txt", Some("text/plain")));
    }

    #[test]
    fn test_garbage_pdf_is_an_error() {
        assert!(resume_text_from_upload("cv.pdf", b"not a pdf").is_err());
        assert_eq!(resume_text_from_upload("cv.docx", b"zip").unwrap(), "");
    }
}
