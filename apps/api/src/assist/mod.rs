//! Writing assistants: pluggable, trait-based content generation.
//!
//! Default: `CannedAssistant` (deterministic templates behind a simulated delay).
//! `AppState` holds an `Arc<dyn ContentAssistant>` so a real backend can replace it
//! without touching handlers. The canned backend never fails, but every operation returns
//! `Result` so callers already handle `AssistError`.

pub mod chatbot;
pub mod cover_letter;
pub mod enhance;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::assist::cover_letter::{generate_cover_letter, CoverLetterContext};
use crate::assist::enhance::{enhance_text, EnhanceSection};

#[derive(Debug, Error)]
pub enum AssistError {
    /// Required inputs are missing; the message is shown to the user verbatim.
    #[error("{0}")]
    MissingContext(String),

    #[error("assistant unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ContentAssistant: Send + Sync {
    async fn cover_letter(&self, ctx: &CoverLetterContext) -> Result<String, AssistError>;

    /// `Ok(None)` when the input is blank.
    async fn enhance(
        &self,
        section: EnhanceSection,
        text: &str,
    ) -> Result<Option<String>, AssistError>;

    async fn chat(&self, message: &str) -> Result<String, AssistError>;

    /// Backend name, reported alongside generated content.
    fn backend(&self) -> &'static str;
}

/// Template-substitution assistant with fixed "thinking" pauses.
#[derive(Debug, Clone)]
pub struct CannedAssistant {
    pub assist_delay: Duration,
    pub cover_letter_delay: Duration,
}

impl CannedAssistant {
    pub fn new(assist_delay: Duration, cover_letter_delay: Duration) -> Self {
        Self {
            assist_delay,
            cover_letter_delay,
        }
    }

    async fn pause(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl ContentAssistant for CannedAssistant {
    async fn cover_letter(&self, ctx: &CoverLetterContext) -> Result<String, AssistError> {
        ctx.validate()?;
        Self::pause(self.cover_letter_delay).await;
        debug!(
            "Generated {} cover letter for {}",
            ctx.tone.as_str(),
            ctx.company_name
        );
        Ok(generate_cover_letter(ctx))
    }

    async fn enhance(
        &self,
        section: EnhanceSection,
        text: &str,
    ) -> Result<Option<String>, AssistError> {
        let Some(enhanced) = enhance_text(section, text) else {
            return Ok(None);
        };
        Self::pause(self.assist_delay).await;
        Ok(Some(enhanced.to_string()))
    }

    async fn chat(&self, message: &str) -> Result<String, AssistError> {
        if message.trim().is_empty() {
            return Err(AssistError::MissingContext(
                "Message cannot be empty".to_string(),
            ));
        }
        Self::pause(self.assist_delay).await;
        Ok(chatbot::reply_to(message).to_string())
    }

    fn backend(&self) -> &'static str {
        "canned"
    }
}
