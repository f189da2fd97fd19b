//! Keyword chatbot.
//!
//! Input is lowercased and checked for each topic keyword in `ChatTopic::PRECEDENCE`
//! order; the first contained keyword wins. "my cover letter and resume" therefore gets
//! the resume reply.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatTopic {
    Resume,
    CoverLetter,
    Portfolio,
    Interview,
}

pub const DEFAULT_REPLY: &str = "I'm here to help with resumes, cover letters, portfolios, and career advice. What would you like to know more about?";

impl ChatTopic {
    pub const PRECEDENCE: [ChatTopic; 4] = [
        ChatTopic::Resume,
        ChatTopic::CoverLetter,
        ChatTopic::Portfolio,
        ChatTopic::Interview,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            ChatTopic::Resume => "resume",
            ChatTopic::CoverLetter => "cover letter",
            ChatTopic::Portfolio => "portfolio",
            ChatTopic::Interview => "interview",
        }
    }

    pub fn reply(&self) -> &'static str {
        match self {
            ChatTopic::Resume => "I can help you improve your resume! Would you like me to enhance your bullet points, optimize keywords, or check ATS compatibility?",
            ChatTopic::CoverLetter => "For your cover letter, I recommend personalizing it for each job application. Would you like help writing a specific section?",
            ChatTopic::Portfolio => "Your portfolio should showcase your best projects. I can help you write compelling project descriptions and suggest improvements.",
            ChatTopic::Interview => "Great question! I can provide interview tips, common questions, and help you practice. What specific area would you like to focus on?",
        }
    }
}

pub fn match_topic(input: &str) -> Option<ChatTopic> {
    let lower = input.to_lowercase();
    ChatTopic::PRECEDENCE
        .into_iter()
        .find(|topic| lower.contains(topic.keyword()))
}

pub fn reply_to(input: &str) -> &'static str {
    match_topic(input).map_or(DEFAULT_REPLY, |topic| topic.reply())
}
