use chrono::{DateTime, Local};
use log::{debug, warn};
use thiserror::Error;

use crate::api::AssistantError;

pub const GREETING: &str = "Hello! I'm the AgAsset AI Assistant. How can I help you today with rural energy financing, PUE assets, or our impact methodology?";

/// Shown in place of a reply whenever the service cannot produce one.
pub const FALLBACK_REPLY: &str = "There was an error connecting to my knowledge base. Please try again shortly.";

pub const SUGGESTIONS: [&str; 3] = [
    "How does PUE financing work?",
    "Tell me about IoT security",
    "What's the typical ROI?",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Positive,
    Negative,
}

impl Feedback {
    pub fn as_str(self) -> &'static str {
        match self {
            Feedback::Positive => "positive",
            Feedback::Negative => "negative",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub feedback: Option<Feedback>,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            feedback: None,
            sent_at: Local::now(),
        }
    }

    pub fn time_label(&self) -> String {
        self.sent_at.format("%H:%M").to_string()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SendRejected {
    #[error("message is empty")]
    Empty,
    #[error("a reply is still pending")]
    InFlight,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("no message at index {0}")]
    NoSuchMessage(usize),
    #[error("message {0} was not written by the assistant")]
    NotAssistant(usize),
}

/// Transcript plus the single-flight gate for one widget session.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(Role::Assistant, GREETING)],
            pending: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn show_suggestions(&self) -> bool {
        !self.pending && self.messages.len() < 3
    }

    /// Records the user's message and opens the in-flight slot. The trimmed
    /// text to forward is returned; nothing changes when rejected.
    pub fn submit(&mut self, input: &str) -> Result<String, SendRejected> {
        if self.pending {
            return Err(SendRejected::InFlight);
        }
        let text = input.trim();
        if text.is_empty() {
            return Err(SendRejected::Empty);
        }
        self.messages.push(ChatMessage::new(Role::User, text));
        self.pending = true;
        Ok(text.to_string())
    }

    /// Appends the outcome of the pending request. Failures become the fixed
    /// fallback reply. Returns false if nothing was pending.
    pub fn complete(&mut self, outcome: Result<String, AssistantError>) -> bool {
        if !self.pending {
            warn!("Dropping assistant reply with no request in flight");
            return false;
        }
        self.pending = false;
        let text = match outcome {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => FALLBACK_REPLY.to_string(),
            Err(e) => {
                warn!("Assistant request failed: {}", e);
                FALLBACK_REPLY.to_string()
            }
        };
        self.messages.push(ChatMessage::new(Role::Assistant, text));
        true
    }

    /// Sets the rating of an assistant message, replacing any earlier one.
    pub fn rate(&mut self, index: usize, feedback: Feedback) -> Result<(), FeedbackError> {
        let message = self
            .messages
            .get_mut(index)
            .ok_or(FeedbackError::NoSuchMessage(index))?;
        if message.role != Role::Assistant {
            return Err(FeedbackError::NotAssistant(index));
        }
        message.feedback = Some(feedback);
        debug!("Feedback recorded for message {}: {}", index, feedback.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert_eq!(session.messages()[0].text, GREETING);
        assert!(session.show_suggestions());
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut session = ChatSession::new();
        assert_eq!(session.submit("   \n"), Err(SendRejected::Empty));
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_pending());
    }

    #[test]
    fn second_send_while_pending_is_blocked() {
        let mut session = ChatSession::new();
        assert_eq!(session.submit(" A ").unwrap(), "A");
        assert_eq!(session.submit("B"), Err(SendRejected::InFlight));
        assert!(session.is_pending());

        let user_turns: Vec<&str> = session
            .messages()
            .iter()
            .filter(|m| m.role == Role::User)
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(user_turns, vec!["A"]);
        assert!(!session.show_suggestions());
    }

    #[test]
    fn successful_reply_is_appended_in_order() {
        let mut session = ChatSession::new();
        session.submit("How does PUE financing work?").unwrap();
        assert!(session.complete(Ok("Assets are leased to SMEs.".to_string())));
        let last = session.messages().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.text, "Assets are leased to SMEs.");
        assert!(!session.is_pending());
        assert!(session.submit("next").is_ok());
    }

    #[test]
    fn failure_becomes_fallback_reply() {
        for error in [
            AssistantError::Network("offline".to_string()),
            AssistantError::Status(503),
            AssistantError::EmptyReply,
            AssistantError::MissingApiKey,
        ] {
            let mut session = ChatSession::new();
            session.submit("hi").unwrap();
            session.complete(Err(error));
            assert_eq!(session.messages().last().unwrap().text, FALLBACK_REPLY);
        }

        let mut session = ChatSession::new();
        session.submit("hi").unwrap();
        session.complete(Ok("  ".to_string()));
        assert_eq!(session.messages().last().unwrap().text, FALLBACK_REPLY);
    }

    #[test]
    fn stray_completion_is_dropped() {
        let mut session = ChatSession::new();
        assert!(!session.complete(Ok("late".to_string())));
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn rerating_overwrites() {
        let mut session = ChatSession::new();
        session.rate(0, Feedback::Positive).unwrap();
        session.rate(0, Feedback::Negative).unwrap();
        assert_eq!(session.messages()[0].feedback, Some(Feedback::Negative));
    }

    #[test]
    fn only_assistant_messages_take_feedback() {
        let mut session = ChatSession::new();
        session.submit("question").unwrap();
        assert_eq!(session.rate(1, Feedback::Positive), Err(FeedbackError::NotAssistant(1)));
        assert_eq!(session.rate(7, Feedback::Positive), Err(FeedbackError::NoSuchMessage(7)));
        assert_eq!(session.messages()[1].feedback, None);
    }

    #[test]
    fn time_label_is_hours_and_minutes() {
        let label = ChatSession::new().messages()[0].time_label();
        assert_eq!(label.len(), 5);
        assert_eq!(&label[2..3], ":");
    }
}
