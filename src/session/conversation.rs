//! A single conversation: an append-only list of turns.

use serde::{Deserialize, Serialize};

use crate::guide::{Guide, Reply};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    /// RFC 3339 timestamp of when the turn was appended.
    pub at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    Empty,
    Active,
}

/// Ordered turns of one session. Turns are only ever appended or cleared as a whole.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the user's question and the guide's answer, returning the reply.
    pub fn submit(&mut self, guide: &Guide, query: &str) -> Reply {
        let reply = guide.respond(query);
        self.push(Role::User, query);
        self.push(Role::Assistant, &reply.text);

        tracing::info!(
            query = %preview(query, 100),
            response_len = reply.text.len(),
            category = %reply.category,
            "interaction"
        );
        reply
    }

    /// Drop every turn.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn state(&self) -> ConversationState {
        if self.turns.is_empty() {
            ConversationState::Empty
        } else {
            ConversationState::Active
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Render the conversation as Markdown, one labelled paragraph per turn.
    pub fn to_markdown(&self, user_label: &str, assistant_label: &str) -> String {
        self.turns
            .iter()
            .map(|turn| {
                let label = match turn.role {
                    Role::User => user_label,
                    Role::Assistant => assistant_label,
                };
                format!("**{label}:** {}", turn.text)
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn push(&mut self, role: Role, text: &str) {
        self.turns.push(Turn {
            role,
            text: text.to_string(),
            at: chrono::Utc::now().to_rfc3339(),
        });
    }
}

/// First `max` characters of `text`, with `...` when truncated.
fn preview(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_appends_user_then_assistant() {
        let guide = Guide::default();
        let mut convo = Conversation::new();
        assert_eq!(convo.state(), ConversationState::Empty);

        let reply = convo.submit(&guide, "food spots");
        assert_eq!(convo.state(), ConversationState::Active);
        assert_eq!(convo.len(), 2);
        assert_eq!(convo.turns()[0].role, Role::User);
        assert_eq!(convo.turns()[0].text, "food spots");
        assert_eq!(convo.turns()[1].role, Role::Assistant);
        assert_eq!(convo.turns()[1].text, reply.text);
    }

    #[test]
    fn clear_returns_to_empty() {
        let guide = Guide::default();
        let mut convo = Conversation::new();
        convo.submit(&guide, "hopia");
        convo.submit(&guide, "tikoy");
        assert_eq!(convo.len(), 4);

        convo.clear();
        assert_eq!(convo.state(), ConversationState::Empty);
        assert!(convo.turns().is_empty());
    }

    #[test]
    fn markdown_labels_each_turn() {
        let guide = Guide::default();
        let mut convo = Conversation::new();
        convo.submit(&guide, "hi");
        let md = convo.to_markdown("You", "Heritage Guide");
        assert!(md.starts_with("**You:** hi\n\n**Heritage Guide:** "));
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        assert_eq!(preview("short", 100), "short");
        assert_eq!(preview("ééééé", 2), "éé...");
    }
}
