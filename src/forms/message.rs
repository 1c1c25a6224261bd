use crate::connectors::ChatTurn;
use crate::models::{Message, Sender};
use serde::{Deserialize, Serialize};

/// Fixed system instruction prepended to every collaborator prompt.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// One prior turn of conversational context, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub sender: Sender,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub thread_id: String,
    pub content: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl SendMessageRequest {
    /// Prompt for the collaborator: the system instruction, the supplied
    /// history translated into the collaborator's role vocabulary, then the
    /// new content as the final user turn.
    pub fn build_prompt(&self) -> Vec<ChatTurn> {
        let mut turns = Vec::with_capacity(self.history.len() + 2);
        turns.push(ChatTurn::system(SYSTEM_PROMPT));
        for entry in &self.history {
            turns.push(ChatTurn::new(entry.sender.role(), &entry.content));
        }
        turns.push(ChatTurn::user(&self.content));
        turns
    }
}

/// The slice of a persisted message echoed back to the sender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSummary {
    pub id: String,
    pub content: String,
    pub sender: Sender,
}

impl From<&Message> for MessageSummary {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.clone(),
            content: message.content.clone(),
            sender: message.sender,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub user_message: MessageSummary,
    pub ai_message: MessageSummary,
}
