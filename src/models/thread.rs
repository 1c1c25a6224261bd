use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub user_agent: String,
}

impl Thread {
    /// Titles are generated server-side and carry the local creation time;
    /// they are immutable afterwards.
    pub fn new(user_agent: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: format!("New chat {}", Local::now().format("%m/%d %H:%M")),
            created_at: Utc::now(),
            user_agent,
        }
    }
}

/// Thread row as returned by the list endpoint: the stored columns the UI
/// needs plus the derived content of the chronologically last message.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ThreadSummary {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub last_message: Option<String>,
}
