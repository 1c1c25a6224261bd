use serde::{Deserialize, Serialize};

/// Body optionally posted when creating a thread. The title is informational
/// only: thread titles are generated server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateThreadRequest {
    #[serde(default)]
    pub title: Option<String>,
}
