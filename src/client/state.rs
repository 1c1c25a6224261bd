use crate::forms::HistoryEntry;
use crate::models::{Message, Sender};

/// Number of prior transcript entries forwarded as collaborator context.
pub const HISTORY_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoThreadSelected,
    Idle,
    Sending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub content: String,
    pub sender: Sender,
}

impl From<&Message> for TranscriptEntry {
    fn from(message: &Message) -> Self {
        Self {
            content: message.content.clone(),
            sender: message.sender,
        }
    }
}

/// Payload assembled by [`ChatState::begin_send`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub thread_id: String,
    pub content: String,
    pub history: Vec<HistoryEntry>,
}

/// Client-side view state: selected thread, local transcript, in-flight flag.
///
/// The transcript is append-only; [`ChatState::complete_send`] is its single
/// mutation entry point and always appends the user/AI pair together.
/// Submission while no thread is selected, while a send is in flight, or with
/// blank text is a no-op.
#[derive(Debug, Default)]
pub struct ChatState {
    selected_thread: Option<String>,
    transcript: Vec<TranscriptEntry>,
    sending: bool,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (&self.selected_thread, self.sending) {
            (None, _) => Phase::NoThreadSelected,
            (Some(_), false) => Phase::Idle,
            (Some(_), true) => Phase::Sending,
        }
    }

    pub fn selected_thread(&self) -> Option<&str> {
        self.selected_thread.as_deref()
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Select a thread, replacing the local transcript with the freshly
    /// fetched one. Ignored while a send is in flight.
    pub fn select_thread(&mut self, thread_id: String, transcript: Vec<TranscriptEntry>) {
        if self.sending {
            return;
        }
        self.selected_thread = Some(thread_id);
        self.transcript = transcript;
    }

    /// Start a send. Returns the payload to put on the wire — the selected
    /// thread, the text, and the last [`HISTORY_WINDOW`] transcript entries —
    /// or `None` when the submission is a no-op.
    pub fn begin_send(&mut self, text: &str) -> Option<OutboundMessage> {
        if self.sending || text.trim().is_empty() {
            return None;
        }
        let thread_id = self.selected_thread.clone()?;
        self.sending = true;
        Some(OutboundMessage {
            thread_id,
            content: text.to_string(),
            history: self.history_window(),
        })
    }

    /// The only way the transcript grows: append the user/AI pair returned by
    /// a completed send, in that order.
    pub fn complete_send(&mut self, user: TranscriptEntry, ai: TranscriptEntry) {
        self.transcript.push(user);
        self.transcript.push(ai);
        self.sending = false;
    }

    /// A failed send returns to idle with the transcript exactly as it was.
    pub fn fail_send(&mut self) {
        self.sending = false;
    }

    fn history_window(&self) -> Vec<HistoryEntry> {
        let start = self.transcript.len().saturating_sub(HISTORY_WINDOW);
        self.transcript[start..]
            .iter()
            .map(|entry| HistoryEntry {
                sender: entry.sender,
                content: entry.content.clone(),
            })
            .collect()
    }
}
