//! Chat client building blocks: the UI state machine and the HTTP client it
//! drives. The terminal binary composes the two; the state machine itself is
//! transport-free and fully unit-testable.

pub mod http;
pub mod state;

pub use http::{ApiClient, ClientError};
pub use state::{ChatState, OutboundMessage, Phase, TranscriptEntry, HISTORY_WINDOW};
