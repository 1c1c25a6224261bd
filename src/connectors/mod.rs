//! External service connectors.
//!
//! The AI collaborator is the only external service parley talks to. It sits
//! behind a trait so routes depend on the completion contract, never on the
//! HTTP implementation:
//!
//! 1. Trait + HTTP client live in `ai_service.rs`
//! 2. `init` builds the client from [`crate::configuration::AiSettings`]
//! 3. Routes receive `web::Data<Arc<dyn AiConnector>>` — no ambient lookup

pub mod ai_service;
pub mod errors;

pub use ai_service::{AiConnector, ChatTurn, WorkersAiClient};
pub use errors::ConnectorError;

pub use ai_service::init as init_ai;
