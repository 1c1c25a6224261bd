pub mod health_checks;
pub mod messages;
pub mod schema;
pub mod threads;

pub use health_checks::*;
