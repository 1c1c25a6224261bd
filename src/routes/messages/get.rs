use crate::db;
use crate::errors::ApiError;
use actix_web::{get, web, Responder};
use serde::Deserialize;
use sqlx::SqlitePool;

#[derive(Debug, Deserialize)]
pub struct Query {
    #[serde(rename = "threadId")]
    pub thread_id: Option<String>,
}

/// GET /messages?threadId={id}
/// The thread's transcript, oldest first. A thread with no messages (or an
/// unknown id — no existence check is performed) yields an empty array.
#[tracing::instrument(name = "List messages.", skip_all)]
#[get("")]
pub async fn list(
    query: web::Query<Query>,
    pool: web::Data<SqlitePool>,
) -> Result<impl Responder, ApiError> {
    let thread_id = query
        .thread_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::MissingParameter("Thread ID"))?;

    db::message::fetch_by_thread(pool.get_ref(), thread_id)
        .await
        .map(web::Json)
        .map_err(|err| ApiError::storage("Failed to fetch messages", err))
}
