use crate::db;
use crate::errors::ApiError;
use actix_web::{get, web, Responder};
use sqlx::SqlitePool;

/// GET /threads
/// All threads, newest first, annotated with their latest message.
#[tracing::instrument(name = "List threads.", skip_all)]
#[get("")]
pub async fn list(pool: web::Data<SqlitePool>) -> Result<impl Responder, ApiError> {
    db::thread::fetch_summaries(pool.get_ref())
        .await
        .map(web::Json)
        .map_err(|err| ApiError::storage("Failed to fetch threads", err))
}
