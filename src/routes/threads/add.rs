use crate::db;
use crate::errors::ApiError;
use crate::forms;
use crate::models;
use actix_web::http::header;
use actix_web::{post, web, HttpRequest, Responder};
use serde_json::json;
use sqlx::SqlitePool;

/// POST /threads
/// Creates a thread with a server-generated id and title and returns the id.
/// The creating client's User-Agent is recorded for reference.
#[tracing::instrument(name = "Create thread.", skip_all)]
#[post("")]
pub async fn item(
    req: HttpRequest,
    form: Option<web::Json<forms::CreateThreadRequest>>,
    pool: web::Data<SqlitePool>,
) -> Result<impl Responder, ApiError> {
    if let Some(title) = form.and_then(|body| body.into_inner().title) {
        // Titles are server-generated; a client-supplied one is informational
        tracing::debug!(ignored_title = %title, "Ignoring client-supplied title");
    }

    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let thread = models::Thread::new(user_agent);
    db::thread::insert(pool.get_ref(), &thread)
        .await
        .map_err(|err| ApiError::storage("Failed to create thread", err))?;

    Ok(web::Json(json!({ "id": thread.id })))
}
