use crate::db;
use crate::errors::ApiError;
use actix_web::{get, web, Responder};
use sqlx::SqlitePool;

/// GET /schema
/// Debug view of the backing store: every user table with its column names
/// and declared types.
#[tracing::instrument(name = "Describe storage schema.", skip_all)]
#[get("/schema")]
pub async fn inspect(pool: web::Data<SqlitePool>) -> Result<impl Responder, ApiError> {
    db::schema::describe(pool.get_ref())
        .await
        .map(web::Json)
        .map_err(|err| ApiError::storage("Failed to fetch table information", err))
}
