use crate::models;
use sqlx::SqlitePool;
use tracing::Instrument;

/// Messages of one thread in transcript order: `created_at` ascending with
/// rowid as the tie-breaker. An unknown thread id yields an empty list.
pub async fn fetch_by_thread(
    pool: &SqlitePool,
    thread_id: &str,
) -> Result<Vec<models::Message>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch messages by thread id.");
    sqlx::query_as::<_, models::Message>(
        r#"
        SELECT id, thread_id, content, sender, created_at
        FROM messages
        WHERE thread_id = ?1
        ORDER BY created_at ASC, rowid ASC
        "#,
    )
    .bind(thread_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch messages, error: {:?}", err);
        err
    })
}

pub async fn insert(pool: &SqlitePool, message: &models::Message) -> Result<(), sqlx::Error> {
    let query_span = tracing::info_span!("Saving new message into the database");
    sqlx::query(
        r#"
        INSERT INTO messages (id, thread_id, content, sender, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(&message.id)
    .bind(&message.thread_id)
    .bind(&message.content)
    .bind(message.sender)
    .bind(message.created_at)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Failed to insert message, error: {:?}", err);
        err
    })
}
