use crate::models;
use sqlx::SqlitePool;
use tracing::Instrument;

/// All threads, newest first, each with the content of its chronologically
/// last message. The latest message is resolved through an explicit join
/// against a per-thread latest-rowid derivation; rowid order breaks
/// `created_at` ties in insertion order. Threads with no messages come back
/// with a NULL `last_message`.
pub async fn fetch_summaries(
    pool: &SqlitePool,
) -> Result<Vec<models::ThreadSummary>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch threads with latest messages.");
    sqlx::query_as::<_, models::ThreadSummary>(
        r#"
        SELECT
            t.id,
            t.created_at,
            m.content AS last_message
        FROM threads t
        LEFT JOIN (
            SELECT thread_id, MAX(rowid) AS last_rowid
            FROM messages
            GROUP BY thread_id
        ) latest ON latest.thread_id = t.id
        LEFT JOIN messages m ON m.rowid = latest.last_rowid
        ORDER BY t.created_at DESC
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch threads, error: {:?}", err);
        err
    })
}

pub async fn insert(pool: &SqlitePool, thread: &models::Thread) -> Result<(), sqlx::Error> {
    let query_span = tracing::info_span!("Saving new thread into the database");
    sqlx::query(
        r#"
        INSERT INTO threads (id, title, created_at, user_agent)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&thread.id)
    .bind(&thread.title)
    .bind(thread.created_at)
    .bind(&thread.user_agent)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Failed to insert thread, error: {:?}", err);
        err
    })
}
