use crate::connectors::AiConnector;
use crate::db;
use crate::errors::ApiError;
use crate::forms;
use crate::models::{Message, Sender};
use actix_web::{post, web, Responder};
use sqlx::SqlitePool;
use std::sync::Arc;

/// POST /messages
/// One conversation turn: run the collaborator over the supplied history plus
/// the new content, then persist the user message and the AI reply as a pair.
/// A collaborator failure persists nothing; a storage failure after the user
/// insert is reported without rolling that insert back.
#[tracing::instrument(name = "Send message.", skip_all)]
#[post("")]
pub async fn item(
    form: web::Json<forms::SendMessageRequest>,
    pool: web::Data<SqlitePool>,
    ai: web::Data<Arc<dyn AiConnector>>,
) -> Result<impl Responder, ApiError> {
    let form = form.into_inner();

    let prompt = form.build_prompt();
    let completion = ai.complete(&prompt).await?;

    let user_message = Message::new(form.thread_id.clone(), form.content, Sender::User);
    db::message::insert(pool.get_ref(), &user_message)
        .await
        .map_err(|err| ApiError::storage("Failed to process message", err))?;

    let ai_message = Message::new(form.thread_id, completion, Sender::Ai);
    db::message::insert(pool.get_ref(), &ai_message)
        .await
        .map_err(|err| ApiError::storage("Failed to process message", err))?;

    Ok(web::Json(forms::SendMessageResponse {
        user_message: (&user_message).into(),
        ai_message: (&ai_message).into(),
    }))
}
