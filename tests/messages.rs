mod common;

use common::{create_thread, mock_completion, mock_completion_failure, spawn_app};
use serde_json::{json, Value};

async fn list_messages(client: &reqwest::Client, address: &str, thread_id: &str) -> Vec<Value> {
    let response = client
        .get(&format!("{}/messages", address))
        .query(&[("threadId", thread_id)])
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());
    response.json().await.expect("Body was not JSON")
}

#[tokio::test]
async fn get_messages_without_thread_id_returns_400() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/messages", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.expect("Body was not JSON");
    assert_eq!("Thread ID is required", body["error"]);
}

#[tokio::test]
async fn get_messages_for_a_fresh_thread_returns_an_empty_array() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let thread_id = create_thread(&client, &app.address).await;

    let listed = list_messages(&client, &app.address, &thread_id).await;
    assert!(listed.is_empty());
}

#[tokio::test]
async fn get_messages_for_an_unknown_thread_returns_an_empty_array() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let listed = list_messages(&client, &app.address, "does-not-exist").await;
    assert!(listed.is_empty());
}

#[tokio::test]
async fn send_appends_a_user_ai_pair() {
    let app = spawn_app().await;
    mock_completion(&app, "Hi! How can I help?").await;
    let client = reqwest::Client::new();
    let thread_id = create_thread(&client, &app.address).await;

    let response = client
        .post(&format!("{}/messages", &app.address))
        .json(&json!({ "threadId": thread_id, "content": "Hello", "history": [] }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.expect("Body was not JSON");
    assert_eq!("Hello", body["userMessage"]["content"]);
    assert_eq!("user", body["userMessage"]["sender"]);
    assert_eq!("Hi! How can I help?", body["aiMessage"]["content"]);
    assert_eq!("ai", body["aiMessage"]["sender"]);

    let listed = list_messages(&client, &app.address, &thread_id).await;
    assert_eq!(2, listed.len());
    assert_eq!("user", listed[0]["sender"]);
    assert_eq!("Hello", listed[0]["content"]);
    assert_eq!("ai", listed[1]["sender"]);
    assert_eq!("Hi! How can I help?", listed[1]["content"]);
}

#[tokio::test]
async fn send_forwards_system_history_and_user_turns_to_the_collaborator() {
    let app = spawn_app().await;
    mock_completion(&app, "Sure.").await;
    let client = reqwest::Client::new();
    let thread_id = create_thread(&client, &app.address).await;

    let history = json!([
        { "sender": "user", "content": "First question" },
        { "sender": "ai", "content": "First answer" },
    ]);
    let response = client
        .post(&format!("{}/messages", &app.address))
        .json(&json!({ "threadId": thread_id, "content": "What next?", "history": history }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());

    let requests = app
        .ai_server
        .received_requests()
        .await
        .expect("Requests were not recorded");
    assert_eq!(1, requests.len());

    let prompt: Value =
        serde_json::from_slice(&requests[0].body).expect("AI request body was not JSON");
    let turns = prompt["messages"].as_array().expect("messages missing");
    assert_eq!(4, turns.len());
    assert_eq!("system", turns[0]["role"]);
    assert_eq!("You are a helpful assistant.", turns[0]["content"]);
    assert_eq!("user", turns[1]["role"]);
    assert_eq!("First question", turns[1]["content"]);
    assert_eq!("assistant", turns[2]["role"]);
    assert_eq!("First answer", turns[2]["content"]);
    assert_eq!("user", turns[3]["role"]);
    assert_eq!("What next?", turns[3]["content"]);
}

#[tokio::test]
async fn collaborator_failure_persists_nothing() {
    let app = spawn_app().await;
    mock_completion_failure(&app).await;
    let client = reqwest::Client::new();
    let thread_id = create_thread(&client, &app.address).await;

    let response = client
        .post(&format!("{}/messages", &app.address))
        .json(&json!({ "threadId": thread_id, "content": "Hello", "history": [] }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(500, response.status().as_u16());
    let body: Value = response.json().await.expect("Body was not JSON");
    assert_eq!("Failed to process message", body["error"]);
    assert!(body["details"].is_string());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to count messages");
    assert_eq!(0, count);
}

#[tokio::test]
async fn send_then_relist_preserves_transcript_order() {
    let app = spawn_app().await;
    mock_completion(&app, "Nice to meet you.").await;
    let client = reqwest::Client::new();
    let thread_id = create_thread(&client, &app.address).await;

    for content in ["Hello", "Are you there?"] {
        let response = client
            .post(&format!("{}/messages", &app.address))
            .json(&json!({ "threadId": thread_id, "content": content, "history": [] }))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(200, response.status().as_u16());
    }

    let listed = list_messages(&client, &app.address, &thread_id).await;
    let flow: Vec<(&str, &str)> = listed
        .iter()
        .map(|message| {
            (
                message["sender"].as_str().unwrap(),
                message["content"].as_str().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        vec![
            ("user", "Hello"),
            ("ai", "Nice to meet you."),
            ("user", "Are you there?"),
            ("ai", "Nice to meet you."),
        ],
        flow
    );
}
