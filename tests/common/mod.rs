use parley::configuration::get_configuration;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestApp {
    pub address: String,
    pub db_pool: SqlitePool,
    pub ai_server: MockServer,
}

pub async fn spawn_app() -> TestApp {
    let mut configuration = get_configuration().expect("Failed to get configuration");

    // Stand-in for the AI inference endpoint
    let ai_server = MockServer::start().await;
    configuration.ai.base_url = ai_server.uri();

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let db_pool = configure_database().await;

    let server = parley::startup::run(listener, db_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool,
        ai_server,
    }
}

pub async fn configure_database() -> SqlitePool {
    // One connection: an in-memory database lives and dies with it
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    pool
}

#[allow(dead_code)]
pub async fn create_thread(client: &reqwest::Client, address: &str) -> String {
    let response = client
        .post(&format!("{}/threads", address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Body was not JSON");
    body["id"]
        .as_str()
        .expect("Thread id missing from response")
        .to_string()
}

#[allow(dead_code)]
pub async fn mock_completion(app: &TestApp, reply: &str) {
    Mock::given(method("POST"))
        .and(path_regex(r"^/run/.+"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "response": reply })),
        )
        .mount(&app.ai_server)
        .await;
}

#[allow(dead_code)]
pub async fn mock_completion_failure(app: &TestApp) {
    Mock::given(method("POST"))
        .and(path_regex(r"^/run/.+"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({ "error": "inference failed" })),
        )
        .mount(&app.ai_server)
        .await;
}
