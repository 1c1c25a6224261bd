use parley::configuration::get_configuration;
use parley::startup::run;
use parley::telemetry::{get_subscriber, init_subscriber};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::TcpListener;
use std::str::FromStr;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("parley".into(), "info".into());
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    tracing::info!(
        db_file = %settings.database.filename,
        "Opening SQLite store"
    );

    let connect_options = SqliteConnectOptions::from_str(&settings.database.connection_string())
        .expect("Invalid database filename.")
        .create_if_missing(true);

    let db_pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(connect_options)
        .await
        .expect("Failed to open database.");

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to migrate database.");

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener =
        TcpListener::bind(address).expect(&format!("failed to bind to {}", settings.app_port));

    run(listener, db_pool, settings).await?.await
}
