use crate::configuration::Settings;
use crate::connectors;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, web, App, HttpResponse, HttpServer};
use sqlx::SqlitePool;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    db_pool: SqlitePool,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let db_pool = web::Data::new(db_pool);

    let ai_connector: web::Data<Arc<dyn connectors::AiConnector>> =
        connectors::init_ai(&settings.ai)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;

    let settings = web::Data::new(settings);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let body = serde_json::json!({
            "error": "Invalid JSON body",
            "details": err.to_string(),
        });
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(routes::health_check)
            .service(
                web::scope("/threads")
                    .service(routes::threads::get::list)
                    .service(routes::threads::add::item),
            )
            .service(
                web::scope("/messages")
                    .service(routes::messages::get::list)
                    .service(routes::messages::add::item),
            )
            .service(routes::schema::inspect)
            .app_data(json_config.clone())
            .app_data(db_pool.clone())
            .app_data(ai_connector.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
