use actix_files::Files;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use backend::config::Config;
use backend::services;
use backend::store::{PresentationStore, UploadStore};
use env_logger::Env;
use log::info;
use serde_json::json;

async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Server is working!" }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();

    let presentations = web::Data::new(PresentationStore::new(&config.presentations_dir)?);
    let uploads = web::Data::new(UploadStore::new(&config.uploads_dir)?);

    let url = format!("http://{}:{}", config.host, config.port);
    info!("Server running at {}", url);

    let uploads_dir = config.uploads_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(200 * 1024 * 1024)) // 200 MB
            .app_data(presentations.clone())
            .app_data(uploads.clone())
            .route("/test", web::get().to(health))
            .service(services::templates::configure_routes())
            .service(services::uploads::configure_routes())
            .service(services::presentations::configure_routes())
            .service(Files::new("/uploads", uploads_dir.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
