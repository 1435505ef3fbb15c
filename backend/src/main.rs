mod config;
mod cors;
mod db;
mod error;
mod services;

use crate::config::Settings;
use crate::db::Database;
use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let settings = Settings::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let database = Database::open(&settings.database_url)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let database = web::Data::new(database);
    info!("Using SQLite database at {}", settings.database_url);

    let static_dir = settings.static_dir.clone().filter(|dir| dir.is_dir());
    match (&settings.static_dir, &static_dir) {
        (Some(dir), None) => warn!("Static directory {} not found, serving API only", dir.display()),
        (_, Some(dir)) => info!("Serving frontend from {}", dir.display()),
        _ => {}
    }

    let cors_origins = settings.cors_origins.clone();
    info!("Allowing cross-origin requests from {:?}", cors_origins);

    let url = format!("http://{}:{}", settings.host, settings.port);
    info!("Server running at {}", url);

    HttpServer::new(move || {
        let app = App::new()
            .wrap(cors::cors(&cors_origins))
            .wrap(Logger::default())
            .app_data(services::json_config())
            .app_data(services::query_config())
            .app_data(services::path_config())
            .app_data(database.clone())
            .service(services::books::configure_routes());

        match &static_dir {
            Some(dir) => app.service(Files::new("/", dir).index_file("index.html")),
            None => app.route("/", web::get().to(services::root::process)),
        }
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}
