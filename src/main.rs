use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use std::io;

use storefront::{routes, AppState, Config};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(io::Error::other)?;
    let state = AppState::from_config(&config)
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;
    let state = web::Data::new(state);

    log::info!("Starting storefront server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .service(web::scope("/api").configure(routes::config))
            .default_service(web::route().to(routes::not_found))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
