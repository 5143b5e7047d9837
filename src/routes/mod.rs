pub mod health;
pub mod products;
pub mod users;

use actix_web::{web, HttpRequest, HttpResponse};

use crate::auth::AuthMiddleware;
use crate::error::AppError;
use crate::response::ApiResponse;

/// Registers the `/api` surface. Mount it with
/// `web::scope("/api").configure(routes::config)`.
///
/// | Method          | Path              | Handler             |
/// |-----------------|-------------------|---------------------|
/// | POST            | `/register`       | `users::register`   |
/// | POST            | `/login`          | `users::login`      |
/// | GET             | `/products`       | `products::index`   |
/// | POST            | `/products`       | `products::store`   |
/// | GET             | `/products/{id}`  | `products::show`    |
/// | PUT             | `/products/{id}`  | `products::update`  |
/// | PATCH           | `/products/{id}`  | `products::patch`   |
/// | DELETE          | `/products/{id}`  | `products::destroy` |
///
/// Everything under `/products` sits behind `AuthMiddleware`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(users::register)
        .service(users::login)
        .service(
            web::scope("/products")
                .app_data(path_config())
                .app_data(query_config())
                .wrap(AuthMiddleware)
                .service(products::index)
                .service(products::store)
                .service(products::show)
                .service(products::update)
                .service(products::patch)
                .service(products::destroy),
        );
}

/// Unreadable JSON bodies become a 400 envelope instead of actix's plain-text error.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid request body: {}", err)).into()
    })
}

/// Unparseable query strings get the envelope too.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid query: {}", err)).into()
    })
}

/// An `{id}` that is not a UUID cannot name a product.
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_err, _req| AppError::NotFound("Product not found.".into()).into())
}

/// Fallback for unmatched routes, registered with `App::default_service`.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    log::debug!("no route for {} {}", req.method(), req.path());
    HttpResponse::NotFound().json(ApiResponse::error("Not Found.", None))
}
