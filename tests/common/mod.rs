#![allow(dead_code)]

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web};
use serde_json::json;
use storefront::auth::{AuthResponse, TokenKeys};
use storefront::response::ApiResponse;
use storefront::store::MemoryStore;
use storefront::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Fresh in-memory state with the cheapest bcrypt cost.
pub fn test_state() -> web::Data<AppState> {
    web::Data::new(AppState::new(
        MemoryStore::new(),
        TokenKeys::new(TEST_SECRET, 1),
        4,
    ))
}

/// Builds the same service stack as `main.rs` around `$state`.
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($state.clone())
                .wrap(
                    actix_cors::Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header()
                        .max_age(3600),
                )
                .wrap(actix_web::middleware::Logger::default())
                .service(storefront::routes::health::health)
                .service(actix_web::web::scope("/api").configure(storefront::routes::config))
                .default_service(actix_web::web::route().to(storefront::routes::not_found)),
        )
        .await
    };
}

pub async fn register_user(
    app: &impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>,
    name: &str,
    email: &str,
    password: &str,
) -> AuthResponse {
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({
            "name": name,
            "email": email,
            "password": password,
            "password_confirmation": password
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    assert!(
        status.is_success(),
        "Failed to register user. Status: {}. Body: {}",
        status,
        String::from_utf8_lossy(&body)
    );

    let envelope: ApiResponse<AuthResponse> =
        serde_json::from_slice(&body).expect("Failed to parse registration response");
    envelope.data.expect("registration response carries data")
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
