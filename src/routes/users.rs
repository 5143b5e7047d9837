use crate::{
    auth::{hash_password, verify_password, AuthResponse, LoginRequest, RegisterRequest},
    error::AppError,
    models::NewUser,
    response::ApiResponse,
    state::AppState,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Creates an account and returns an access token for it.
///
/// ## Responses:
/// - `201 Created`: envelope with `AuthResponse`.
/// - `400 Bad Request`: unreadable body or missing fields.
/// - `409 Conflict`: the email is already registered.
/// - `422 Unprocessable Entity`: validation failed.
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;
    let RegisterRequest {
        name,
        email,
        password,
        ..
    } = register_data.into_inner();
    let email = email.to_lowercase();

    if state.users.find_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict("The email has already been taken.".into()));
    }

    let password_hash = hash_password(&password, state.bcrypt_cost)?;
    let user = state
        .users
        .create(NewUser {
            name,
            email,
            password_hash,
        })
        .await?;

    let token = state.tokens.issue(user.id)?;
    log::info!("registered user {}", user.id);

    Ok(HttpResponse::Created().json(ApiResponse::ok(
        AuthResponse {
            token,
            name: user.name,
            user_id: user.id,
        },
        "User register successfully.",
    )))
}

/// Login user
///
/// Exchanges an email and password for an access token. Unknown emails and
/// wrong passwords get the same 401 response.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let user = state
        .users
        .find_by_email(&login_data.email.to_lowercase())
        .await?;

    let hash = user
        .as_ref()
        .map_or(state.decoy_hash.as_str(), |u| u.password_hash.as_str());
    let password_ok = verify_password(&login_data.password, hash)?;

    match user {
        Some(user) if password_ok => {
            let token = state.tokens.issue(user.id)?;
            log::info!("user {} logged in", user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::ok(
                AuthResponse {
                    token,
                    name: user.name,
                    user_id: user.id,
                },
                "User login successfully.",
            )))
        }
        _ => {
            log::warn!("failed login attempt");
            Err(AppError::Unauthorized("Unauthorised.".into()))
        }
    }
}
