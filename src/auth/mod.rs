pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::NOT_BLANK;

pub use extractors::AuthenticatedUserId;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenKeys};

/// Represents the payload for a user login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// User's email address. Must be a valid email format.
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Represents the payload for a new user registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name. Between 1 and 255 characters, not blank.
    #[validate(
        length(min = 1, max = 255),
        regex(path = "NOT_BLANK", message = "Name must not be blank")
    )]
    pub name: String,
    #[validate(email)]
    pub email: String,
    /// Must be at least 8 characters long.
    #[validate(length(min = 8))]
    pub password: String,
    /// Must repeat `password` exactly.
    #[validate(must_match = "password")]
    pub password_confirmation: String,
}

/// Returned by both registration and login.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The JWT to send as `Authorization: Bearer <token>`.
    pub token: String,
    pub name: String,
    pub user_id: i32,
}
