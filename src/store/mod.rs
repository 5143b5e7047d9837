//! Persistence seams for users and products.
//!
//! Handlers only ever talk to the [`UserStore`] and [`ProductStore`] traits.
//! [`PgStore`] backs them with Postgres; [`MemoryStore`] keeps everything in
//! process and is used when no `DATABASE_URL` is configured, and in tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::models::{NewUser, Product, ProductChanges, User};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug)]
pub enum StoreError {
    /// A user with the same (normalised) email already exists.
    DuplicateEmail,
    Database(sqlx::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreError::DuplicateEmail => write!(f, "email already registered"),
            StoreError::Database(e) => write!(f, "database error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &error {
            if db.is_unique_violation() {
                return StoreError::DuplicateEmail;
            }
        }
        StoreError::Database(error)
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a user, failing with [`StoreError::DuplicateEmail`] if the email is taken.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products, newest first (ties broken by descending id), optionally
    /// filtered by a case-insensitive substring of name or detail.
    async fn list(&self, search: Option<&str>) -> Result<Vec<Product>, StoreError>;

    async fn insert(&self, product: &Product) -> Result<Product, StoreError>;

    async fn find(&self, id: Uuid) -> Result<Option<Product>, StoreError>;

    /// Returns `None` when no product has this id.
    async fn update(&self, id: Uuid, changes: ProductChanges)
        -> Result<Option<Product>, StoreError>;

    /// Returns `false` when no product has this id.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
