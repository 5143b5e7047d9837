#![doc = "The `storefront` library crate."]
#![doc = ""]
#![doc = "A JSON product catalogue: user registration and login issue bearer tokens,"]
#![doc = "and the `/api/products` resource group accepts only requests carrying one."]
#![doc = "The binary (`main.rs`) wires these modules into an actix-web server."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::AppError;
pub use state::AppState;
