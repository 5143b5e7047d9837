pub mod product;
pub mod user;

use lazy_static::lazy_static;
use regex::Regex;

pub use product::{Product, ProductChanges, ProductInput, ProductPatch, ProductQuery};
pub use user::{NewUser, User};

lazy_static! {
    /// Matches any string holding at least one non-whitespace character.
    pub static ref NOT_BLANK: Regex = Regex::new(r"\S").unwrap();
}
