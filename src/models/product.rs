use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::NOT_BLANK;

/// Body of `POST /api/products` and `PUT /api/products/{id}`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ProductInput {
    /// Must be between 1 and 255 characters and not blank.
    #[validate(
        length(min = 1, max = 255),
        regex(path = "NOT_BLANK", message = "Name must not be blank")
    )]
    pub name: String,

    /// Must be between 1 and 10000 characters and not blank.
    #[validate(
        length(min = 1, max = 10000),
        regex(path = "NOT_BLANK", message = "Detail must not be blank")
    )]
    pub detail: String,
}

/// Body of `PATCH /api/products/{id}`. Absent fields are left untouched.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct ProductPatch {
    #[validate(
        length(min = 1, max = 255),
        regex(path = "NOT_BLANK", message = "Name must not be blank")
    )]
    pub name: Option<String>,

    #[validate(
        length(min = 1, max = 10000),
        regex(path = "NOT_BLANK", message = "Detail must not be blank")
    )]
    pub detail: Option<String>,
}

/// A catalogue entry as stored in the database and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: Uuid,
    pub name: String,
    pub detail: String,
    /// The user who created the product. `None` once that account is gone.
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Query parameters accepted by `GET /api/products`.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    /// Case-insensitive substring matched against name and detail.
    pub search: Option<String>,
}

/// A normalised set of column changes applied by both PUT and PATCH.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub detail: Option<String>,
}

impl Product {
    /// Creates a new `Product` owned by `user_id`, stamped with the current time.
    pub fn new(input: ProductInput, user_id: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            detail: input.detail,
            created_by: Some(user_id),
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies `changes` in place and bumps `updated_at`.
    pub fn apply(&mut self, changes: ProductChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(detail) = changes.detail {
            self.detail = detail;
        }
        self.updated_at = Utc::now();
    }
}

impl ProductQuery {
    /// The trimmed search term, if one was given.
    pub fn term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

impl From<ProductInput> for ProductChanges {
    fn from(input: ProductInput) -> Self {
        Self {
            name: Some(input.name),
            detail: Some(input.detail),
        }
    }
}

impl From<ProductPatch> for ProductChanges {
    fn from(patch: ProductPatch) -> Self {
        Self {
            name: patch.name,
            detail: patch.detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, detail: &str) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            detail: detail.to_string(),
        }
    }

    #[test]
    fn test_product_creation() {
        let product = Product::new(input("Desk Lamp", "Warm white LED"), 3);
        assert_eq!(product.name, "Desk Lamp");
        assert_eq!(product.created_by, Some(3));
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_orphaned_product_serialises_null_creator() {
        let mut product = Product::new(input("Desk Lamp", "Warm white LED"), 3);
        assert_eq!(serde_json::to_value(&product).unwrap()["created_by"], 3);

        product.created_by = None;
        let value = serde_json::to_value(&product).unwrap();
        assert!(value["created_by"].is_null());
        let back: Product = serde_json::from_value(value).unwrap();
        assert_eq!(back.created_by, None);
    }

    #[test]
    fn test_product_input_validation() {
        assert!(input("Desk Lamp", "Warm white LED").validate().is_ok());
        assert!(input("", "Warm white LED").validate().is_err());
        assert!(input("   ", "Warm white LED").validate().is_err());
        assert!(input("Desk Lamp", "").validate().is_err());
        assert!(input(&"a".repeat(256), "Warm white LED").validate().is_err());
        assert!(input("Desk Lamp", &"a".repeat(10001)).validate().is_err());
    }

    #[test]
    fn test_patch_validation_only_checks_present_fields() {
        assert!(ProductPatch::default().validate().is_ok());

        let rename = ProductPatch {
            name: Some("Floor Lamp".into()),
            detail: None,
        };
        assert!(rename.validate().is_ok());

        let blank = ProductPatch {
            name: None,
            detail: Some("\t\n".into()),
        };
        let errors = blank.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("detail"));
    }

    #[test]
    fn test_apply_changes() {
        let mut product = Product::new(input("Desk Lamp", "Warm white LED"), 1);
        let before = product.updated_at;

        product.apply(ProductChanges::from(ProductPatch {
            name: None,
            detail: Some("Cold white LED".into()),
        }));

        assert_eq!(product.name, "Desk Lamp");
        assert_eq!(product.detail, "Cold white LED");
        assert!(product.updated_at >= before);
    }

    #[test]
    fn test_query_term_is_trimmed() {
        let query = ProductQuery {
            search: Some("  lamp ".into()),
        };
        assert_eq!(query.term(), Some("lamp"));
        assert_eq!(ProductQuery { search: Some("   ".into()) }.term(), None);
        assert_eq!(ProductQuery::default().term(), None);
    }
}
