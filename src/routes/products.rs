use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::{Product, ProductChanges, ProductInput, ProductPatch, ProductQuery},
    response::ApiResponse,
    state::AppState,
};
use actix_web::{delete, get, patch, post, put, web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

fn not_found() -> AppError {
    AppError::NotFound("Product not found.".into())
}

/// Lists the catalogue, newest first.
///
/// ## Query Parameters:
/// - `search` (optional): case-insensitive match against name and detail.
#[get("")]
pub async fn index(
    state: web::Data<AppState>,
    query: web::Query<ProductQuery>,
) -> Result<impl Responder, AppError> {
    let products = state.products.list(query.term()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        products,
        "Products retrieved successfully.",
    )))
}

/// Creates a product owned by the authenticated user.
///
/// ## Responses:
/// - `201 Created`: envelope with the new `Product`.
/// - `422 Unprocessable Entity`: `name` or `detail` failed validation.
#[post("")]
pub async fn store(
    state: web::Data<AppState>,
    user: AuthenticatedUserId,
    product_data: web::Json<ProductInput>,
) -> Result<impl Responder, AppError> {
    product_data.validate()?;

    let product = Product::new(product_data.into_inner(), user.0);
    let created = state.products.insert(&product).await?;
    log::info!("user {} created product {}", user.0, created.id);

    Ok(HttpResponse::Created().json(ApiResponse::ok(
        created,
        "Product created successfully.",
    )))
}

#[get("/{id}")]
pub async fn show(
    state: web::Data<AppState>,
    product_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let product = state
        .products
        .find(product_id.into_inner())
        .await?
        .ok_or_else(not_found)?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        product,
        "Product retrieved successfully.",
    )))
}

/// Replaces both `name` and `detail`.
#[put("/{id}")]
pub async fn update(
    state: web::Data<AppState>,
    product_id: web::Path<Uuid>,
    product_data: web::Json<ProductInput>,
) -> Result<impl Responder, AppError> {
    product_data.validate()?;
    apply_changes(
        &state,
        product_id.into_inner(),
        product_data.into_inner().into(),
    )
    .await
}

/// Changes only the fields present in the body.
#[patch("/{id}")]
pub async fn patch(
    state: web::Data<AppState>,
    product_id: web::Path<Uuid>,
    product_data: web::Json<ProductPatch>,
) -> Result<impl Responder, AppError> {
    product_data.validate()?;
    apply_changes(
        &state,
        product_id.into_inner(),
        product_data.into_inner().into(),
    )
    .await
}

async fn apply_changes(
    state: &AppState,
    id: Uuid,
    changes: ProductChanges,
) -> Result<HttpResponse, AppError> {
    let product = state
        .products
        .update(id, changes)
        .await?
        .ok_or_else(not_found)?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        product,
        "Product updated successfully.",
    )))
}

#[delete("/{id}")]
pub async fn destroy(
    state: web::Data<AppState>,
    user: AuthenticatedUserId,
    product_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let id = product_id.into_inner();
    if !state.products.delete(id).await? {
        return Err(not_found());
    }
    log::info!("user {} deleted product {}", user.0, id);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        json!([]),
        "Product deleted successfully.",
    )))
}
