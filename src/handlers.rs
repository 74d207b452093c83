use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::types::{Fields, Product};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{info, warn};

/// Turn the JSON extractor outcome into an optional field map.
///
/// A request without a JSON content type carries no data; any other
/// rejection (bad syntax, non-object body) is invalid input.
fn object_body(payload: Result<Json<Fields>, JsonRejection>) -> AppResult<Option<Fields>> {
    match payload {
        Ok(Json(fields)) => Ok(Some(fields)),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(None),
        Err(rejection) => Err(AppError::InvalidInput(rejection.body_text())),
    }
}

#[utoipa::path(
    post,
    path = "/product",
    request_body(content = Object, description = "Product fields", content_type = "application/json"),
    responses(
        (status = 200, description = "Product stored", body = String, content_type = "text/plain"),
        (status = 400, description = "Store failure or malformed body", body = String, content_type = "text/plain")
    ),
    tag = "Product"
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<Fields>, JsonRejection>,
) -> AppResult<(StatusCode, &'static str)> {
    let product = object_body(payload)?.unwrap_or_default();
    state.products.create(product).await?;
    Ok((StatusCode::OK, "product created successfully"))
}

#[utoipa::path(
    get,
    path = "/product",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 400, description = "No products stored, or store failure", body = String, content_type = "text/plain")
    ),
    tag = "Product"
)]
pub async fn get_products(State(state): State<AppState>) -> AppResult<Response> {
    let products = state.products.get_all().await?;

    if products.is_empty() {
        warn!("Product listing requested but collection is empty");
        return Ok((StatusCode::BAD_REQUEST, "No Products found").into_response());
    }

    info!("Listing {} products", products.len());
    Ok((StatusCode::OK, Json(products)).into_response())
}

#[utoipa::path(
    get,
    path = "/product/{id}",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Stored product fields", body = Object),
        (status = 404, description = "No such product", body = String, content_type = "text/plain"),
        (status = 400, description = "Store failure", body = String, content_type = "text/plain")
    ),
    tag = "Product"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    match state.products.get_one(&id).await? {
        Some(fields) => Ok((StatusCode::OK, Json(fields)).into_response()),
        None => {
            info!("Product not found: id={}", id);
            Ok((StatusCode::NOT_FOUND, "product not found").into_response())
        }
    }
}

#[utoipa::path(
    put,
    path = "/product/{id}",
    params(("id" = String, Path, description = "Product id")),
    request_body(content = Object, description = "Fields to merge", content_type = "application/json"),
    responses(
        (status = 200, description = "Product updated", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing data, unknown product or store failure", body = String, content_type = "text/plain")
    ),
    tag = "Product"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Fields>, JsonRejection>,
) -> AppResult<(StatusCode, &'static str)> {
    let data = object_body(payload)?;
    state.products.update_one(&id, data).await?;
    Ok((StatusCode::OK, "product updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/product/{id}",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = String, content_type = "text/plain"),
        (status = 400, description = "Store failure", body = String, content_type = "text/plain")
    ),
    tag = "Product"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, &'static str)> {
    state.products.delete_one(&id).await?;
    Ok((StatusCode::OK, "product deleted successfully"))
}
