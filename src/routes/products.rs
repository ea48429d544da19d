use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    dto::products::ProductPayload,
    error::{AppError, AppResult},
    middleware::validated::Validated,
    models::Product,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::get(list_products))
        .route("/", axum::routing::post(create_product))
        .route("/{id}", axum::routing::get(get_product))
        .route("/{id}", axum::routing::put(update_product))
        .route("/{id}", axum::routing::delete(delete_product))
}

/// Path ids arrive as raw strings so a non-numeric id is a 400, not a routing miss.
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest("Invalid product ID".into()))
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, description = "Store failure"),
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let items = product_service::list_products(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 400, description = "Invalid product ID"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let id = parse_id(&id)?;
    match product_service::find_product(&state, id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(AppError::NotFound),
    }
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Create product", body = Product),
        (status = 400, description = "Malformed or invalid product"),
        (status = 500, description = "Store failure, including duplicate barcode"),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Validated(payload): Validated<ProductPayload>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = product_service::create_product(&state, payload).await?;
    tracing::debug!(product_id = product.product_id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Invalid product ID or body"),
        (status = 500, description = "Store failure"),
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Validated(payload): Validated<ProductPayload>,
) -> AppResult<Json<Product>> {
    let id = parse_id(&id)?;
    let rows = product_service::update_product(&state, id, payload.clone()).await?;
    if rows == 0 {
        // Accepted as a no-op; the body is echoed like a successful update.
        tracing::warn!(product_id = id, "update matched no product");
    }
    Ok(Json(payload.into_product(id)))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Deleted product"),
        (status = 400, description = "Invalid product ID"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Product still referenced by batches or sales"),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    let rows = product_service::delete_product(&state, id).await?;
    if rows == 0 {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(parse_id("17").unwrap(), 17);
        assert_eq!(parse_id("+3").unwrap(), 3);
    }

    #[test]
    fn rejects_non_numeric_ids() {
        for raw in ["abc", "1.5", "", " 2", "99999999999999999999"] {
            assert!(parse_id(raw).is_err(), "{raw:?} should not parse");
        }
    }
}
