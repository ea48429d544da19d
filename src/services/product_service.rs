//! Persistence for the Products table.
//!
//! Update and delete report affected row counts; deciding what zero rows
//! means is left to the handler.

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, RuntimeErr, SqlErr,
};

use crate::{
    dto::products::ProductPayload,
    entity::products::{ActiveModel, Column, Entity as Products},
    error::{AppError, AppResult},
    models::Product,
    state::AppState,
};

pub async fn list_products(state: &AppState) -> AppResult<Vec<Product>> {
    let items = Products::find()
        .order_by_asc(Column::ProductId)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(items)
}

pub async fn find_product(state: &AppState, id: i64) -> AppResult<Option<Product>> {
    let product = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Product::from);
    Ok(product)
}

/// Insert a product and return it with the id the database assigned.
pub async fn create_product(state: &AppState, payload: ProductPayload) -> AppResult<Product> {
    let barcode = payload.barcode.clone();
    let model = active_model(payload)
        .insert(&state.orm)
        .await
        .inspect_err(|err| {
            if is_unique_violation(err) {
                tracing::warn!(?barcode, "barcode already in use");
            }
        })?;
    Ok(Product::from(model))
}

/// Replace every mutable column of `id`. Returns the number of rows changed.
pub async fn update_product(state: &AppState, id: i64, payload: ProductPayload) -> AppResult<u64> {
    let result = Products::update_many()
        .set(active_model(payload))
        .filter(Column::ProductId.eq(id))
        .exec(&state.orm)
        .await?;
    Ok(result.rows_affected)
}

/// Hard delete by id. Returns the number of rows removed.
///
/// A product still referenced by batches or sale items is kept by the
/// restrict foreign keys; that surfaces as `AppError::Conflict`.
pub async fn delete_product(state: &AppState, id: i64) -> AppResult<u64> {
    let result = Products::delete_by_id(id)
        .exec(&state.orm)
        .await
        .map_err(|err| {
            if is_foreign_key_violation(&err) {
                tracing::info!(product_id = id, error = %err, "delete blocked by reference");
                AppError::Conflict("Product is still referenced".into())
            } else {
                AppError::from(err)
            }
        })?;
    Ok(result.rows_affected)
}

fn active_model(payload: ProductPayload) -> ActiveModel {
    ActiveModel {
        product_id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
        category_id: Set(payload.category_id),
        supplier_id: Set(payload.supplier_id),
        sale_price: Set(payload.sale_price),
        purchase_price: Set(payload.purchase_price),
        barcode: Set(payload.barcode),
    }
}

/// SQLite reports `ON DELETE RESTRICT` as a trigger constraint (1811) rather
/// than the plain foreign key code (787), and sea-orm only classifies the latter.
fn is_foreign_key_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
        return true;
    }
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(db_err)))
        | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(db_err))) => {
            matches!(db_err.code().as_deref(), Some("787" | "1811"))
                || db_err.message().contains("FOREIGN KEY constraint failed")
        }
        _ => false,
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
