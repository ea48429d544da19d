use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::products::Model as ProductModel;

/// A sellable item as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub supplier_id: Option<i64>,
    pub sale_price: f64,
    pub purchase_price: f64,
    pub barcode: Option<String>,
}

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            product_id: model.product_id,
            name: model.name,
            description: model.description,
            category_id: model.category_id,
            supplier_id: model.supplier_id,
            sale_price: model.sale_price,
            purchase_price: model.purchase_price,
            barcode: model.barcode,
        }
    }
}
