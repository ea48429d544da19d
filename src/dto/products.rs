use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Product;

/// Body accepted by create and update. Any `product_id` sent by the client is
/// ignored; the id always comes from the store or the request path.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ProductPayload {
    #[serde(default)]
    #[schema(read_only)]
    pub product_id: Option<i64>,
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub supplier_id: Option<i64>,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "sale_price must be positive"))]
    pub sale_price: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "purchase_price must be non-negative"))]
    pub purchase_price: f64,
    #[serde(default)]
    pub barcode: Option<String>,
}

impl ProductPayload {
    pub fn into_product(self, product_id: i64) -> Product {
        Product {
            product_id,
            name: self.name,
            description: self.description,
            category_id: self.category_id,
            supplier_id: self.supplier_id,
            sale_price: self.sale_price,
            purchase_price: self.purchase_price,
            barcode: self.barcode,
        }
    }
}
