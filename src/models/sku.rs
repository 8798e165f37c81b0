//! SKU models and DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stock-keeping unit of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sku {
    #[serde(rename = "idSKU")]
    pub id_sku: i32,
    #[serde(rename = "idBarang")]
    pub id_barang: i32,
    #[serde(rename = "skuCode")]
    pub sku_code: String,
}

/// Body of `POST /products/{idBarang}/skus`; `idSKU` present means update
#[derive(Debug, Deserialize, Validate)]
pub struct SkuPayload {
    #[serde(rename = "idSKU", default)]
    pub id_sku: Option<i32>,
    #[serde(rename = "skuCode")]
    #[validate(length(min = 1, message = "skuCode is required"))]
    pub sku_code: String,
}
