//! Return item models and DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /return-items`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReturnItemRequest {
    #[serde(rename = "idBarang")]
    pub id_barang: i32,
    #[serde(rename = "idSKU")]
    pub id_sku: i32,
    pub jumlah: i32,
    #[validate(length(min = 1, message = "alasan is required"))]
    pub alasan: String,
}

/// A stored return item, as echoed back after insert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnItem {
    pub id: i32,
    #[serde(rename = "idBarang")]
    pub id_barang: i32,
    #[serde(rename = "idSKU")]
    pub id_sku: i32,
    pub jumlah: i32,
    pub alasan: String,
}

/// A return item joined with its product name and SKU code.
/// The joins are outer joins, so either side may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnItemView {
    pub id: i32,
    pub jumlah: i32,
    pub alasan: String,
    pub nama_barang: Option<String>,
    #[serde(rename = "skuCode")]
    pub sku_code: Option<String>,
}
