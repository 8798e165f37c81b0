//! Product and SKU route handlers

use crate::error::{db_error, validation_error, ApiResult};
use crate::models::{
    DataResponse, MessageResponse, NewProduct, Product, ProductChanges, ProductPayload,
    ProductRecord, ProductUpsert, Sku, SkuPayload,
};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, info, warn};
use validator::Validate;

/// List every product
pub async fn list_products(
    State(state): State<SharedState>,
) -> ApiResult<Json<DataResponse<Vec<Product>>>> {
    debug!("Listing products");

    let products = state
        .store
        .list_products()
        .await
        .map_err(db_error("Error fetching products"))?;

    debug!("Listed {} products", products.len());
    Ok(Json(DataResponse::new(products)))
}

/// Create a product, or update it when the body carries `idBarang`
pub async fn upsert_product(
    State(state): State<SharedState>,
    Json(payload): Json<ProductPayload>,
) -> ApiResult<Json<MessageResponse<ProductRecord>>> {
    match payload.into_upsert() {
        ProductUpsert::Create(new_product) => create_product(&state, new_product).await,
        ProductUpsert::Update { id_barang, changes } => {
            update_product(&state, id_barang, changes).await
        }
    }
}

/// Update the product named by the path
pub async fn replace_product(
    State(state): State<SharedState>,
    Path(id_barang): Path<i32>,
    Json(payload): Json<ProductPayload>,
) -> ApiResult<Json<MessageResponse<ProductRecord>>> {
    if let Some(body_id) = payload.id_barang {
        if body_id != id_barang {
            return Err(validation_error(format!(
                "idBarang {} in body does not match path {}",
                body_id, id_barang
            )));
        }
    }

    update_product(&state, id_barang, payload.into_changes()).await
}

async fn create_product(
    state: &SharedState,
    new_product: NewProduct,
) -> ApiResult<Json<MessageResponse<ProductRecord>>> {
    new_product
        .validate()
        .map_err(|e| validation_error(e.to_string()))?;

    debug!("Creating product '{}'", new_product.nama);

    let product = state
        .store
        .create_product(&new_product)
        .await
        .map_err(db_error("Error adding new product"))?;

    info!("Product {} created", product.id_barang);
    Ok(Json(MessageResponse::with_data(
        "Product added successfully",
        ProductRecord::from(product),
    )))
}

async fn update_product(
    state: &SharedState,
    id_barang: i32,
    changes: ProductChanges,
) -> ApiResult<Json<MessageResponse<ProductRecord>>> {
    changes
        .validate()
        .map_err(|e| validation_error(e.to_string()))?;

    debug!("Updating product {}", id_barang);

    let updated = state
        .store
        .update_product(id_barang, &changes)
        .await
        .map_err(db_error("Error updating product"))?;

    // An update that touches no row still succeeds
    let record = match updated {
        Some(product) => {
            info!("Product {} updated", id_barang);
            ProductRecord::from(product)
        }
        None => {
            warn!("Update of product {} matched no row", id_barang);
            changes.echo(id_barang)
        }
    };

    Ok(Json(MessageResponse::with_data(
        "Product updated successfully",
        record,
    )))
}

/// List the SKUs of a product; unknown products simply have none
pub async fn list_skus(
    State(state): State<SharedState>,
    Path(id_barang): Path<i32>,
) -> ApiResult<Json<DataResponse<Vec<Sku>>>> {
    debug!("Listing SKUs for product {}", id_barang);

    let skus = state
        .store
        .list_skus(id_barang)
        .await
        .map_err(db_error("Error fetching skus"))?;

    Ok(Json(DataResponse::new(skus)))
}

/// Create a SKU under a product, or rename it when the body carries `idSKU`
pub async fn upsert_sku(
    State(state): State<SharedState>,
    Path(id_barang): Path<i32>,
    Json(payload): Json<SkuPayload>,
) -> ApiResult<Json<MessageResponse<Sku>>> {
    payload
        .validate()
        .map_err(|e| validation_error(e.to_string()))?;

    match payload.id_sku {
        None => {
            let sku = state
                .store
                .create_sku(id_barang, &payload.sku_code)
                .await
                .map_err(db_error("Error adding SKU"))?;

            info!("SKU {} created for product {}", sku.id_sku, id_barang);
            Ok(Json(MessageResponse::with_data("SKU added successfully", sku)))
        }
        Some(id_sku) => {
            let updated = state
                .store
                .update_sku(id_barang, id_sku, &payload.sku_code)
                .await
                .map_err(db_error("Error updating SKU"))?;

            let sku = match updated {
                Some(sku) => {
                    info!("SKU {} updated", id_sku);
                    sku
                }
                None => {
                    warn!("Update of SKU {} under product {} matched no row", id_sku, id_barang);
                    Sku {
                        id_sku,
                        id_barang,
                        sku_code: payload.sku_code,
                    }
                }
            };

            Ok(Json(MessageResponse::with_data(
                "SKU updated successfully",
                sku,
            )))
        }
    }
}
