//! Return item route handlers

use crate::error::{db_error, not_found_error, validation_error, ApiResult};
use crate::models::{CreateReturnItemRequest, DataResponse, MessageResponse, ReturnItem, ReturnItemView};
use crate::state::SharedState;
use axum::{extract::State, Json};
use tracing::{debug, info, warn};
use validator::Validate;

/// List return items with their product name and SKU code
pub async fn list_return_items(
    State(state): State<SharedState>,
) -> ApiResult<Json<DataResponse<Vec<ReturnItemView>>>> {
    debug!("Listing return items");

    let items = state
        .store
        .list_return_items()
        .await
        .map_err(db_error("Error fetching return items"))?;

    Ok(Json(DataResponse::new(items)))
}

/// Record a return after checking that the SKU exists.
///
/// The lookup and the insert are separate statements. A SKU removed in
/// between is caught by the `return_items.id_sku` foreign key.
pub async fn create_return_item(
    State(state): State<SharedState>,
    Json(payload): Json<CreateReturnItemRequest>,
) -> ApiResult<Json<MessageResponse<ReturnItem>>> {
    payload
        .validate()
        .map_err(|e| validation_error(e.to_string()))?;

    let sku = state
        .store
        .find_sku(payload.id_sku)
        .await
        .map_err(db_error("Error checking SKU"))?;

    if sku.is_none() {
        warn!("Rejected return item for unknown SKU {}", payload.id_sku);
        return Err(not_found_error("Invalid SKU"));
    }

    let item = state
        .store
        .create_return_item(&payload)
        .await
        .map_err(db_error("Error adding return item"))?;

    info!(
        "Return item {} recorded: {} x SKU {}",
        item.id, item.jumlah, item.id_sku
    );

    Ok(Json(MessageResponse::with_data(
        "Return item added successfully",
        item,
    )))
}
