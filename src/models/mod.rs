//! Data models and DTOs (Data Transfer Objects)
//!
//! Contains all request/response structures used by the API.

pub mod product;
pub mod return_item;
pub mod sku;

// Re-export commonly used types
pub use product::*;
pub use return_item::*;
pub use sku::*;

use serde::Serialize;

/// `{ "data": ... }` envelope used by the listing endpoints
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// `{ "message": ..., "data": ... }` envelope used by the write endpoints.
/// Without data it doubles as the 404/400 body.
#[derive(Debug, Serialize)]
pub struct MessageResponse<T: Serialize = ()> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> MessageResponse<T> {
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}

impl MessageResponse {
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}
