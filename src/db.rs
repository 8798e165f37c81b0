//! Database access
//!
//! Handlers talk to an [`InventoryStore`]; the production implementation is
//! [`PgStore`], which runs the statements in [`queries`] over a pool.

#[cfg(test)]
pub mod memory;
pub mod postgres;
pub mod queries;

pub use postgres::PgStore;

use crate::config::DatabaseConfig;
use crate::models::{
    CreateReturnItemRequest, NewProduct, Product, ProductChanges, ReturnItem, ReturnItemView, Sku,
};
use async_trait::async_trait;
use deadpool_postgres::{
    Config, CreatePoolError, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime,
};
use thiserror::Error;
use tokio_postgres::error::SqlState;
use tokio_postgres::NoTls;

/// Errors raised by a store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(tokio_postgres::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<tokio_postgres::Error> for StoreError {
    fn from(e: tokio_postgres::Error) -> Self {
        match e.code() {
            Some(code) if *code == SqlState::FOREIGN_KEY_VIOLATION => {
                StoreError::Constraint(e.to_string())
            }
            _ => StoreError::Database(e),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations behind the HTTP handlers.
///
/// Every call is a single statement; nothing here spans a transaction.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn list_products(&self) -> StoreResult<Vec<Product>>;

    /// SKUs of one product, empty when the product has none (or doesn't exist)
    async fn list_skus(&self, id_barang: i32) -> StoreResult<Vec<Sku>>;

    async fn list_return_items(&self) -> StoreResult<Vec<ReturnItemView>>;

    async fn create_product(&self, product: &NewProduct) -> StoreResult<Product>;

    /// Returns `None` when no product has this id
    async fn update_product(
        &self,
        id_barang: i32,
        changes: &ProductChanges,
    ) -> StoreResult<Option<Product>>;

    async fn create_sku(&self, id_barang: i32, sku_code: &str) -> StoreResult<Sku>;

    /// Returns `None` when the SKU doesn't exist under this product
    async fn update_sku(
        &self,
        id_barang: i32,
        id_sku: i32,
        sku_code: &str,
    ) -> StoreResult<Option<Sku>>;

    async fn find_sku(&self, id_sku: i32) -> StoreResult<Option<Sku>>;

    async fn create_return_item(&self, item: &CreateReturnItemRequest) -> StoreResult<ReturnItem>;
}

/// Create the connection pool described by the configuration
pub fn create_pool(config: &DatabaseConfig) -> Result<Pool, CreatePoolError> {
    let mut cfg = Config::new();
    cfg.host = Some(config.host.clone());
    cfg.port = Some(config.port);
    cfg.user = Some(config.user.clone());
    cfg.password = Some(config.password.clone());
    cfg.dbname = Some(config.database.clone());
    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });
    cfg.pool = Some(PoolConfig::new(config.max_pool_size));

    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
}
