//! PostgreSQL-backed inventory store
//!
//! One statement per call, issued on a client checked out from the pool.

use super::{queries, InventoryStore, StoreResult};
use crate::models::{
    CreateReturnItemRequest, NewProduct, Product, ProductChanges, ReturnItem, ReturnItemView, Sku,
};
use async_trait::async_trait;
use deadpool_postgres::Pool;
use serde_json::{Map, Value};
use tokio_postgres::Row;
use tracing::{debug, info};

pub struct PgStore {
    pool: Pool,
}

impl PgStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Round-trip a trivial query so startup fails fast on a bad connection
    pub async fn verify_connection(&self) -> StoreResult<()> {
        let client = self.pool.get().await?;
        client.query_one("SELECT 1", &[]).await?;
        debug!("Database connection verified");
        Ok(())
    }

    /// Create tables if they don't exist
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        let client = self.pool.get().await?;
        for statement in queries::CREATE_TABLES {
            client.execute(*statement, &[]).await?;
        }
        info!("Database tables initialized");
        Ok(())
    }

    /// Stop handing out connections; called once the server has drained
    pub fn close(&self) {
        self.pool.close();
    }
}

fn product_from_row(row: &Row) -> Product {
    let details = match row.get::<_, Value>("details") {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    Product {
        id_barang: row.get("id_barang"),
        nama: row.get("nama"),
        details,
    }
}

fn sku_from_row(row: &Row) -> Sku {
    Sku {
        id_sku: row.get("id_sku"),
        id_barang: row.get("id_barang"),
        sku_code: row.get("sku_code"),
    }
}

#[async_trait]
impl InventoryStore for PgStore {
    async fn list_products(&self) -> StoreResult<Vec<Product>> {
        let client = self.pool.get().await?;
        let rows = client.query(queries::LIST_PRODUCTS, &[]).await?;
        Ok(rows.iter().map(product_from_row).collect())
    }

    async fn list_skus(&self, id_barang: i32) -> StoreResult<Vec<Sku>> {
        let client = self.pool.get().await?;
        let rows = client
            .query(queries::LIST_SKUS_FOR_PRODUCT, &[&id_barang])
            .await?;
        Ok(rows.iter().map(sku_from_row).collect())
    }

    async fn list_return_items(&self) -> StoreResult<Vec<ReturnItemView>> {
        let client = self.pool.get().await?;
        let rows = client.query(queries::LIST_RETURN_ITEMS, &[]).await?;
        Ok(rows
            .iter()
            .map(|r| ReturnItemView {
                id: r.get("id"),
                jumlah: r.get("jumlah"),
                alasan: r.get("alasan"),
                nama_barang: r.get("nama_barang"),
                sku_code: r.get("sku_code"),
            })
            .collect())
    }

    async fn create_product(&self, product: &NewProduct) -> StoreResult<Product> {
        let client = self.pool.get().await?;
        let details = Value::Object(product.details.clone());
        let row = client
            .query_one(queries::INSERT_PRODUCT, &[&product.nama, &details])
            .await?;
        Ok(product_from_row(&row))
    }

    async fn update_product(
        &self,
        id_barang: i32,
        changes: &ProductChanges,
    ) -> StoreResult<Option<Product>> {
        let client = self.pool.get().await?;
        let nama = changes.nama.as_deref();
        let details = Value::Object(changes.details.clone());
        let row = client
            .query_opt(queries::UPDATE_PRODUCT, &[&nama, &details, &id_barang])
            .await?;
        Ok(row.as_ref().map(product_from_row))
    }

    async fn create_sku(&self, id_barang: i32, sku_code: &str) -> StoreResult<Sku> {
        let client = self.pool.get().await?;
        let row = client
            .query_one(queries::INSERT_SKU, &[&id_barang, &sku_code])
            .await?;
        Ok(sku_from_row(&row))
    }

    async fn update_sku(
        &self,
        id_barang: i32,
        id_sku: i32,
        sku_code: &str,
    ) -> StoreResult<Option<Sku>> {
        let client = self.pool.get().await?;
        let row = client
            .query_opt(queries::UPDATE_SKU, &[&sku_code, &id_sku, &id_barang])
            .await?;
        Ok(row.as_ref().map(sku_from_row))
    }

    async fn find_sku(&self, id_sku: i32) -> StoreResult<Option<Sku>> {
        let client = self.pool.get().await?;
        let row = client.query_opt(queries::FIND_SKU, &[&id_sku]).await?;
        Ok(row.as_ref().map(sku_from_row))
    }

    async fn create_return_item(&self, item: &CreateReturnItemRequest) -> StoreResult<ReturnItem> {
        let client = self.pool.get().await?;
        let row = client
            .query_one(
                queries::INSERT_RETURN_ITEM,
                &[&item.id_barang, &item.id_sku, &item.jumlah, &item.alasan],
            )
            .await?;
        Ok(ReturnItem {
            id: row.get("id"),
            id_barang: row.get("id_barang"),
            id_sku: row.get("id_sku"),
            jumlah: row.get("jumlah"),
            alasan: row.get("alasan"),
        })
    }
}
