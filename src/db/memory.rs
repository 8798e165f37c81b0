//! In-memory inventory store for handler tests
//!
//! Mirrors the schema's foreign keys so handlers see the same failures.

use super::{InventoryStore, StoreError, StoreResult};
use crate::models::{
    CreateReturnItemRequest, NewProduct, Product, ProductChanges, ReturnItem, ReturnItemView, Sku,
};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    products: Vec<Product>,
    skus: Vec<Sku>,
    return_items: Vec<ReturnItem>,
    next_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn return_item_count(&self) -> usize {
        self.tables.read().await.return_items.len()
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn list_products(&self) -> StoreResult<Vec<Product>> {
        Ok(self.tables.read().await.products.clone())
    }

    async fn list_skus(&self, id_barang: i32) -> StoreResult<Vec<Sku>> {
        let tables = self.tables.read().await;
        Ok(tables
            .skus
            .iter()
            .filter(|s| s.id_barang == id_barang)
            .cloned()
            .collect())
    }

    async fn list_return_items(&self) -> StoreResult<Vec<ReturnItemView>> {
        let tables = self.tables.read().await;
        Ok(tables
            .return_items
            .iter()
            .map(|r| ReturnItemView {
                id: r.id,
                jumlah: r.jumlah,
                alasan: r.alasan.clone(),
                nama_barang: tables
                    .products
                    .iter()
                    .find(|p| p.id_barang == r.id_barang)
                    .map(|p| p.nama.clone()),
                sku_code: tables
                    .skus
                    .iter()
                    .find(|s| s.id_sku == r.id_sku)
                    .map(|s| s.sku_code.clone()),
            })
            .collect())
    }

    async fn create_product(&self, product: &NewProduct) -> StoreResult<Product> {
        let mut tables = self.tables.write().await;
        let created = Product {
            id_barang: tables.next_id(),
            nama: product.nama.clone(),
            details: product.details.clone(),
        };
        tables.products.push(created.clone());
        Ok(created)
    }

    async fn update_product(
        &self,
        id_barang: i32,
        changes: &ProductChanges,
    ) -> StoreResult<Option<Product>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .products
            .iter_mut()
            .find(|p| p.id_barang == id_barang)
            .map(|p| {
                p.apply(changes);
                p.clone()
            }))
    }

    async fn create_sku(&self, id_barang: i32, sku_code: &str) -> StoreResult<Sku> {
        let mut tables = self.tables.write().await;
        if !tables.products.iter().any(|p| p.id_barang == id_barang) {
            return Err(StoreError::Constraint(format!(
                "skus.id_barang {} is not present in products",
                id_barang
            )));
        }
        let sku = Sku {
            id_sku: tables.next_id(),
            id_barang,
            sku_code: sku_code.to_string(),
        };
        tables.skus.push(sku.clone());
        Ok(sku)
    }

    async fn update_sku(
        &self,
        id_barang: i32,
        id_sku: i32,
        sku_code: &str,
    ) -> StoreResult<Option<Sku>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .skus
            .iter_mut()
            .find(|s| s.id_sku == id_sku && s.id_barang == id_barang)
            .map(|s| {
                s.sku_code = sku_code.to_string();
                s.clone()
            }))
    }

    async fn find_sku(&self, id_sku: i32) -> StoreResult<Option<Sku>> {
        let tables = self.tables.read().await;
        Ok(tables.skus.iter().find(|s| s.id_sku == id_sku).cloned())
    }

    async fn create_return_item(&self, item: &CreateReturnItemRequest) -> StoreResult<ReturnItem> {
        let mut tables = self.tables.write().await;
        if !tables.products.iter().any(|p| p.id_barang == item.id_barang) {
            return Err(StoreError::Constraint(format!(
                "return_items.id_barang {} is not present in products",
                item.id_barang
            )));
        }
        if !tables.skus.iter().any(|s| s.id_sku == item.id_sku) {
            return Err(StoreError::Constraint(format!(
                "return_items.id_sku {} is not present in skus",
                item.id_sku
            )));
        }
        let created = ReturnItem {
            id: tables.next_id(),
            id_barang: item.id_barang,
            id_sku: item.id_sku,
            jumlah: item.jumlah,
            alasan: item.alasan.clone(),
        };
        tables.return_items.push(created.clone());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn test_sku_requires_existing_product() {
        let store = MemoryStore::new();
        let result = store.create_sku(99, "X-1").await;
        assert!(matches!(result, Err(StoreError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_update_sku_is_scoped_to_product() {
        let store = MemoryStore::new();
        let a = assert_ok!(
            store
                .create_product(&NewProduct {
                    nama: "A".to_string(),
                    details: Map::new(),
                })
                .await
        );
        let b = assert_ok!(
            store
                .create_product(&NewProduct {
                    nama: "B".to_string(),
                    details: Map::new(),
                })
                .await
        );
        let sku = assert_ok!(store.create_sku(a.id_barang, "A-1").await);

        let wrong_product = assert_ok!(store.update_sku(b.id_barang, sku.id_sku, "B-1").await);
        assert!(wrong_product.is_none());

        let renamed = assert_ok!(store.update_sku(a.id_barang, sku.id_sku, "A-2").await);
        assert_eq!(renamed.map(|s| s.sku_code), Some("A-2".to_string()));
    }
}
