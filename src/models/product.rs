//! Product models and DTOs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// A catalog product.
///
/// Fields other than `idBarang` and `nama` are opaque to the service; they are
/// stored as one JSON document and flattened back into the product object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "idBarang")]
    pub id_barang: i32,
    pub nama: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Body of `POST /products` and `PUT /products/{idBarang}`
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    #[serde(rename = "idBarang", default)]
    pub id_barang: Option<i32>,
    #[serde(default)]
    pub nama: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// A product that does not exist yet
#[derive(Debug, Clone, Validate)]
pub struct NewProduct {
    #[validate(length(min = 1, message = "nama is required"))]
    pub nama: String,
    pub details: Map<String, Value>,
}

/// Fields to apply to an existing product; absent fields are left untouched
#[derive(Debug, Clone, Default, Validate)]
pub struct ProductChanges {
    #[validate(length(min = 1, message = "nama must not be empty"))]
    pub nama: Option<String>,
    pub details: Map<String, Value>,
}

/// Product as returned by the write endpoints.
///
/// An update that matched no row has nothing stored to return, so the
/// request's column set is echoed back with the identifier instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    #[serde(rename = "idBarang")]
    pub id_barang: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nama: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        Self {
            id_barang: product.id_barang,
            nama: Some(product.nama),
            details: product.details,
        }
    }
}

/// What a product body asks for, decided by the presence of `idBarang`
#[derive(Debug)]
pub enum ProductUpsert {
    Create(NewProduct),
    Update {
        id_barang: i32,
        changes: ProductChanges,
    },
}

impl ProductPayload {
    pub fn into_upsert(self) -> ProductUpsert {
        match self.id_barang {
            None => ProductUpsert::Create(NewProduct {
                nama: self.nama.unwrap_or_default(),
                details: self.details,
            }),
            Some(id_barang) => ProductUpsert::Update {
                id_barang,
                changes: self.into_changes(),
            },
        }
    }

    /// Drop the identifier and keep only the column set
    pub fn into_changes(self) -> ProductChanges {
        ProductChanges {
            nama: self.nama,
            details: self.details,
        }
    }
}

impl ProductChanges {
    pub fn echo(self, id_barang: i32) -> ProductRecord {
        ProductRecord {
            id_barang,
            nama: self.nama,
            details: self.details,
        }
    }
}

impl Product {
    /// Apply changes the same way the `UPDATE` statement does
    pub fn apply(&mut self, changes: &ProductChanges) {
        if let Some(nama) = &changes.nama {
            self.nama = nama.clone();
        }
        for (key, value) in &changes.details {
            self.details.insert(key.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn payload(body: Value) -> ProductPayload {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_missing_id_is_create() {
        let upsert = payload(json!({ "nama": "Kaos Polos", "warna": "hitam" })).into_upsert();
        match upsert {
            ProductUpsert::Create(new_product) => {
                assert_eq!(new_product.nama, "Kaos Polos");
                assert_eq!(new_product.details.get("warna"), Some(&json!("hitam")));
            }
            other => panic!("expected create, got {:?}", other),
        }
    }

    #[test]
    fn test_null_id_is_create() {
        let upsert = payload(json!({ "idBarang": null, "nama": "Topi" })).into_upsert();
        assert!(matches!(upsert, ProductUpsert::Create(_)));
    }

    #[test]
    fn test_present_id_is_update_without_id_in_changes() {
        let upsert = payload(json!({ "idBarang": 7, "harga": 25000 })).into_upsert();
        match upsert {
            ProductUpsert::Update { id_barang, changes } => {
                assert_eq!(id_barang, 7);
                assert_eq!(changes.nama, None);
                assert!(!changes.details.contains_key("idBarang"));
                assert_eq!(changes.details.get("harga"), Some(&json!(25000)));
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_create_requires_nama() {
        let new_product = NewProduct {
            nama: String::new(),
            details: Map::new(),
        };
        assert!(new_product.validate().is_err());
    }

    #[test]
    fn test_product_serializes_flat() {
        let mut details = Map::new();
        details.insert("stok".to_string(), json!(12));
        let product = Product {
            id_barang: 3,
            nama: "Sepatu".to_string(),
            details,
        };

        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({ "idBarang": 3, "nama": "Sepatu", "stok": 12 })
        );
    }

    #[test]
    fn test_echo_omits_missing_nama() {
        let changes = ProductChanges {
            nama: None,
            details: Map::from_iter([("stok".to_string(), json!(4))]),
        };

        assert_eq!(
            serde_json::to_value(changes.echo(9)).unwrap(),
            json!({ "idBarang": 9, "stok": 4 })
        );
    }

    #[test]
    fn test_apply_merges_details() {
        let mut product = Product {
            id_barang: 1,
            nama: "Tas".to_string(),
            details: Map::from_iter([("warna".to_string(), json!("merah"))]),
        };
        let changes = ProductChanges {
            nama: None,
            details: Map::from_iter([("stok".to_string(), json!(5))]),
        };

        product.apply(&changes);

        assert_eq!(product.nama, "Tas");
        assert_eq!(product.details.get("warna"), Some(&json!("merah")));
        assert_eq!(product.details.get("stok"), Some(&json!(5)));
    }
}
