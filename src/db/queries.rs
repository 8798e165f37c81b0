//! SQL query constants
//!
//! Contains all SQL statements used by the application.

/// Tables created at startup, in dependency order
pub const CREATE_TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id_barang SERIAL PRIMARY KEY,
        nama VARCHAR(255) NOT NULL,
        details JSONB NOT NULL DEFAULT '{}'::jsonb
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS skus (
        id_sku SERIAL PRIMARY KEY,
        id_barang INTEGER NOT NULL REFERENCES products(id_barang),
        sku_code VARCHAR(100) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS return_items (
        id SERIAL PRIMARY KEY,
        id_barang INTEGER NOT NULL REFERENCES products(id_barang),
        id_sku INTEGER NOT NULL REFERENCES skus(id_sku),
        jumlah INTEGER NOT NULL,
        alasan TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_skus_id_barang ON skus(id_barang)",
];

pub const LIST_PRODUCTS: &str = r#"
    SELECT id_barang, nama, details
    FROM products
    ORDER BY id_barang
"#;

pub const INSERT_PRODUCT: &str = r#"
    INSERT INTO products (nama, details)
    VALUES ($1, $2::jsonb)
    RETURNING id_barang, nama, details
"#;

/// Only supplied columns change: a NULL name keeps the stored one and the
/// document is merged key by key.
pub const UPDATE_PRODUCT: &str = r#"
    UPDATE products
    SET nama = COALESCE($1::text, nama),
        details = details || $2::jsonb
    WHERE id_barang = $3
    RETURNING id_barang, nama, details
"#;

pub const LIST_SKUS_FOR_PRODUCT: &str = r#"
    SELECT id_sku, id_barang, sku_code
    FROM skus
    WHERE id_barang = $1
    ORDER BY id_sku
"#;

pub const FIND_SKU: &str = r#"
    SELECT id_sku, id_barang, sku_code
    FROM skus
    WHERE id_sku = $1
"#;

pub const INSERT_SKU: &str = r#"
    INSERT INTO skus (id_barang, sku_code)
    VALUES ($1, $2)
    RETURNING id_sku, id_barang, sku_code
"#;

pub const UPDATE_SKU: &str = r#"
    UPDATE skus
    SET sku_code = $1
    WHERE id_sku = $2 AND id_barang = $3
    RETURNING id_sku, id_barang, sku_code
"#;

/// Return items with product name and SKU code
pub const LIST_RETURN_ITEMS: &str = r#"
    SELECT r.id, r.jumlah, r.alasan, p.nama AS nama_barang, s.sku_code
    FROM return_items r
    LEFT JOIN products p ON r.id_barang = p.id_barang
    LEFT JOIN skus s ON r.id_sku = s.id_sku
    ORDER BY r.id
"#;

pub const INSERT_RETURN_ITEM: &str = r#"
    INSERT INTO return_items (id_barang, id_sku, jumlah, alasan)
    VALUES ($1, $2, $3, $4)
    RETURNING id, id_barang, id_sku, jumlah, alasan
"#;
