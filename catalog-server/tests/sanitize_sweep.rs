//! Base64 image sweep integration tests
//!
//! Run: cargo test -p catalog-server --test sanitize_sweep

use serde::Serialize;
use surrealdb::engine::local::{Db, RocksDb};
use surrealdb::{RecordId, Surreal};

use catalog_server::ImageSanitizer;

async fn setup_db() -> (Surreal<Db>, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let db: Surreal<Db> = Surreal::new::<RocksDb>(tmp.path()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    (db, tmp)
}

#[derive(Serialize)]
struct SeedCategory {
    name: String,
    url: String,
    is_deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    opengraph_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

#[derive(Serialize)]
struct SeedProduct {
    name: String,
    is_deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    opengraph_image: Option<String>,
}

#[derive(Serialize)]
struct SeedGallery {
    is_deleted: bool,
    product: RecordId,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

async fn field_of(db: &Surreal<Db>, table: &str, key: &str, field: &str) -> Option<String> {
    let record: Option<serde_json::Value> = db.select((table, key)).await.unwrap();
    record
        .and_then(|r| r.get(field).cloned())
        .and_then(|v| v.as_str().map(str::to_string))
}

#[tokio::test]
async fn sweep_clears_only_data_image_fields() {
    let (db, _tmp) = setup_db().await;

    let _: Option<serde_json::Value> = db
        .create(("category", "c1"))
        .content(SeedCategory {
            name: "shoes".into(),
            url: "shoes".into(),
            is_deleted: false,
            opengraph_image: Some("data:image/png;base64,AAAA".into()),
            image: Some("https://cdn.example.com/shoes.png".into()),
        })
        .await
        .unwrap();
    let _: Option<serde_json::Value> = db
        .create(("product", "p1"))
        .content(SeedProduct {
            name: "sneaker".into(),
            is_deleted: false,
            opengraph_image: Some("data:image/jpeg;base64,BBBB".into()),
        })
        .await
        .unwrap();
    let _: Option<serde_json::Value> = db
        .create(("product_gallery", "g1"))
        .content(SeedGallery {
            is_deleted: false,
            product: RecordId::from_table_key("product", "p1"),
            image: Some("data:image/webp;base64,CCCC".into()),
        })
        .await
        .unwrap();

    let report = ImageSanitizer::new(db.clone()).sanitize().await.unwrap();
    assert_eq!(report.category_fields, 1);
    assert_eq!(report.product_fields, 1);
    assert_eq!(report.gallery_fields, 1);

    // cleared fields are unset
    assert_eq!(field_of(&db, "category", "c1", "opengraph_image").await, None);
    assert_eq!(field_of(&db, "product", "p1", "opengraph_image").await, None);
    assert_eq!(field_of(&db, "product_gallery", "g1", "image").await, None);

    // non-matching fields stay untouched
    assert_eq!(
        field_of(&db, "category", "c1", "image").await,
        Some("https://cdn.example.com/shoes.png".into())
    );
    assert_eq!(
        field_of(&db, "category", "c1", "url").await,
        Some("shoes".into())
    );
}

#[tokio::test]
async fn sweep_is_idempotent() {
    let (db, _tmp) = setup_db().await;

    let _: Option<serde_json::Value> = db
        .create(("category", "c1"))
        .content(SeedCategory {
            name: "shoes".into(),
            url: "shoes".into(),
            is_deleted: false,
            opengraph_image: Some("data:image/png;base64,AAAA".into()),
            image: None,
        })
        .await
        .unwrap();

    let sanitizer = ImageSanitizer::new(db.clone());

    let first = sanitizer.sanitize().await.unwrap();
    assert_eq!(first.total(), 1);

    let second = sanitizer.sanitize().await.unwrap();
    assert_eq!(second.total(), 0);
}

#[tokio::test]
async fn sweep_over_empty_store_is_success() {
    let (db, _tmp) = setup_db().await;

    let report = ImageSanitizer::new(db.clone()).sanitize().await.unwrap();
    assert_eq!(report.total(), 0);
}
