//! Integration tests for the Postgres product repository.
//!
//! Run against a real database with `DATABASE_URL` set and `--ignored`:
//! - create / get round trip and store-assigned fields
//! - not-found on get, partial update and delete
//! - sparse partial updates
//! - list filters and paging window
//! - bulk insert and bulk update in one statement

use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{
    CreateProductParams, GetProductsParams, NewProductRow, PartialUpdateProductParams,
    ProductRowUpdate,
};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductField;
use persistence::product::repository::ProductRepositoryPostgres;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_product(name: &str, title: &str) -> CreateProductParams {
    CreateProductParams {
        name: name.to_string(),
        title: title.to_string(),
    }
}

fn new_row(name: &str, title: &str) -> NewProductRow {
    NewProductRow {
        name: name.to_string(),
        title: title.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Single-row operations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_create_then_get_round_trip(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);

    let created = repo.create(&new_product("sku-1", "Widget")).await.unwrap();
    assert_eq!(created.name, "sku-1");
    assert_eq!(created.title, "Widget");
    assert_eq!(created.created_at, created.updated_at);
    assert!(created.deleted_at.is_none());

    let fetched = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_delete_then_get_is_not_found(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);
    let created = repo.create(&new_product("sku-1", "Widget")).await.unwrap();

    let deleted_id = repo.delete(created.id).await.unwrap();
    assert_eq!(deleted_id, created.id);

    assert!(matches!(
        repo.get_by_id(created.id).await,
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.delete(created.id).await,
        Err(RepositoryError::NotFound)
    ));
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_partial_update_writes_only_present_fields(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);
    let created = repo.create(&new_product("sku-1", "Widget")).await.unwrap();

    let updated = repo
        .partial_update(&PartialUpdateProductParams {
            id: created.id,
            name: None,
            title: Some("Gadget".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "sku-1");
    assert_eq!(updated.title, "Gadget");
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_partial_update_without_fields_keeps_row(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);
    let created = repo.create(&new_product("sku-1", "Widget")).await.unwrap();

    let unchanged = repo
        .partial_update(&PartialUpdateProductParams {
            id: created.id,
            name: None,
            title: None,
        })
        .await
        .unwrap();

    assert_eq!(unchanged, created);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_missing_id_is_not_found(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);
    let missing = Uuid::new_v4();

    assert!(matches!(
        repo.get_by_id(missing).await,
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.partial_update(&PartialUpdateProductParams {
            id: missing,
            name: Some("sku-9".to_string()),
            title: None,
        })
        .await,
        Err(RepositoryError::NotFound)
    ));
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_list_applies_filters_and_limit(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);
    repo.bulk_create(&[
        new_row("sku-1", "Widget"),
        new_row("sku-2", "Widget"),
        new_row("sku-3", "Gadget"),
    ])
    .await
    .unwrap();

    let widgets = repo
        .get_all(&GetProductsParams::from_query(
            None,
            None,
            None,
            Some("Widget".to_string()),
        ))
        .await
        .unwrap();
    assert_eq!(widgets.len(), 2);
    assert!(widgets.iter().all(|p| p.title == "Widget"));

    let page = repo
        .get_all(&GetProductsParams::from_query(Some("1"), None, None, None))
        .await
        .unwrap();
    assert_eq!(page.len(), 1);

    let none = repo
        .get_all(&GetProductsParams::from_query(
            None,
            None,
            Some("sku-404".to_string()),
            None,
        ))
        .await
        .unwrap();
    assert!(none.is_empty());
}

// ---------------------------------------------------------------------------
// Bulk operations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_bulk_create_returns_generated_rows(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);

    let created = repo
        .bulk_create(&[new_row("sku-1", "Widget"), new_row("sku-2", "Gadget")])
        .await
        .unwrap();

    assert_eq!(created.len(), 2);
    assert!(created.iter().all(|p| p.created_at == p.updated_at));
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_bulk_update_touches_only_batch_ids(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);
    let first = repo.create(&new_product("sku-1", "Widget")).await.unwrap();
    let bystander = repo.create(&new_product("sku-2", "Gadget")).await.unwrap();
    let ghost = Uuid::new_v4();

    let updated = repo
        .bulk_update(
            &ProductField::ALL,
            &[
                ProductRowUpdate {
                    id: first.id,
                    name: "sku-1b".to_string(),
                    title: "Widget v2".to_string(),
                },
                ProductRowUpdate {
                    id: ghost,
                    name: "sku-x".to_string(),
                    title: "Ghost".to_string(),
                },
            ],
        )
        .await
        .unwrap();

    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].id, first.id);
    assert_eq!(updated[0].name, "sku-1b");
    assert_eq!(updated[0].title, "Widget v2");

    let untouched = repo.get_by_id(bystander.id).await.unwrap();
    assert_eq!(untouched, bystander);
}
