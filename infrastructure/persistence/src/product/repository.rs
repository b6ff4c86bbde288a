use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{
    CreateProductParams, GetProductsParams, NewProductRow, PartialUpdateProductParams, Product,
    ProductRowUpdate,
};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductField;

use super::entity::ProductEntity;
use super::queries;
use crate::db::DEFAULT_STATEMENT_TIMEOUT;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
    statement_timeout: Duration,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self::with_statement_timeout(pool, DEFAULT_STATEMENT_TIMEOUT)
    }

    pub fn with_statement_timeout(pool: PgPool, statement_timeout: Duration) -> Self {
        Self {
            pool,
            statement_timeout,
        }
    }

    /// Runs one statement under the statement timeout.
    ///
    /// Infrastructure failures are logged here, where they are first seen.
    async fn run<T, F>(&self, operation: &'static str, statement: F) -> Result<T, RepositoryError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.statement_timeout, statement).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                error!(operation, error = %e, "product statement failed");
                Err(RepositoryError::database_error(format!("{operation}: {e}")))
            }
            Err(_) => {
                error!(
                    operation,
                    timeout_ms = self.statement_timeout.as_millis() as u64,
                    "product statement timed out"
                );
                Err(RepositoryError::Timeout)
            }
        }
    }
}

fn into_domain(entities: Vec<ProductEntity>) -> Vec<Product> {
    entities.into_iter().map(|e| e.into_domain()).collect()
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self, filter: &GetProductsParams) -> Result<Vec<Product>, RepositoryError> {
        let mut query = queries::select_products(filter);
        let entities = self
            .run(
                "get products",
                query.build_query_as::<ProductEntity>().fetch_all(&self.pool),
            )
            .await?;

        Ok(into_domain(entities))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let mut query = queries::select_product(id);
        let entity = self
            .run(
                "get product",
                query
                    .build_query_as::<ProductEntity>()
                    .fetch_optional(&self.pool),
            )
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn create(&self, params: &CreateProductParams) -> Result<Product, RepositoryError> {
        let mut query = queries::insert_product(params)?;
        let entity = self
            .run(
                "create product",
                query.build_query_as::<ProductEntity>().fetch_one(&self.pool),
            )
            .await?;

        Ok(entity.into_domain())
    }

    async fn partial_update(
        &self,
        params: &PartialUpdateProductParams,
    ) -> Result<Product, RepositoryError> {
        let mut query = queries::update_product(params.id, params);
        let entity = self
            .run(
                "partial update product",
                query
                    .build_query_as::<ProductEntity>()
                    .fetch_optional(&self.pool),
            )
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<Uuid, RepositoryError> {
        let mut query = queries::delete_product(id);
        self.run(
            "delete product",
            query.build_query_scalar::<Uuid>().fetch_optional(&self.pool),
        )
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    async fn bulk_create(&self, rows: &[NewProductRow]) -> Result<Vec<Product>, RepositoryError> {
        let mut query = queries::bulk_insert_products(rows)?;
        let entities = self
            .run(
                "bulk create products",
                query.build_query_as::<ProductEntity>().fetch_all(&self.pool),
            )
            .await?;

        Ok(into_domain(entities))
    }

    async fn bulk_update(
        &self,
        fields: &[ProductField],
        rows: &[ProductRowUpdate],
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut query = queries::bulk_update_products(fields, rows)?;
        let entities = self
            .run(
                "bulk update products",
                query.build_query_as::<ProductEntity>().fetch_all(&self.pool),
            )
            .await?;

        Ok(into_domain(entities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lazy_repository(statement_timeout: Duration) -> ProductRepositoryPostgres {
        let pool = PgPool::connect_lazy("postgres://localhost/products").unwrap();
        ProductRepositoryPostgres::with_statement_timeout(pool, statement_timeout)
    }

    #[tokio::test]
    async fn should_give_up_on_a_statement_past_its_timeout() {
        let repo = lazy_repository(Duration::from_millis(1));

        let result = repo
            .run(
                "stalled statement",
                std::future::pending::<Result<(), sqlx::Error>>(),
            )
            .await;

        assert!(matches!(result, Err(RepositoryError::Timeout)));
    }

    #[tokio::test]
    async fn should_map_driver_failures_to_database_error() {
        let repo = lazy_repository(Duration::from_secs(5));

        let result = repo
            .run("get product", async {
                Err::<(), _>(sqlx::Error::RowNotFound)
            })
            .await;

        match result {
            Err(RepositoryError::DatabaseError(context)) => {
                assert!(context.starts_with("get product:"))
            }
            other => panic!("expected database error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_pass_through_statement_results() {
        let repo = lazy_repository(Duration::from_secs(5));

        let result = repo.run("count", async { Ok::<_, sqlx::Error>(3_i64) }).await;

        assert_eq!(result.unwrap(), 3);
    }
}
