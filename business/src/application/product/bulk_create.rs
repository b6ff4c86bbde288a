use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{BulkCreateProductsParams, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::bulk_create::BulkCreateProductsUseCase;

use super::logging::log_failure;

pub struct BulkCreateProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BulkCreateProductsUseCase for BulkCreateProductsUseCaseImpl {
    async fn execute(
        &self,
        params: BulkCreateProductsParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Bulk creating {} products", params.items.len()));

        params.validate()?;

        let products = self
            .repository
            .bulk_create(&params.items)
            .await
            .map_err(ProductError::from)
            .inspect_err(|e| {
                log_failure(self.logger.as_ref(), "Failed to bulk create products", e)
            })?;

        self.logger
            .info(&format!("Bulk created {} products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{MockProductRepo, mock_logger, stored_product};
    use crate::domain::product::model::NewProductRow;
    use uuid::Uuid;

    fn row(name: &str, title: &str) -> NewProductRow {
        NewProductRow {
            name: name.to_string(),
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn should_insert_all_rows_in_one_call() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_bulk_create()
            .withf(|rows| rows.len() == 2)
            .times(1)
            .returning(|rows| {
                Ok(rows
                    .iter()
                    .map(|r| stored_product(Uuid::new_v4(), &r.name, &r.title))
                    .collect())
            });

        let use_case = BulkCreateProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(BulkCreateProductsParams {
                items: vec![row("sku-1", "Widget"), row("sku-2", "Gadget")],
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[1].title, "Gadget");
    }

    #[tokio::test]
    async fn should_reject_empty_batch() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_bulk_create().never();

        let use_case = BulkCreateProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BulkCreateProductsParams { items: vec![] })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::EmptyBatch));
    }

    #[tokio::test]
    async fn should_reject_batch_with_blank_name() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_bulk_create().never();

        let use_case = BulkCreateProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BulkCreateProductsParams {
                items: vec![row("sku-1", "Widget"), row("", "Gadget")],
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }
}
