use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{CreateProductParams, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::CreateProductUseCase;

use super::logging::log_failure;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        params.validate()?;

        let product = self
            .repository
            .create(&params)
            .await
            .map_err(ProductError::from)
            .inspect_err(|e| log_failure(self.logger.as_ref(), "Failed to create product", e))?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{MockProductRepo, mock_logger, stored_product};
    use crate::domain::errors::RepositoryError;
    use uuid::Uuid;

    #[tokio::test]
    async fn should_create_product_when_valid_input() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .withf(|params| params.name == "sku-1" && params.title == "Widget")
            .times(1)
            .returning(|params| Ok(stored_product(Uuid::new_v4(), &params.name, &params.title)));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(CreateProductParams {
                name: "sku-1".to_string(),
                title: "Widget".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(product.name, "sku-1");
        assert_eq!(product.title, "Widget");
        assert!(product.deleted_at.is_none());
        assert_eq!(product.created_at, product.updated_at);
    }

    #[tokio::test]
    async fn should_reject_product_when_name_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_create().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "".to_string(),
                title: "Widget".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_surface_infrastructure_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::database_error("unique violation")));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "sku-1".to_string(),
                title: "Widget".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError(_))
        ));
    }
}
