use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{
    CreateProductParams, GetProductsParams, NewProductRow, PartialUpdateProductParams, Product,
    ProductRowUpdate,
};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::ProductField;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self, filter: &GetProductsParams) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn create(&self, params: &CreateProductParams) -> Result<Product, RepositoryError>;
        async fn partial_update(&self, params: &PartialUpdateProductParams) -> Result<Product, RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<Uuid, RepositoryError>;
        async fn bulk_create(&self, rows: &[NewProductRow]) -> Result<Vec<Product>, RepositoryError>;
        async fn bulk_update(&self, fields: &[ProductField], rows: &[ProductRowUpdate]) -> Result<Vec<Product>, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn stored_product(id: Uuid, name: &str, title: &str) -> Product {
    let now = Utc::now();
    Product::from_repository(id, name.to_string(), title.to_string(), now, now, None)
}
