use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{GetProductsParams, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

use super::logging::log_failure;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetProductsParams) -> Result<Vec<Product>, ProductError> {
        self.logger.debug(&format!(
            "Fetching products (limit {}, offset {})",
            params.limit, params.offset
        ));

        let products = self
            .repository
            .get_all(&params)
            .await
            .map_err(ProductError::from)
            .inspect_err(|e| log_failure(self.logger.as_ref(), "Failed to list products", e))?;

        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
