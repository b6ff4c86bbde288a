use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{PartialUpdateProductParams, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::partial_update::PartialUpdateProductUseCase;

use super::logging::log_failure;

pub struct PartialUpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PartialUpdateProductUseCase for PartialUpdateProductUseCaseImpl {
    async fn execute(&self, params: PartialUpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        params.validate()?;

        if !params.has_changes() {
            self.logger
                .debug(&format!("No fields to update for product {}", params.id));
        }

        let product = self
            .repository
            .partial_update(&params)
            .await
            .map_err(ProductError::from)
            .inspect_err(|e| log_failure(self.logger.as_ref(), "Failed to update product", e))?;

        Ok(product)
    }
}
