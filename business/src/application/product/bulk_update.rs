use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{BulkUpdateProductsParams, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::bulk_update::BulkUpdateProductsUseCase;
use crate::domain::product::value_objects::{ProductField, describe_fields};

use super::logging::log_failure;

pub struct BulkUpdateProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BulkUpdateProductsUseCase for BulkUpdateProductsUseCaseImpl {
    async fn execute(
        &self,
        params: BulkUpdateProductsParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger.info(&format!(
            "Bulk updating {} products ({})",
            params.items.len(),
            describe_fields(&ProductField::ALL)
        ));

        params.validate()?;

        let products = self
            .repository
            .bulk_update(&ProductField::ALL, &params.items)
            .await
            .map_err(ProductError::from)
            .inspect_err(|e| {
                log_failure(self.logger.as_ref(), "Failed to bulk update products", e)
            })?;

        if products.len() < params.items.len() {
            self.logger.warn(&format!(
                "Bulk update matched {} of {} products",
                products.len(),
                params.items.len()
            ));
        }
        Ok(products)
    }
}
