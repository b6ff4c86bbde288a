use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::DeleteProductParams;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::DeleteProductUseCase;

use super::logging::log_failure;

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<Uuid, ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        let id = self
            .repository
            .delete(params.id)
            .await
            .map_err(ProductError::from)
            .inspect_err(|e| log_failure(self.logger.as_ref(), "Failed to delete product", e))?;

        self.logger.info(&format!("Product deleted: {}", id));
        Ok(id)
    }
}
