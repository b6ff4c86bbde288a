use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{BulkUpdateProductsParams, Product};

#[async_trait]
pub trait BulkUpdateProductsUseCase: Send + Sync {
    async fn execute(&self, params: BulkUpdateProductsParams)
    -> Result<Vec<Product>, ProductError>;
}
