use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{BulkCreateProductsParams, Product};

#[async_trait]
pub trait BulkCreateProductsUseCase: Send + Sync {
    async fn execute(&self, params: BulkCreateProductsParams)
    -> Result<Vec<Product>, ProductError>;
}
