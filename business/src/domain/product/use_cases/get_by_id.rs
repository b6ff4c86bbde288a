use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{GetProductParams, Product};

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetProductParams) -> Result<Product, ProductError>;
}
