use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{PartialUpdateProductParams, Product};

#[async_trait]
pub trait PartialUpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: PartialUpdateProductParams) -> Result<Product, ProductError>;
}
