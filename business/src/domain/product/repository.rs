use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{
    CreateProductParams, GetProductsParams, NewProductRow, PartialUpdateProductParams, Product,
    ProductRowUpdate,
};
use super::value_objects::ProductField;

/// Storage port for products.
///
/// Single-row lookups, updates and deletes report a missing id as
/// [`RepositoryError::NotFound`]; list and bulk operations never do.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self, filter: &GetProductsParams) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn create(&self, params: &CreateProductParams) -> Result<Product, RepositoryError>;
    async fn partial_update(
        &self,
        params: &PartialUpdateProductParams,
    ) -> Result<Product, RepositoryError>;
    /// Only the id of the removed row is read back.
    async fn delete(&self, id: Uuid) -> Result<Uuid, RepositoryError>;
    async fn bulk_create(&self, rows: &[NewProductRow]) -> Result<Vec<Product>, RepositoryError>;
    /// Rows whose id is unknown are silently absent from the result.
    async fn bulk_update(
        &self,
        fields: &[ProductField],
        rows: &[ProductRowUpdate],
    ) -> Result<Vec<Product>, RepositoryError>;
}
