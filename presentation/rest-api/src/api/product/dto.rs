use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::product::model::{
    CreateProductParams, NewProductRow, Product, ProductRowUpdate,
};

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Product title (cannot be empty)
    pub title: String,
}

impl From<CreateProductRequest> for CreateProductParams {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            name: request.name,
            title: request.title,
        }
    }
}

impl From<CreateProductRequest> for NewProductRow {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            name: request.name,
            title: request.title,
        }
    }
}

/// Partial update body; omitted fields are left untouched.
#[derive(Debug, Clone, Object)]
pub struct PartialUpdateProductRequest {
    /// New product name
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// New product title
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct BulkUpdateProductRequest {
    /// Identifier of the product to update
    pub id: Uuid,
    /// New product name
    pub name: String,
    /// New product title
    pub title: String,
}

impl From<BulkUpdateProductRequest> for ProductRowUpdate {
    fn from(request: BulkUpdateProductRequest) -> Self {
        Self {
            id: request.id,
            name: request.name,
            title: request.title,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Product title
    pub title: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Deletion timestamp, absent for live products
    #[oai(skip_serializing_if_is_none)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            title: product.title,
            created_at: product.created_at,
            updated_at: product.updated_at,
            deleted_at: product.deleted_at,
        }
    }
}

/// Result of a delete: only the identifier is returned.
#[derive(Debug, Clone, Object)]
pub struct DeletedProductResponse {
    /// Identifier of the removed product
    pub id: Uuid,
}
