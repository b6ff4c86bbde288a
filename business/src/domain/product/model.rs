use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;

/// Default page size for product listings.
pub const DEFAULT_LIMIT: i64 = 50;
/// Largest page size a listing may request.
pub const MAX_LIMIT: i64 = 50;
/// Largest number of rows a single bulk create or bulk update may carry.
pub const MAX_BATCH: usize = 1000;

fn validate_batch_size(len: usize) -> Result<(), ProductError> {
    match len {
        0 => Err(ProductError::EmptyBatch),
        n if n > MAX_BATCH => Err(ProductError::BatchTooLarge { max: MAX_BATCH }),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        title: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            title,
            created_at,
            updated_at,
            deleted_at,
        }
    }
}

fn validate_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    Ok(())
}

fn validate_title(title: &str) -> Result<(), ProductError> {
    if title.trim().is_empty() {
        return Err(ProductError::TitleEmpty);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductParams {
    pub name: String,
    pub title: String,
}

impl CreateProductParams {
    pub fn validate(&self) -> Result<(), ProductError> {
        validate_name(&self.name)?;
        validate_title(&self.title)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GetProductParams {
    pub id: Uuid,
}

/// Listing window and optional equality filters.
///
/// Build it with [`GetProductsParams::from_query`] so the paging policy is
/// applied the same way everywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct GetProductsParams {
    pub limit: i64,
    pub offset: i64,
    pub name: Option<String>,
    pub title: Option<String>,
}

impl Default for GetProductsParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
            name: None,
            title: None,
        }
    }
}

impl GetProductsParams {
    /// Applies the listing policy to raw query-string values.
    ///
    /// - `limit`: absent or unparsable -> 50; `<= 0` or `> 50` -> 50.
    /// - `offset`: absent or unparsable -> 0; negative values pass through.
    /// - empty `name`/`title` filters are dropped.
    pub fn from_query(
        limit: Option<&str>,
        offset: Option<&str>,
        name: Option<String>,
        title: Option<String>,
    ) -> Self {
        let limit = limit
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|limit| *limit > 0 && *limit <= MAX_LIMIT)
            .unwrap_or(DEFAULT_LIMIT);
        let offset = offset
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(0);

        Self {
            limit,
            offset,
            name: name.filter(|n| !n.is_empty()),
            title: title.filter(|t| !t.is_empty()),
        }
    }
}

/// Sparse update: `None` leaves the column untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdateProductParams {
    pub id: Uuid,
    pub name: Option<String>,
    pub title: Option<String>,
}

impl PartialUpdateProductParams {
    pub fn validate(&self) -> Result<(), ProductError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        Ok(())
    }

    pub fn has_changes(&self) -> bool {
        self.name.is_some() || self.title.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeleteProductParams {
    pub id: Uuid,
}

/// One row of a bulk insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductRow {
    pub name: String,
    pub title: String,
}

/// One row of a bulk update, carrying a value for every updatable field.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRowUpdate {
    pub id: Uuid,
    pub name: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BulkCreateProductsParams {
    pub items: Vec<NewProductRow>,
}

impl BulkCreateProductsParams {
    pub fn validate(&self) -> Result<(), ProductError> {
        validate_batch_size(self.items.len())?;
        for item in &self.items {
            validate_name(&item.name)?;
            validate_title(&item.title)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BulkUpdateProductsParams {
    pub items: Vec<ProductRowUpdate>,
}

impl BulkUpdateProductsParams {
    pub fn validate(&self) -> Result<(), ProductError> {
        validate_batch_size(self.items.len())?;
        for item in &self.items {
            validate_name(&item.name)?;
            validate_title(&item.title)?;
        }
        Ok(())
    }
}
