use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.title_empty")]
    TitleEmpty,
    #[error("product.empty_batch")]
    EmptyBatch,
    #[error("product.batch_too_large")]
    BatchTooLarge { max: usize },
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[source] RepositoryError),
}

/// `NotFound` is lifted to the product-level sentinel so callers can match on
/// it after any number of `?` hops; everything else stays wrapped.
impl From<RepositoryError> for ProductError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}
