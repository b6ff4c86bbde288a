/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The id predicate of a single-row statement matched nothing.
    #[error("repository.not_found")]
    NotFound,
    /// The statement could not be assembled from the given input.
    #[error("repository.query_build: {0}")]
    QueryBuild(String),
    #[error("repository.database_error: {0}")]
    DatabaseError(String),
    #[error("repository.timeout")]
    Timeout,
}

impl RepositoryError {
    pub fn query_build(context: impl Into<String>) -> Self {
        RepositoryError::QueryBuild(context.into())
    }
    pub fn database_error(context: impl Into<String>) -> Self {
        RepositoryError::DatabaseError(context.into())
    }
}
