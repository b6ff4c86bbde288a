//! Building blocks shared by the dynamic statement builders.

use sqlx::{Postgres, QueryBuilder};
use thiserror::Error;
use uuid::Uuid;

use business::domain::errors::RepositoryError;

/// A statement under construction, owning every bound argument.
pub type StatementBuilder = QueryBuilder<'static, Postgres>;

/// Postgres encodes the bind parameter count of a statement as a u16.
pub const MAX_BIND_PARAMETERS: usize = u16::MAX as usize;

/// A value extracted from a parameter struct, ready to be bound.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Uuid(Uuid),
    Text(String),
}

/// Column-name keyed view over the fields of a parameter struct that are
/// actually present.
///
/// Presence is explicit (`Option<T>` or a required field), so a value that
/// happens to be empty is still reported.
pub trait SparseFields {
    fn sparse_fields(&self) -> Vec<(&'static str, FieldValue)>;
}

#[derive(Debug, Error, PartialEq)]
pub enum QueryBuildError {
    #[error("query_build.no_columns: {statement}")]
    NoColumns { statement: &'static str },
    #[error("query_build.empty_batch: {statement}")]
    EmptyBatch { statement: &'static str },
    #[error("query_build.too_many_parameters: {statement} needs {count}")]
    TooManyParameters {
        statement: &'static str,
        count: usize,
    },
}

/// Fails when a statement would bind more parameters than the protocol allows.
pub fn check_bind_count(statement: &'static str, count: usize) -> Result<(), QueryBuildError> {
    if count > MAX_BIND_PARAMETERS {
        return Err(QueryBuildError::TooManyParameters { statement, count });
    }
    Ok(())
}

impl From<QueryBuildError> for RepositoryError {
    fn from(error: QueryBuildError) -> Self {
        RepositoryError::query_build(error.to_string())
    }
}

pub fn push_value(builder: &mut StatementBuilder, value: FieldValue) {
    match value {
        FieldValue::Uuid(value) => builder.push_bind(value),
        FieldValue::Text(value) => builder.push_bind(value),
    };
}

/// Appends `WHERE a = $n AND b = $m` for every present field. Nothing is
/// appended when `fields` is empty.
pub fn push_where_and(builder: &mut StatementBuilder, fields: Vec<(&'static str, FieldValue)>) {
    for (index, (column, value)) in fields.into_iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " AND " });
        builder.push(column);
        builder.push(" = ");
        push_value(builder, value);
    }
}
