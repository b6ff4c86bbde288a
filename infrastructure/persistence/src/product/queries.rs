//! Dynamic SQL for the `products` table.
//!
//! Every builder returns a [`StatementBuilder`] carrying both the SQL text
//! (with `$n` placeholders) and the bound arguments, ready for
//! `build_query_as`/`build_query_scalar`.

use uuid::Uuid;

use business::domain::product::model::{GetProductsParams, NewProductRow, ProductRowUpdate};
use business::domain::product::value_objects::ProductField;

use super::fields::{ID, NAME, TITLE, column, row_value};
use crate::sql::{
    FieldValue, QueryBuildError, SparseFields, StatementBuilder, check_bind_count, push_value,
    push_where_and,
};

pub const TABLE: &str = "products";
pub const PRODUCT_COLUMNS: &str = "id, name, title, created_at, updated_at, deleted_at";
pub const RETURNING_PRODUCT: &str =
    " RETURNING id, name, title, created_at, updated_at, deleted_at";
pub const RETURNING_ID: &str = " RETURNING id";
const ORDER_BY: &str = " ORDER BY created_at DESC, id";
const TOUCH_UPDATED_AT: &str = "updated_at = now()";

/// `SELECT` a page of products, filtered by the present equality filters.
pub fn select_products(filter: &GetProductsParams) -> StatementBuilder {
    let mut builder = StatementBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM {TABLE}"));
    push_where_and(&mut builder, filter.sparse_fields());
    builder.push(ORDER_BY);
    builder.push(" LIMIT ");
    builder.push_bind(filter.limit);
    builder.push(" OFFSET ");
    builder.push_bind(filter.offset);
    builder
}

pub fn select_product(id: Uuid) -> StatementBuilder {
    let mut builder = StatementBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM {TABLE}"));
    push_where_and(&mut builder, vec![(ID, FieldValue::Uuid(id))]);
    builder
}

/// `INSERT` exactly the present fields, letting the store default the rest.
pub fn insert_product(params: &impl SparseFields) -> Result<StatementBuilder, QueryBuildError> {
    let fields = params.sparse_fields();
    if fields.is_empty() {
        return Err(QueryBuildError::NoColumns { statement: "insert" });
    }

    let columns = fields
        .iter()
        .map(|(column, _)| *column)
        .collect::<Vec<_>>()
        .join(", ");

    let mut builder = StatementBuilder::new(format!("INSERT INTO {TABLE} ({columns}) VALUES ("));
    for (index, (_, value)) in fields.into_iter().enumerate() {
        if index > 0 {
            builder.push(", ");
        }
        push_value(&mut builder, value);
    }
    builder.push(")");
    builder.push(RETURNING_PRODUCT);
    Ok(builder)
}

/// `UPDATE` the present fields of one row.
///
/// Without any present field the statement degrades to a no-op assignment so
/// that a missing id still yields no row, while `updated_at` stays untouched.
pub fn update_product(id: Uuid, params: &impl SparseFields) -> StatementBuilder {
    let fields = params.sparse_fields();
    let mut builder = StatementBuilder::new(format!("UPDATE {TABLE} SET "));

    if fields.is_empty() {
        builder.push(format!("{NAME} = {NAME}"));
    } else {
        for (column, value) in fields {
            builder.push(column);
            builder.push(" = ");
            push_value(&mut builder, value);
            builder.push(", ");
        }
        builder.push(TOUCH_UPDATED_AT);
    }

    push_where_and(&mut builder, vec![(ID, FieldValue::Uuid(id))]);
    builder.push(RETURNING_PRODUCT);
    builder
}

pub fn delete_product(id: Uuid) -> StatementBuilder {
    let mut builder = StatementBuilder::new(format!("DELETE FROM {TABLE}"));
    push_where_and(&mut builder, vec![(ID, FieldValue::Uuid(id))]);
    builder.push(RETURNING_ID);
    builder
}

/// One multi-row `INSERT ... VALUES (...), (...)` for the whole batch.
pub fn bulk_insert_products(rows: &[NewProductRow]) -> Result<StatementBuilder, QueryBuildError> {
    if rows.is_empty() {
        return Err(QueryBuildError::EmptyBatch {
            statement: "bulk insert",
        });
    }
    // name and title per row
    check_bind_count("bulk insert", rows.len() * 2)?;

    let mut builder = StatementBuilder::new(format!("INSERT INTO {TABLE} ({NAME}, {TITLE}) "));
    builder.push_values(rows.iter().cloned(), |mut values, row| {
        values.push_bind(row.name).push_bind(row.title);
    });
    builder.push(RETURNING_PRODUCT);
    Ok(builder)
}

/// One `UPDATE` for the whole batch, each field set through
/// `CASE id WHEN $id THEN $value ... ELSE field END`.
///
/// Only ids present in the batch are touched. Repeated fields are written once.
pub fn bulk_update_products(
    fields: &[ProductField],
    rows: &[ProductRowUpdate],
) -> Result<StatementBuilder, QueryBuildError> {
    if rows.is_empty() {
        return Err(QueryBuildError::EmptyBatch {
            statement: "bulk update",
        });
    }

    let mut unique_fields: Vec<ProductField> = Vec::with_capacity(fields.len());
    for field in fields {
        if !unique_fields.contains(field) {
            unique_fields.push(*field);
        }
    }
    if unique_fields.is_empty() {
        return Err(QueryBuildError::NoColumns {
            statement: "bulk update",
        });
    }
    // id and value per field per row, plus the id in the IN list
    check_bind_count("bulk update", rows.len() * (unique_fields.len() * 2 + 1))?;

    let mut builder = StatementBuilder::new(format!("UPDATE {TABLE} SET "));
    for field in unique_fields {
        let target = column(field);
        builder.push(format!("{target} = CASE {ID}"));
        for row in rows {
            builder.push(" WHEN ");
            builder.push_bind(row.id);
            builder.push(" THEN ");
            push_value(&mut builder, row_value(row, field));
        }
        builder.push(format!(" ELSE {target} END, "));
    }
    builder.push(TOUCH_UPDATED_AT);

    builder.push(format!(" WHERE {ID} IN ("));
    let mut ids = builder.separated(", ");
    for row in rows {
        ids.push_bind(row.id);
    }
    ids.push_unseparated(")");
    builder.push(RETURNING_PRODUCT);
    Ok(builder)
}
