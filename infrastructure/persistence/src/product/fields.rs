use business::domain::product::model::{
    CreateProductParams, GetProductParams, GetProductsParams, PartialUpdateProductParams,
    ProductRowUpdate,
};
use business::domain::product::value_objects::ProductField;

use crate::sql::{FieldValue, SparseFields};

pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const TITLE: &str = "title";

pub fn column(field: ProductField) -> &'static str {
    match field {
        ProductField::Name => NAME,
        ProductField::Title => TITLE,
    }
}

pub fn row_value(row: &ProductRowUpdate, field: ProductField) -> FieldValue {
    match field {
        ProductField::Name => FieldValue::Text(row.name.clone()),
        ProductField::Title => FieldValue::Text(row.title.clone()),
    }
}

fn optional_text(
    fields: &mut Vec<(&'static str, FieldValue)>,
    column: &'static str,
    value: &Option<String>,
) {
    if let Some(value) = value {
        fields.push((column, FieldValue::Text(value.clone())));
    }
}

impl SparseFields for CreateProductParams {
    fn sparse_fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            (NAME, FieldValue::Text(self.name.clone())),
            (TITLE, FieldValue::Text(self.title.clone())),
        ]
    }
}

impl SparseFields for GetProductParams {
    fn sparse_fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![(ID, FieldValue::Uuid(self.id))]
    }
}

/// Only the equality filters; the paging window is not a column.
impl SparseFields for GetProductsParams {
    fn sparse_fields(&self) -> Vec<(&'static str, FieldValue)> {
        let mut fields = Vec::new();
        optional_text(&mut fields, NAME, &self.name);
        optional_text(&mut fields, TITLE, &self.title);
        fields
    }
}

/// The SET candidates; `id` is the row selector, not a field to write.
impl SparseFields for PartialUpdateProductParams {
    fn sparse_fields(&self) -> Vec<(&'static str, FieldValue)> {
        let mut fields = Vec::new();
        optional_text(&mut fields, NAME, &self.name);
        optional_text(&mut fields, TITLE, &self.title);
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn should_omit_absent_filters() {
        let filter = GetProductsParams {
            name: None,
            title: Some("Widget".to_string()),
            ..GetProductsParams::default()
        };

        assert_eq!(
            filter.sparse_fields(),
            vec![(TITLE, FieldValue::Text("Widget".to_string()))]
        );
    }

    #[test]
    fn should_return_nothing_when_no_filter_is_set() {
        assert!(GetProductsParams::default().sparse_fields().is_empty());
    }

    #[test]
    fn should_keep_present_update_fields_with_exact_values() {
        let params = PartialUpdateProductParams {
            id: Uuid::new_v4(),
            name: Some("sku-1".to_string()),
            title: Some("Widget".to_string()),
        };

        assert_eq!(
            params.sparse_fields(),
            vec![
                (NAME, FieldValue::Text("sku-1".to_string())),
                (TITLE, FieldValue::Text("Widget".to_string())),
            ]
        );
    }

    #[test]
    fn should_report_explicitly_empty_value_as_present() {
        let params = PartialUpdateProductParams {
            id: Uuid::new_v4(),
            name: None,
            title: Some(String::new()),
        };

        assert_eq!(
            params.sparse_fields(),
            vec![(TITLE, FieldValue::Text(String::new()))]
        );
    }

    #[test]
    fn should_never_expose_update_id_as_field() {
        let params = PartialUpdateProductParams {
            id: Uuid::new_v4(),
            name: None,
            title: None,
        };

        assert!(params.sparse_fields().is_empty());
    }

    #[test]
    fn should_key_lookup_by_id_column() {
        let id = Uuid::new_v4();
        assert_eq!(
            GetProductParams { id }.sparse_fields(),
            vec![(ID, FieldValue::Uuid(id))]
        );
    }

    #[test]
    fn should_map_fields_to_columns() {
        assert_eq!(column(ProductField::Name), "name");
        assert_eq!(column(ProductField::Title), "title");
    }
}
