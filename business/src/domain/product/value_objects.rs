use std::fmt;

/// Product columns that a bulk update may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Title,
}

impl ProductField {
    /// Every updatable field, in column order.
    pub const ALL: [ProductField; 2] = [ProductField::Name, ProductField::Title];
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductField::Name => write!(f, "name"),
            ProductField::Title => write!(f, "title"),
        }
    }
}

/// Renders a field list as `name, title` for log lines.
pub fn describe_fields(fields: &[ProductField]) -> String {
    fields
        .iter()
        .map(ProductField::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_as_column_name() {
        assert_eq!(ProductField::Title.to_string(), "title");
    }

    #[test]
    fn should_describe_every_updatable_field() {
        assert_eq!(describe_fields(&ProductField::ALL), "name, title");
    }
}
