use crate::ast::{Field, OrderBy, SortOrder};

pub fn asc(field: impl Into<Field>) -> OrderBy {
    OrderBy::new(field, Some(SortOrder::Asc))
}

pub fn desc(field: impl Into<Field>) -> OrderBy {
    OrderBy::new(field, Some(SortOrder::Desc))
}
