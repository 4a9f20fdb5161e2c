use std::collections::BTreeSet;

use crate::domain::entities::filter::FilterOptions;
use crate::domain::entities::product::ProductRecord;

pub fn extract_options(records: &[ProductRecord]) -> FilterOptions {
    let mut warehouses = BTreeSet::new();
    let mut classifications = BTreeSet::new();

    for record in records {
        if !record.warehouse.is_empty() {
            warehouses.insert(record.warehouse_label());
        }
        if !record.classification.is_empty() {
            classifications.insert(record.classification.clone());
        }
    }

    FilterOptions {
        warehouses: warehouses.into_iter().collect(),
        classifications: classifications.into_iter().collect(),
    }
}

/// Narrows a warehouse option list to the entries containing `term`,
/// ignoring case. An empty term keeps every option.
pub fn search_warehouse_options<'a>(options: &'a [String], term: &str) -> Vec<&'a str> {
    let term = term.to_lowercase();
    options
        .iter()
        .map(String::as_str)
        .filter(|option| term.is_empty() || option.to_lowercase().contains(&term))
        .collect()
}
