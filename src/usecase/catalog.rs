use std::sync::Arc;

use crate::domain::entities::filter::{FilterOptions, FilterState, QueryResult};
use crate::domain::entities::product::{FieldMap, ProductRecord};
use crate::domain::entities::table::RawTable;
use crate::domain::rules::normalizer::normalize_rows;
use crate::domain::rules::option_extractor::extract_options;
use crate::domain::rules::query_engine::run_query;
use crate::domain::rules::schema_resolver::{default_field_map, resolve_field_map};

/// Immutable snapshot of one ingested dataset. Reloading builds a new catalog
/// instead of touching this one.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    field_map: FieldMap,
    records: Arc<[ProductRecord]>,
    options: FilterOptions,
}

impl Catalog {
    pub fn empty() -> Self {
        Self {
            field_map: default_field_map(),
            records: Arc::from(Vec::new()),
            options: FilterOptions::default(),
        }
    }

    pub fn from_table(table: &RawTable) -> Self {
        let field_map = resolve_field_map(&table.headers);
        let records = normalize_rows(table, &field_map);
        Self::from_records(field_map, records)
    }

    pub fn from_records(field_map: FieldMap, records: Vec<ProductRecord>) -> Self {
        let options = extract_options(&records);
        Self {
            field_map,
            records: Arc::from(records),
            options,
        }
    }

    pub fn field_map(&self) -> &FieldMap {
        &self.field_map
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn query(&self, state: &FilterState) -> QueryResult<'_> {
        run_query(&self.records, state)
    }

    pub fn find_by_code(&self, code: &str) -> Option<&ProductRecord> {
        let code = code.trim();
        self.records.iter().find(|record| record.code.trim() == code)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}
