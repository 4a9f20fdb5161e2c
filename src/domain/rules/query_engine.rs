use crate::domain::entities::filter::{FilterState, QueryResult};
use crate::domain::entities::product::ProductRecord;
use crate::domain::rules::numeric::parse_leading_float;

/// Compiled form of a [`FilterState`]: the query folded once per evaluation.
struct Predicate<'f> {
    query: String,
    state: &'f FilterState,
}

impl<'f> Predicate<'f> {
    fn new(state: &'f FilterState) -> Self {
        Self {
            query: state.search_query.trim().to_lowercase(),
            state,
        }
    }

    fn matches_text(&self, record: &ProductRecord) -> bool {
        self.query.is_empty()
            || record.code.to_lowercase().contains(&self.query)
            || record.description.to_lowercase().contains(&self.query)
            || record.warehouse_desc.to_lowercase().contains(&self.query)
    }

    fn matches_warehouse(&self, record: &ProductRecord) -> bool {
        self.state.selected_warehouses.is_empty()
            || self
                .state
                .selected_warehouses
                .contains(&record.warehouse_label())
    }

    fn matches_classification(&self, record: &ProductRecord) -> bool {
        self.state.selected_classification.is_empty()
            || record.classification == self.state.selected_classification
    }

    fn matches(&self, record: &ProductRecord) -> bool {
        self.matches_text(record)
            && self.matches_warehouse(record)
            && self.matches_classification(record)
    }
}

/// Records satisfying every active filter, in their original order.
pub fn filter_records<'a>(records: &'a [ProductRecord], state: &FilterState) -> Vec<&'a ProductRecord> {
    let predicate = Predicate::new(state);
    records
        .iter()
        .filter(|record| predicate.matches(record))
        .collect()
}

pub fn total_stock(records: &[&ProductRecord]) -> f64 {
    records
        .iter()
        .map(|record| parse_leading_float(&record.stock))
        .sum()
}

pub fn run_query<'a>(records: &'a [ProductRecord], state: &FilterState) -> QueryResult<'a> {
    let records = filter_records(records, state);
    let total_stock = total_stock(&records);
    QueryResult {
        records,
        total_stock,
    }
}
