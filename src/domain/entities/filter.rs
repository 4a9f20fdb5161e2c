use std::collections::BTreeSet;

use crate::domain::entities::product::ProductRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_query: String,
    /// Warehouse labels; empty means every warehouse.
    pub selected_warehouses: BTreeSet<String>,
    /// Empty means every classification.
    pub selected_classification: String,
}

impl FilterState {
    pub fn toggle_warehouse(&mut self, label: &str) {
        if !self.selected_warehouses.remove(label) {
            self.selected_warehouses.insert(label.to_string());
        }
    }

    pub fn select_all_warehouses(&mut self, options: &[String]) {
        self.selected_warehouses = options.iter().cloned().collect();
    }

    pub fn clear_warehouses(&mut self) {
        self.selected_warehouses.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub warehouses: Vec<String>,
    pub classifications: Vec<String>,
}

/// Filtered subsequence of a record set together with its aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a> {
    pub records: Vec<&'a ProductRecord>,
    pub total_stock: f64,
}

impl<'a> QueryResult<'a> {
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capped(&self, cap: usize) -> CappedView<'_, 'a> {
        let shown = &self.records[..self.records.len().min(cap)];
        CappedView {
            shown,
            total: self.records.len(),
        }
    }
}

/// First records of a result, kept alongside the true match count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CappedView<'r, 'a> {
    pub shown: &'r [&'a ProductRecord],
    pub total: usize,
}

impl CappedView<'_, '_> {
    pub fn len(&self) -> usize {
        self.shown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    pub fn is_truncated(&self) -> bool {
        self.shown.len() < self.total
    }
}
