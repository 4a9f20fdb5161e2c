use std::collections::HashMap;

pub type RawRow = HashMap<String, String>;

/// Unvalidated tabular input: header names in declaration order plus one
/// header-keyed map per data row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<RawRow>) -> Self {
        Self { headers, rows }
    }

    /// Builds a table from positional cells. Short rows lack the trailing keys,
    /// extra cells past the header list are dropped, and a repeated header keeps
    /// its first column.
    pub fn from_columns(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|cells| {
                let mut row = RawRow::with_capacity(headers.len());
                for (header, value) in headers.iter().zip(cells) {
                    row.entry(header.clone()).or_insert(value);
                }
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
