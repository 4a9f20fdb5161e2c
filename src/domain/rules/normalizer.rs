use crate::domain::entities::product::{FieldMap, ProductRecord};
use crate::domain::entities::table::{RawRow, RawTable};

fn cell(row: &RawRow, header: &str) -> String {
    row.get(header).cloned().unwrap_or_default()
}

pub fn normalize_row(row: &RawRow, map: &FieldMap) -> ProductRecord {
    ProductRecord {
        code: cell(row, &map.code),
        description: cell(row, &map.description),
        warehouse: cell(row, &map.warehouse),
        warehouse_desc: cell(row, &map.warehouse_desc),
        classification: cell(row, &map.classification),
        stock: cell(row, &map.stock),
        price: cell(row, &map.price),
    }
}

/// One record per raw row, in input order. Values are copied verbatim.
pub fn normalize_rows(table: &RawTable, map: &FieldMap) -> Vec<ProductRecord> {
    table
        .rows
        .iter()
        .map(|row| normalize_row(row, map))
        .collect()
}
