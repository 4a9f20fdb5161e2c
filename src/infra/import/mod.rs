pub mod csv;
pub mod xlsx;

use std::path::Path;

use crate::usecase::ports::source::TableSource;

const WORKBOOK_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

/// Chooses a reader by file extension; anything that is not a workbook is read
/// as CSV.
pub fn open_table_source(path: &Path) -> Box<dyn TableSource> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    if WORKBOOK_EXTENSIONS.contains(&ext.as_str()) {
        Box::new(xlsx::WorkbookSource::new(path))
    } else {
        Box::new(csv::CsvSource::new(path))
    }
}
