use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use crate::domain::entities::table::RawTable;
use crate::usecase::ports::source::{SourceError, TableSource};

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// Reads the first worksheet; its first row holds the headers.
pub fn read_workbook_table(workbook_path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(workbook_path)
        .with_context(|| format!("failed to open workbook: {}", workbook_path.display()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow!("workbook has no sheets: {}", workbook_path.display()))?
        .with_context(|| format!("failed to read first sheet: {}", workbook_path.display()))?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(RawTable::default());
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell_to_string(cell).trim().to_string())
        .collect();

    let data: Vec<Vec<String>> = rows
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>())
        .filter(|row| row.iter().any(|value| !value.is_empty()))
        .collect();

    Ok(RawTable::from_columns(headers, data))
}

#[derive(Debug, Clone)]
pub struct WorkbookSource {
    pub path: PathBuf,
}

impl WorkbookSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TableSource for WorkbookSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<RawTable, SourceError> {
        if !self.path.is_file() {
            return Err(SourceError::NotFound(self.describe()));
        }
        read_workbook_table(&self.path).map_err(|err| SourceError::Message(format!("{err:#}")))
    }
}
