use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use encoding_rs::WINDOWS_1252;

use crate::domain::entities::table::RawTable;
use crate::usecase::ports::source::{SourceError, TableSource};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Inventory exports come either as UTF-8 or as ISO-8859-1; anything that is
/// not valid UTF-8 is read as Windows-1252, which covers Latin-1 text.
pub fn decode_export(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            log::debug!("csv export is not utf-8; decoding as windows-1252");
            let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            text
        }
    }
}

pub fn parse_csv_text(text: &str) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .context("failed to read headers from csv")?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.iter().all(|header| header.is_empty()) {
        return Ok(RawTable::default());
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse csv record")?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable::from_columns(headers, rows))
}

pub fn read_csv_table(csv_path: &Path) -> Result<RawTable> {
    let bytes = fs::read(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    parse_csv_text(&decode_export(&bytes))
        .with_context(|| format!("failed to read csv: {}", csv_path.display()))
}

#[derive(Debug, Clone)]
pub struct CsvSource {
    pub path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TableSource for CsvSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<RawTable, SourceError> {
        if !self.path.is_file() {
            return Err(SourceError::NotFound(self.describe()));
        }
        read_csv_table(&self.path).map_err(|err| SourceError::Message(format!("{err:#}")))
    }
}
