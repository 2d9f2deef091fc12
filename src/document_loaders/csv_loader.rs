use std::path::Path;

use csv::ReaderBuilder;
use serde_json::Value;

use crate::schemas::Document;

use super::{decode_utf8, metadata_keys, source_of, Loader, LoaderError};

/// Row-per-document CSV loader.
///
/// Each data row becomes `header: value` lines; metadata carries the source
/// path and the zero-based row number.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    delimiter: u8,
    columns: Vec<String>,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            columns: Vec::new(),
        }
    }
}

impl CsvLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Only these columns end up in the page content. Empty means all.
    pub fn with_columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn load_str(&self, content: &str, source: &str) -> Result<Vec<Document>, LoaderError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = reader.headers()?.clone();
        let mut documents = Vec::new();

        for (row, result) in reader.records().enumerate() {
            let record = result?;

            // Short rows read as empty trailing values.
            let page_content = headers
                .iter()
                .enumerate()
                .map(|(i, header)| (header.trim(), record.get(i).unwrap_or("").trim()))
                .filter(|(header, _)| {
                    self.columns.is_empty() || self.columns.iter().any(|c| c == header)
                })
                .map(|(header, value)| format!("{header}: {value}"))
                .collect::<Vec<_>>()
                .join("\n");

            documents.push(
                Document::new(page_content)
                    .with_metadata_entry(metadata_keys::SOURCE, source)
                    .with_metadata_entry(metadata_keys::ROW, Value::from(row)),
            );
        }

        Ok(documents)
    }
}

impl Loader for CsvLoader {
    fn load(&self, path: &Path) -> Result<Vec<Document>, LoaderError> {
        let bytes = std::fs::read(path)?;
        self.load_str(&decode_utf8(&bytes)?, &source_of(path))
    }
}
