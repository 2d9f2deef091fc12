use std::path::Path;

use crate::schemas::Document;

use super::{plain_document, source_of, CsvTableSource, Loader, LoaderError, TableSource};

/// Minimal CSV loader: the whole table rendered as plain text in one document.
///
/// Used when no row-per-document CSV loader is configured. Like the roster
/// builder it never fails; an unreadable file gives no documents.
pub struct TableLoader {
    source: Box<dyn TableSource>,
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::new(CsvTableSource::default())
    }
}

impl TableLoader {
    pub fn new(source: impl Into<Box<dyn TableSource>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl Loader for TableLoader {
    fn load(&self, path: &Path) -> Result<Vec<Document>, LoaderError> {
        match self.source.read_table(path) {
            Ok(table) => Ok(vec![plain_document(&table, &source_of(path))]),
            Err(e) => {
                log::warn!("Table load failed for {}: {}", path.display(), e);
                Ok(Vec::new())
            }
        }
    }
}
