use std::path::Path;

use crate::schemas::Document;

use super::LoaderError;

/// Turns one file into documents for the embedding pipeline.
///
/// Loading is synchronous and reads the whole file before returning.
pub trait Loader: Send + Sync {
    fn load(&self, path: &Path) -> Result<Vec<Document>, LoaderError>;
}

impl<L> From<L> for Box<dyn Loader>
where
    L: Loader + 'static,
{
    fn from(loader: L) -> Self {
        Box::new(loader)
    }
}

/// The `source` metadata value for documents read from `path`.
pub(crate) fn source_of(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Metadata keys written by the loaders in this crate.
pub mod metadata_keys {
    pub const SOURCE: &str = "source";
    pub const TYPE: &str = "type";
    pub const ROW: &str = "row";
    pub const DEPARTMENT: &str = "department";
    pub const EMPLOYEE_COUNT: &str = "employee_count";
}

/// Document type tag for everything loaded from a delimited table.
pub const CSV_DOCUMENT_TYPE: &str = "csv";
