use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::{
    document_loaders::{
        metadata_keys, source_of, CsvTableSource, Loader, LoaderError, Table, TableSource,
        CSV_DOCUMENT_TYPE,
    },
    schemas::Document,
};

use super::{group_by, GroupRenderer, RosterOptions};

/// Result of a roster build, keeping apart the cases that `build` folds into
/// an empty list.
#[derive(Debug)]
pub enum RosterOutcome {
    Documents(Vec<Document>),
    /// The file loaded but produced no department groups.
    Empty,
    Failed(LoaderError),
}

impl RosterOutcome {
    pub fn into_documents(self) -> Vec<Document> {
        match self {
            RosterOutcome::Documents(documents) => documents,
            RosterOutcome::Empty | RosterOutcome::Failed(_) => Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RosterOutcome::Failed(_))
    }
}

/// Builds one search-padded document per department from an employee roster.
///
/// Without a department column the whole table becomes a single plain-text
/// document instead.
pub struct RosterLoader {
    source: Box<dyn TableSource>,
    options: RosterOptions,
}

impl Default for RosterLoader {
    fn default() -> Self {
        Self::new(CsvTableSource::default())
    }
}

impl RosterLoader {
    pub fn new(source: impl Into<Box<dyn TableSource>>) -> Self {
        Self {
            source: source.into(),
            options: RosterOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RosterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RosterOptions {
        &self.options
    }

    /// Builds the roster documents. Any load or render failure yields an
    /// empty list; use [`RosterLoader::build_outcome`] to tell the cases apart.
    pub fn build(&self, path: &Path) -> Vec<Document> {
        self.build_outcome(path).into_documents()
    }

    pub fn build_outcome(&self, path: &Path) -> RosterOutcome {
        match self.try_build(path) {
            Ok(documents) if documents.is_empty() => RosterOutcome::Empty,
            Ok(documents) => RosterOutcome::Documents(documents),
            Err(e) => {
                log::warn!("Roster load failed for {}: {}", path.display(), e);
                RosterOutcome::Failed(e)
            }
        }
    }

    fn try_build(&self, path: &Path) -> Result<Vec<Document>, LoaderError> {
        let table = self.source.read_table(path)?;
        self.render_table(&table, &source_of(path))
    }

    /// Renders an already loaded table. `source` becomes the `source` metadata.
    pub fn render_table(&self, table: &Table, source: &str) -> Result<Vec<Document>, LoaderError> {
        let Some(column) = table.column_index(&self.options.columns.department) else {
            log::debug!(
                "No {} column in {source}, loading the table as one document",
                self.options.columns.department
            );
            return Ok(vec![plain_document(table, source)]);
        };

        let renderer = GroupRenderer::new(table, &self.options);
        let groups = group_by(table, column);

        let mut documents = Vec::with_capacity(groups.len());
        for group in &groups {
            let metadata = HashMap::from([
                (metadata_keys::SOURCE.to_string(), Value::from(source)),
                (metadata_keys::DEPARTMENT.to_string(), Value::from(group.department)),
                (
                    metadata_keys::EMPLOYEE_COUNT.to_string(),
                    Value::from(group.members.len()),
                ),
                (metadata_keys::TYPE.to_string(), Value::from(CSV_DOCUMENT_TYPE)),
            ]);

            documents.push(Document::new(renderer.render(group)?).with_metadata(metadata));
        }

        log::debug!(
            "Built {} department documents from {} rows of {source}",
            documents.len(),
            table.len()
        );

        Ok(documents)
    }
}

impl Loader for RosterLoader {
    fn load(&self, path: &Path) -> Result<Vec<Document>, LoaderError> {
        Ok(self.build(path))
    }
}

/// The whole table as one document tagged with only `source` and `type`.
pub(crate) fn plain_document(table: &Table, source: &str) -> Document {
    Document::new(table.to_plain_string())
        .with_metadata_entry(metadata_keys::SOURCE, source)
        .with_metadata_entry(metadata_keys::TYPE, CSV_DOCUMENT_TYPE)
}
