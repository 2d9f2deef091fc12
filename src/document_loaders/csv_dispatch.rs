use std::path::Path;

use crate::schemas::Document;

use super::{source_of, CsvLoader, Loader, LoaderError, RosterLoader, TableLoader};

/// File name that routes a CSV file to the roster builder.
pub const ROSTER_FILE_NAME: &str = "社員名簿.csv";

/// Picks a CSV loader by file name.
///
/// Paths containing [`ROSTER_FILE_NAME`] go to the roster builder. Everything
/// else goes to the generic loader ([`CsvLoader`] by default), or to
/// [`TableLoader`] when the dispatch is built with [`CsvDispatch::without_generic`].
pub struct CsvDispatch {
    roster_file_name: String,
    roster: RosterLoader,
    generic: Option<Box<dyn Loader>>,
    fallback: TableLoader,
}

impl Default for CsvDispatch {
    fn default() -> Self {
        Self {
            roster_file_name: ROSTER_FILE_NAME.into(),
            roster: RosterLoader::default(),
            generic: Some(Box::new(CsvLoader::default())),
            fallback: TableLoader::default(),
        }
    }
}

impl CsvDispatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dispatch with no generic loader: non-roster files get the plain
    /// table rendering of [`TableLoader`].
    pub fn without_generic() -> Self {
        Self {
            generic: None,
            ..Self::default()
        }
    }

    pub fn with_roster_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.roster_file_name = file_name.into();
        self
    }

    pub fn with_roster(mut self, roster: RosterLoader) -> Self {
        self.roster = roster;
        self
    }

    pub fn with_generic(mut self, loader: impl Into<Box<dyn Loader>>) -> Self {
        self.generic = Some(loader.into());
        self
    }

    pub fn with_fallback(mut self, fallback: TableLoader) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn is_roster(&self, path: &Path) -> bool {
        source_of(path).contains(&self.roster_file_name)
    }
}

impl Loader for CsvDispatch {
    fn load(&self, path: &Path) -> Result<Vec<Document>, LoaderError> {
        if self.is_roster(path) {
            return Ok(self.roster.build(path));
        }

        match &self.generic {
            Some(loader) => loader.load(path),
            None => self.fallback.load(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::document_loaders::metadata_keys;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    const ROSTER: &str = "社員ID,氏名（フルネーム）,部署,役職\nE1,山田太郎,営業部,部長\nE2,佐藤花子,人事部,課長\n";

    #[test]
    fn test_roster_file_name_selects_roster_builder() {
        let dir = tempfile::TempDir::new().unwrap();
        let roster = write(&dir, "社員名簿.csv", ROSTER);
        let other = write(&dir, "members.csv", ROSTER);

        let dispatch = CsvDispatch::new().with_generic(CsvLoader::new());

        let documents = dispatch.load(&roster).unwrap();
        assert_eq!(documents.len(), 2);
        assert!(documents[0].metadata.contains_key(metadata_keys::DEPARTMENT));

        let documents = dispatch.load(&other).unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].metadata_u64(metadata_keys::ROW), Some(0));
        assert!(!documents[0].metadata.contains_key(metadata_keys::DEPARTMENT));
    }

    #[test]
    fn test_fallback_without_generic_loader() {
        let dir = tempfile::TempDir::new().unwrap();
        let other = write(&dir, "members.csv", ROSTER);

        let documents = CsvDispatch::without_generic().load(&other).unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].metadata.len(), 2);
        assert!(documents[0].page_content.contains("山田太郎"));
    }

    #[test]
    fn test_default_generic_loader_is_row_per_document() {
        let dir = tempfile::TempDir::new().unwrap();
        let other = write(&dir, "members.csv", ROSTER);

        let documents = CsvDispatch::default().load(&other).unwrap();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[1].metadata_u64(metadata_keys::ROW), Some(1));
        assert!(documents[1].page_content.starts_with("社員ID: E2\n氏名（フルネーム）: 佐藤花子"));
    }

    #[test]
    fn test_roster_failure_is_swallowed() {
        let dispatch = CsvDispatch::new().with_generic(CsvLoader::new());

        let documents = dispatch.load(Path::new("/nonexistent/社員名簿.csv")).unwrap();
        assert!(documents.is_empty());

        assert!(dispatch.load(Path::new("/nonexistent/other.csv")).is_err());
    }

    #[test]
    fn test_custom_roster_file_name() {
        let dispatch = CsvDispatch::new().with_roster_file_name("staff.csv");

        assert!(dispatch.is_roster(Path::new("data/staff.csv")));
        assert!(!dispatch.is_roster(Path::new("data/社員名簿.csv")));
    }
}
