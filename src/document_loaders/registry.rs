use std::collections::HashMap;
use std::path::Path;

use crate::schemas::Document;

use super::{CsvDispatch, Loader, LoaderError, TextLoader};

/// File extensions the application ingests.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = [".pdf", ".docx", ".csv", ".txt"];

/// Maps file extensions to loaders.
///
/// The default registry handles `.csv` and `.txt`. PDF and DOCX extraction
/// live outside this crate, so those slots stay empty until a loader is
/// supplied with [`LoaderRegistry::with_loader`].
pub struct LoaderRegistry {
    loaders: HashMap<&'static str, Box<dyn Loader>>,
}

impl Default for LoaderRegistry {
    fn default() -> Self {
        Self::empty()
            .with_loader(".csv", CsvDispatch::default())
            .with_loader(".txt", TextLoader)
    }
}

impl LoaderRegistry {
    /// A registry with no loaders at all.
    pub fn empty() -> Self {
        Self {
            loaders: HashMap::new(),
        }
    }

    /// Registers `loader` for `extension`, which must be one of
    /// [`SUPPORTED_EXTENSIONS`]; other extensions are ignored.
    pub fn with_loader(mut self, extension: &str, loader: impl Into<Box<dyn Loader>>) -> Self {
        let extension = extension.to_lowercase();
        match SUPPORTED_EXTENSIONS.iter().find(|e| **e == extension) {
            Some(supported) => {
                self.loaders.insert(*supported, loader.into());
            }
            None => log::warn!("Ignoring loader for unsupported extension {extension}"),
        }
        self
    }

    /// The lowercase, dot-prefixed extension of `path`, if any.
    pub fn extension_of(path: &Path) -> Option<String> {
        path.extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
    }

    pub fn is_supported(path: &Path) -> bool {
        Self::extension_of(path)
            .is_some_and(|e| SUPPORTED_EXTENSIONS.contains(&e.as_str()))
    }

    pub fn has_loader(&self, extension: &str) -> bool {
        self.loaders.contains_key(extension.to_lowercase().as_str())
    }

    pub fn load(&self, path: &Path) -> Result<Vec<Document>, LoaderError> {
        let extension = Self::extension_of(path).unwrap_or_default();

        if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(LoaderError::UnsupportedExtension(extension));
        }

        let loader = self
            .loaders
            .get(extension.as_str())
            .ok_or_else(|| LoaderError::LoaderUnavailable(extension.clone()))?;

        log::debug!("Loading {} with the {extension} loader", path.display());
        loader.load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubPdf;

    impl Loader for StubPdf {
        fn load(&self, path: &Path) -> Result<Vec<Document>, LoaderError> {
            Ok(vec![Document::new(format!("pdf:{}", path.display()))])
        }
    }

    #[test]
    fn test_default_registry() {
        let registry = LoaderRegistry::default();

        assert!(registry.has_loader(".csv"));
        assert!(registry.has_loader(".TXT"));
        assert!(!registry.has_loader(".pdf"));
        assert!(!registry.has_loader(".docx"));
    }

    #[test]
    fn test_unsupported_and_unavailable() {
        let registry = LoaderRegistry::default();

        let err = registry.load(Path::new("slides.pptx")).unwrap_err();
        assert!(matches!(err, LoaderError::UnsupportedExtension(e) if e == ".pptx"));

        let err = registry.load(Path::new("README")).unwrap_err();
        assert!(matches!(err, LoaderError::UnsupportedExtension(e) if e.is_empty()));

        let err = registry.load(Path::new("manual.PDF")).unwrap_err();
        assert!(matches!(err, LoaderError::LoaderUnavailable(e) if e == ".pdf"));
    }

    #[test]
    fn test_injected_loader() {
        let registry = LoaderRegistry::default()
            .with_loader(".PDF", StubPdf)
            .with_loader(".xlsx", StubPdf);

        let documents = registry.load(Path::new("manual.pdf")).unwrap();
        assert_eq!(documents[0].page_content, "pdf:manual.pdf");
        assert!(!registry.has_loader(".xlsx"));
    }

    #[test]
    fn test_routes_by_extension() {
        let dir = tempfile::TempDir::new().unwrap();
        let text = dir.path().join("notes.txt");
        let roster = dir.path().join("社員名簿.csv");
        let faq = dir.path().join("faq.csv");
        std::fs::write(&text, "メモ").unwrap();
        std::fs::write(&roster, "部署,氏名（フルネーム）\n営業部,山田太郎\n").unwrap();
        std::fs::write(&faq, "質問,回答\n有給は？,人事部へ\n経費は？,経理部へ\n").unwrap();

        let registry = LoaderRegistry::default();

        assert_eq!(registry.load(&text).unwrap()[0].page_content, "メモ");
        assert_eq!(
            registry.load(&roster).unwrap()[0].metadata_str("department"),
            Some("営業部")
        );

        let documents = registry.load(&faq).unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[1].page_content, "質問: 経費は？\n回答: 経理部へ");
        assert_eq!(documents[1].metadata_u64("row"), Some(1));
        assert!(LoaderRegistry::is_supported(&roster));
        assert!(!LoaderRegistry::is_supported(Path::new("a.md")));
    }
}
