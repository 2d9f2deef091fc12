use std::path::Path;

use crate::schemas::Document;

use super::{decode_utf8, metadata_keys, source_of, Loader, LoaderError};

/// Loads a UTF-8 text file as a single document.
#[derive(Debug, Clone, Default)]
pub struct TextLoader;

impl TextLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Loader for TextLoader {
    fn load(&self, path: &Path) -> Result<Vec<Document>, LoaderError> {
        let bytes = std::fs::read(path)?;
        let document = Document::new(decode_utf8(&bytes)?)
            .with_metadata_entry(metadata_keys::SOURCE, source_of(path));
        Ok(vec![document])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_loader() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("規程.txt");
        std::fs::write(&path, "就業規則\n第1条").unwrap();

        let documents = TextLoader::new().load(&path).unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].page_content, "就業規則\n第1条");
        assert_eq!(
            documents[0].metadata_str(metadata_keys::SOURCE),
            Some(&*path.to_string_lossy())
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, [0xffu8, 0xfe, 0xfd]).unwrap();

        let err = TextLoader::new().load(&path).unwrap_err();
        assert!(matches!(err, LoaderError::Utf8Error(_)));
    }
}
