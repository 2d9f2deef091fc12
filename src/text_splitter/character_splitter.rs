use ::text_splitter::{Characters, ChunkConfig, TextSplitter};

use crate::schemas::Document;

use super::TextSplitterError;

/// Splits documents into chunks of at most `chunk_size` characters, with up to
/// `chunk_overlap` characters shared between neighbouring chunks.
pub struct CharacterSplitter {
    splitter: TextSplitter<Characters>,
}

impl CharacterSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, TextSplitterError> {
        let config = ChunkConfig::new(chunk_size).with_overlap(chunk_overlap)?;
        Ok(Self {
            splitter: TextSplitter::new(config),
        })
    }

    pub fn split_text(&self, text: &str) -> Vec<String> {
        self.splitter.chunks(text).map(str::to_string).collect()
    }

    /// Chunks every document; each chunk keeps its document's metadata.
    pub fn split_documents(&self, documents: &[Document]) -> Vec<Document> {
        documents
            .iter()
            .flat_map(|document| {
                self.split_text(&document.page_content)
                    .into_iter()
                    .map(|chunk| Document::new(chunk).with_metadata(document.metadata.clone()))
            })
            .collect()
    }
}
