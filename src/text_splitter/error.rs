use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextSplitterError {
    #[error("Invalid chunk configuration: {0}")]
    InvalidChunkConfig(#[from] ::text_splitter::ChunkConfigError),
}
