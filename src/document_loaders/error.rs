use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    IOError(#[from] io::Error),

    #[error("File is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Row {row} has {found} fields but the header has {expected}")]
    RowTooLong {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Quoted field is not terminated before end of file")]
    UnterminatedQuote,

    #[error("Table has no header row")]
    MissingHeader,

    #[error("Render error: {0}")]
    RenderError(#[from] std::fmt::Error),

    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),

    #[error("No loader registered for extension {0}")]
    LoaderUnavailable(String),

    #[error("Error: {0}")]
    OtherError(String),
}
