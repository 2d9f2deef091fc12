//! Prompts and answer handling for the chat front end.

mod prompts;
pub use prompts::*;

mod answer_mode;
pub use answer_mode::*;

use crate::schemas::Document;

/// Separator placed between retrieved documents in the `{context}` variable.
pub const DOCUMENT_SEPARATOR: &str = "\n\n";

/// Concatenates retrieved documents into a single context string.
pub fn stuff_documents(documents: &[Document]) -> String {
    documents
        .iter()
        .map(|d| d.page_content.as_str())
        .collect::<Vec<_>>()
        .join(DOCUMENT_SEPARATOR)
}
