pub mod chat;
pub mod config;
pub mod constants;
pub mod document_loaders;
pub mod schemas;
pub mod template;
pub mod text_splitter;
