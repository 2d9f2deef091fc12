use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Missing input variable: {0}")]
    MissingVariable(String),
}
