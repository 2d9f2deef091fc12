use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    LOGGER_NAME, LOG_DIR_PATH, LOG_FILE, MODEL, RAG_CHUNK_OVERLAP, RAG_CHUNK_SIZE,
    RAG_TOP_FOLDER_PATH, RAG_TOP_K, TEMPERATURE,
};
use crate::document_loaders::RosterOptions;
use crate::text_splitter::{CharacterSplitter, TextSplitterError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub model: String,
    pub temperature: f32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: MODEL.into(),
            temperature: TEMPERATURE,
        }
    }
}

impl LlmSettings {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RagSettings {
    pub top_folder_path: PathBuf,
    pub top_k: usize,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub roster: RosterOptions,
}

impl Default for RagSettings {
    fn default() -> Self {
        Self {
            top_folder_path: RAG_TOP_FOLDER_PATH.into(),
            top_k: RAG_TOP_K,
            chunk_size: RAG_CHUNK_SIZE,
            chunk_overlap: RAG_CHUNK_OVERLAP,
            roster: RosterOptions::default(),
        }
    }
}

impl RagSettings {
    pub fn with_top_folder_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.top_folder_path = path.into();
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_chunking(mut self, chunk_size: usize, chunk_overlap: usize) -> Self {
        self.chunk_size = chunk_size;
        self.chunk_overlap = chunk_overlap;
        self
    }

    pub fn splitter(&self) -> Result<CharacterSplitter, TextSplitterError> {
        CharacterSplitter::new(self.chunk_size, self.chunk_overlap)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub dir_path: PathBuf,
    pub logger_name: String,
    pub file_name: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            dir_path: LOG_DIR_PATH.into(),
            logger_name: LOGGER_NAME.into(),
            file_name: LOG_FILE.into(),
        }
    }
}

impl LogSettings {
    pub fn file_path(&self) -> PathBuf {
        self.dir_path.join(&self.file_name)
    }
}

/// Everything the chat application needs to know at startup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub llm: LlmSettings,
    pub rag: RagSettings,
    pub log: LogSettings,
}

impl AppSettings {
    /// Reads settings from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_llm(mut self, llm: LlmSettings) -> Self {
        self.llm = llm;
        self
    }

    pub fn with_rag(mut self, rag: RagSettings) -> Self {
        self.rag = rag;
        self
    }

    pub fn with_log(mut self, log: LogSettings) -> Self {
        self.log = log;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::document_loaders::Verbosity;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();

        assert_eq!(settings.llm.model, "gpt-4o-mini");
        assert_eq!(settings.llm.temperature, 0.5);
        assert_eq!(settings.rag.top_folder_path, Path::new("./data"));
        assert_eq!(settings.rag.top_k, 5);
        assert_eq!((settings.rag.chunk_size, settings.rag.chunk_overlap), (1000, 200));
        assert_eq!(settings.log.file_path(), Path::new("./logs/application.log"));
        assert_eq!(settings.log.logger_name, "ApplicationLog");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = AppSettings::from_json(
            r#"{
                "llm": { "temperature": 0.0 },
                "rag": { "top_k": 8, "roster": { "verbosity": "standard" } }
            }"#,
        )
        .unwrap();

        assert_eq!(settings.llm.model, "gpt-4o-mini");
        assert_eq!(settings.llm.temperature, 0.0);
        assert_eq!(settings.rag.top_k, 8);
        assert_eq!(settings.rag.chunk_size, 1000);
        assert_eq!(settings.rag.roster.verbosity, Verbosity::Standard);
        assert_eq!(settings.rag.roster.columns.department, "部署");
        assert_eq!(settings.log, LogSettings::default());
    }

    #[test]
    fn test_invalid_json() {
        assert!(AppSettings::from_json("{ \"rag\": { \"top_k\": \"five\" } }").is_err());
    }

    #[test]
    fn test_builders_and_splitter() {
        let settings = AppSettings::default()
            .with_llm(LlmSettings::default().with_model("gpt-4o").with_temperature(0.2))
            .with_rag(RagSettings::default().with_top_k(3).with_chunking(500, 50));

        assert_eq!(settings.llm.model, "gpt-4o");
        assert_eq!(settings.rag.top_k, 3);
        assert!(settings.rag.splitter().is_ok());
        assert!(RagSettings::default().with_chunking(10, 20).splitter().is_err());
    }
}
