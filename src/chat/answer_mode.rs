use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    constants::{ANSWER_MODE_1, ANSWER_MODE_2, INQUIRY_NO_MATCH_ANSWER, NO_DOC_MATCH_ANSWER},
    schemas::{Document, Message, Prompt},
    template::{PromptTemplate, TemplateError},
};

use super::{
    chat_prompt, stuff_documents, CHAT_HISTORY_PLACEHOLDER, SYSTEM_PROMPT_DOC_SEARCH,
    SYSTEM_PROMPT_INQUIRY,
};

/// How the assistant answers: point at matching documents, or answer the
/// question from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerMode {
    #[default]
    DocumentSearch,
    Inquiry,
}

impl AnswerMode {
    pub const ALL: [AnswerMode; 2] = [AnswerMode::DocumentSearch, AnswerMode::Inquiry];

    /// Label shown in the mode selector.
    pub fn label(&self) -> &'static str {
        match self {
            AnswerMode::DocumentSearch => ANSWER_MODE_1,
            AnswerMode::Inquiry => ANSWER_MODE_2,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            AnswerMode::DocumentSearch => SYSTEM_PROMPT_DOC_SEARCH,
            AnswerMode::Inquiry => SYSTEM_PROMPT_INQUIRY,
        }
    }

    /// The exact answer the model gives when nothing relevant was retrieved.
    pub fn no_match_answer(&self) -> &'static str {
        match self {
            AnswerMode::DocumentSearch => NO_DOC_MATCH_ANSWER,
            AnswerMode::Inquiry => INQUIRY_NO_MATCH_ANSWER,
        }
    }

    pub fn is_no_match(&self, answer: &str) -> bool {
        answer.trim() == self.no_match_answer()
    }

    pub fn prompt_template(&self) -> PromptTemplate {
        chat_prompt(self.system_prompt())
    }

    /// Formats the answer prompt with the retrieved documents as `{context}`.
    pub fn format_prompt(
        &self,
        input: &str,
        documents: &[Document],
        chat_history: Vec<Message>,
    ) -> Result<Prompt, TemplateError> {
        let text = HashMap::from([
            ("context", stuff_documents(documents)),
            ("input", input.to_string()),
        ]);
        let placeholders = HashMap::from([(CHAT_HISTORY_PLACEHOLDER, chat_history)]);

        self.prompt_template().format(&text, &placeholders)
    }
}

impl fmt::Display for AnswerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::MessageType;

    #[test]
    fn test_labels_round_trip() {
        for mode in AnswerMode::ALL {
            assert_eq!(AnswerMode::from_label(mode.label()), Some(mode));
        }
        assert_eq!(AnswerMode::from_label("社内問い合わせ"), Some(AnswerMode::Inquiry));
        assert_eq!(AnswerMode::from_label("unknown"), None);
        assert_eq!(AnswerMode::DocumentSearch.to_string(), "社内文書検索");
    }

    #[test]
    fn test_no_match_detection() {
        assert!(AnswerMode::DocumentSearch.is_no_match("該当資料なし\n"));
        assert!(!AnswerMode::DocumentSearch.is_no_match(""));
        assert!(AnswerMode::Inquiry.is_no_match("回答に必要な情報が見つかりませんでした。"));
        assert!(!AnswerMode::Inquiry.is_no_match("該当資料なし"));
    }

    #[test]
    fn test_format_prompt() {
        let documents = [Document::new("部署: 人事部"), Document::new("部署: 営業部")];
        let history = vec![
            Message::new_human_message("人事部について"),
            Message::new_ai_message("はい"),
        ];

        let prompt = AnswerMode::Inquiry
            .format_prompt("人事部の社員数は？", &documents, history)
            .unwrap();
        let messages = prompt.messages();

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].message_type, MessageType::System);
        assert!(messages[0]
            .content
            .ends_with("【文脈】\n部署: 人事部\n\n部署: 営業部\n"));
        assert_eq!(messages[3].message_type, MessageType::Human);
        assert_eq!(messages[3].content, "人事部の社員数は？");
    }
}
