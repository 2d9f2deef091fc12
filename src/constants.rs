//! Fixed strings and values shared across the application.

// Screen text
pub const APP_NAME: &str = "社内情報特化型生成AI検索アプリ";
pub const ANSWER_MODE_1: &str = "社内文書検索";
pub const ANSWER_MODE_2: &str = "社内問い合わせ";
pub const CHAT_INPUT_HELPER_TEXT: &str = "こちらからメッセージを送信してください。";
pub const DOC_SOURCE_ICON: &str = ":material/description: ";
pub const LINK_SOURCE_ICON: &str = ":material/link: ";
pub const WARNING_ICON: &str = ":material/warning:";
pub const ERROR_ICON: &str = ":material/error:";
pub const SPINNER_TEXT: &str = "回答生成中...";

// Logging
pub const LOG_DIR_PATH: &str = "./logs";
pub const LOGGER_NAME: &str = "ApplicationLog";
pub const LOG_FILE: &str = "application.log";
pub const APP_BOOT_MESSAGE: &str = "アプリが起動されました。";

// LLM
pub const MODEL: &str = "gpt-4o-mini";
pub const TEMPERATURE: f32 = 0.5;

// RAG data sources
pub const RAG_TOP_FOLDER_PATH: &str = "./data";
/// Number of related documents fetched from the vector store.
pub const RAG_TOP_K: usize = 5;
pub const RAG_CHUNK_SIZE: usize = 1000;
pub const RAG_CHUNK_OVERLAP: usize = 200;
pub const WEB_URL_LOAD_TARGETS: &[&str] = &["https://generative-ai.web-camp.io/"];

// Model answers compared verbatim
pub const INQUIRY_NO_MATCH_ANSWER: &str = "回答に必要な情報が見つかりませんでした。";
pub const NO_DOC_MATCH_ANSWER: &str = "該当資料なし";

// Errors and warnings
pub const COMMON_ERROR_MESSAGE: &str =
    "このエラーが繰り返し発生する場合は、管理者にお問い合わせください。";
pub const INITIALIZE_ERROR_MESSAGE: &str = "初期化処理に失敗しました。";
pub const NO_DOC_MATCH_MESSAGE: &str =
    "入力内容と関連する社内文書が見つかりませんでした。\n入力内容を変更してください。";
pub const CONVERSATION_LOG_ERROR_MESSAGE: &str = "過去の会話履歴の表示に失敗しました。";
pub const GET_LLM_RESPONSE_ERROR_MESSAGE: &str = "回答生成に失敗しました。";
pub const DISP_ANSWER_ERROR_MESSAGE: &str = "回答表示に失敗しました。";

/// An error message followed by the common "contact an administrator" line.
pub fn with_common_error(message: &str) -> String {
    format!("{message}\n{COMMON_ERROR_MESSAGE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_common_error() {
        assert_eq!(
            with_common_error(INITIALIZE_ERROR_MESSAGE),
            "初期化処理に失敗しました。\nこのエラーが繰り返し発生する場合は、管理者にお問い合わせください。"
        );
    }
}
