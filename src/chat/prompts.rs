use indoc::indoc;

use crate::{
    prompt_template,
    schemas::MessageType,
    template::{MessageOrTemplate, MessageTemplate, PromptTemplate},
};

/// Name of the placeholder that receives earlier turns of the conversation.
pub const CHAT_HISTORY_PLACEHOLDER: &str = "chat_history";

/// Rewrites the latest user input into a question that stands on its own,
/// with department and employee vocabulary spelled out for retrieval.
pub const SYSTEM_PROMPT_CREATE_INDEPENDENT_TEXT: &str = indoc! {"
    会話履歴と最新の入力をもとに、会話履歴なしでも理解できる独立した入力テキストを生成してください。

    特に以下の点に注意してください：
    - 部署名、従業員情報、社員データに関する質問の場合は、具体的で詳細な検索用語を含めてください
    - 部署名（人事部、営業部、IT部、マーケティング部、経理部、総務部等）を正確に保持してください
    - 「従業員」「社員」「スタッフ」「メンバー」「人員」「職員」「所属」「一覧」などのキーワードを保持・強化してください
    - 検索対象を明確に示し、関連キーワードを追加した表現に変換してください
    - 「一覧化」「リスト化」などの要求では、その旨を明確に含めてください

    例：
    - 入力「人事部の従業員情報を教えて」→ 出力「人事部に所属している従業員の一覧情報と詳細、人事部の社員・スタッフ・メンバー情報を教えてください」
    - 入力「営業部に所属している従業員情報を一覧化して」→ 出力「営業部に所属している従業員情報を一覧化、営業部の社員・スタッフ・メンバーの詳細情報をリスト形式で表示してください」
    - 入力「IT部のスタッフは？」→ 出力「IT部に所属する社員・従業員・スタッフ・メンバーの情報を教えてください」
    - 入力「マーケティング部の社員数は？」→ 出力「マーケティング部に所属している社員・従業員・スタッフの人数と一覧情報を教えてください」
"};

pub const SYSTEM_PROMPT_DOC_SEARCH: &str = indoc! {r#"
    あなたは社内の文書検索アシスタントです。
    以下の条件に基づき、ユーザー入力に対して回答してください。

    【条件】
    1. ユーザー入力内容と以下の文脈との間に関連性がある場合、空文字「""」を返してください。
    2. ユーザー入力内容と以下の文脈との関連性が明らかに低い場合、「該当資料なし」と回答してください。

    【文脈】
    {context}
"#};

pub const SYSTEM_PROMPT_INQUIRY: &str = indoc! {"
    あなたは社内情報特化型のアシスタントです。
    以下の条件に基づき、ユーザー入力に対して回答してください。

    【条件】
    1. ユーザー入力内容と以下の文脈との間に関連性がある場合のみ、以下の文脈に基づいて回答してください。
    2. ユーザー入力内容と以下の文脈との関連性が明らかに低い場合、「回答に必要な情報が見つかりませんでした。」と回答してください。
    3. 憶測で回答せず、あくまで以下の文脈を元に回答してください。
    4. できる限り詳細に、マークダウン記法を使って回答してください。
    5. マークダウン記法で回答する際にhタグの見出しを使う場合、最も大きい見出しをh3としてください。
    6. 複雑な質問の場合、各項目についてそれぞれ詳細に回答してください。
    7. 従業員情報、部署情報、社員データに関する質問の場合は、文脈にある情報を積極的に活用して回答してください。
    8. 部署名、従業員名、役職などの検索では、部分的な一致でも関連性があると判断してください。
    9. 「一覧化して」「リスト化して」「教えて」などの要求で従業員情報が4名以上ある場合は、必ず4名以上を表示してください。
    10. 従業員情報の一覧表示では、名前、役職、社員IDを含む形で整理して表示してください。
    11. 文脈に従業員の詳細情報が複数含まれている場合は、可能な限り多くの従業員情報を含めて回答してください。
    12. 従業員一覧の要求では、番号付きリスト形式で表示し、各従業員の基本情報を含めてください。

    【文脈】
    {context}
"};

/// System prompt, then the chat history, then the user's `{input}`.
pub fn chat_prompt(system_prompt: &str) -> PromptTemplate {
    prompt_template![
        MessageTemplate::from_fstring(MessageType::System, system_prompt),
        MessageOrTemplate::Placeholder(CHAT_HISTORY_PLACEHOLDER.into()),
        MessageTemplate::from_fstring(MessageType::Human, "{input}")
    ]
}

pub fn question_rewrite_prompt() -> PromptTemplate {
    chat_prompt(SYSTEM_PROMPT_CREATE_INDEPENDENT_TEXT)
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use crate::schemas::Message;

    #[test]
    fn test_prompt_variables() {
        assert_eq!(question_rewrite_prompt().variables(), HashSet::from(["input"]));
        assert_eq!(
            chat_prompt(SYSTEM_PROMPT_INQUIRY).variables(),
            HashSet::from(["context", "input"])
        );
        assert_eq!(
            chat_prompt(SYSTEM_PROMPT_DOC_SEARCH).placeholders(),
            HashSet::from([CHAT_HISTORY_PLACEHOLDER])
        );
    }

    #[test]
    fn test_prompt_texts_are_dedented() {
        assert!(SYSTEM_PROMPT_DOC_SEARCH.starts_with("あなたは社内の文書検索アシスタントです。\n"));
        assert!(SYSTEM_PROMPT_DOC_SEARCH.contains("空文字「\"\"」を返してください。"));
        assert!(SYSTEM_PROMPT_INQUIRY.ends_with("【文脈】\n{context}\n"));
    }

    #[test]
    fn test_question_rewrite_prompt() {
        let prompt = question_rewrite_prompt()
            .format(
                &HashMap::from([("input", "IT部のスタッフは？".to_string())]),
                &HashMap::from([(
                    CHAT_HISTORY_PLACEHOLDER,
                    vec![Message::new_human_message("こんにちは")],
                )]),
            )
            .unwrap();

        let messages = prompt.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].content, SYSTEM_PROMPT_CREATE_INDEPENDENT_TEXT);
        assert_eq!(messages[2].content, "IT部のスタッフは？");
    }
}
