use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::{
    schemas::{Message, MessageType},
    template::{TemplateError, TextReplacements},
};

static FSTRING_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("valid fstring pattern"));
static JINJA2_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("valid jinja2 pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFormat {
    FString,
    Jinja2,
}

#[derive(Debug, Clone)]
pub struct MessageTemplate {
    message_type: MessageType,
    template: String,
    variables: HashSet<String>,
    format: TemplateFormat,
}

impl MessageTemplate {
    pub fn new(
        message_type: MessageType,
        template: impl Into<String>,
        variables: HashSet<String>,
        format: TemplateFormat,
    ) -> Self {
        Self {
            message_type,
            template: template.into(),
            variables,
            format,
        }
    }

    pub fn from_fstring(message_type: MessageType, content: impl Into<String>) -> Self {
        let content = content.into();
        let variables = FSTRING_VARIABLE
            .captures_iter(&content)
            .map(|cap| cap[1].to_string())
            .collect();

        Self::new(message_type, content, variables, TemplateFormat::FString)
    }

    pub fn from_jinja2(message_type: MessageType, content: impl Into<String>) -> Self {
        let content = content.into();
        let variables = JINJA2_VARIABLE
            .captures_iter(&content)
            .map(|cap| cap[1].to_string())
            .collect();

        Self::new(message_type, content, variables, TemplateFormat::Jinja2)
    }

    pub fn format(&self, input: &TextReplacements) -> Result<Message, TemplateError> {
        self.validate_input(input)?;

        let mut content = self.template.clone();

        for (key, value) in input {
            let key = match self.format {
                TemplateFormat::FString => format!("{{{key}}}"),
                TemplateFormat::Jinja2 => format!("{{{{{key}}}}}"),
            };
            content = content.replace(&key, value);
        }

        Ok(Message::new(self.message_type, content))
    }

    /// Returns a list of required input variable names for the template.
    pub fn variables(&self) -> HashSet<&str> {
        self.variables.iter().map(String::as_str).collect()
    }

    pub fn validate_input(&self, input: &TextReplacements) -> Result<(), TemplateError> {
        let mut missing_variables = self
            .variables()
            .into_iter()
            .filter(|v| !input.contains_key(v))
            .collect::<Vec<_>>();

        if !missing_variables.is_empty() {
            missing_variables.sort_unstable();
            return Err(TemplateError::MissingVariable(missing_variables.join(", ")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_fstring_template() {
        let template =
            MessageTemplate::from_fstring(MessageType::Human, "{department}の従業員を教えて");

        let input = HashMap::from([("department", "人事部".into())]);

        let message = template.format(&input).unwrap();
        assert_eq!(message.content, "人事部の従業員を教えて");
        assert_eq!(message.message_type, MessageType::Human);
    }

    #[test]
    fn test_jinja2_template_duplicate() {
        let template = MessageTemplate::from_jinja2(
            MessageType::Ai,
            "{{name}}さん、こんにちは。{{name}}さんの所属は{{department}}です。",
        );

        let input = HashMap::from([("name", "山田".into()), ("department", "営業部".into())]);

        let message = template.format(&input).unwrap();
        assert_eq!(
            message.content,
            "山田さん、こんにちは。山田さんの所属は営業部です。"
        );
    }

    #[test]
    fn test_missing_variables_are_reported_sorted() {
        let template = MessageTemplate::from_fstring(MessageType::System, "{context} {b} {a}");

        let input = HashMap::from([("context", "ctx".into())]);

        let err = template.format(&input).unwrap_err();
        assert_eq!(err, TemplateError::MissingVariable("a, b".into()));
    }

    #[test]
    fn test_template_without_variables() {
        let template = MessageTemplate::from_fstring(MessageType::System, "「該当資料なし」");
        assert!(template.variables().is_empty());

        let message = template.format(&HashMap::new()).unwrap();
        assert_eq!(message.content, "「該当資料なし」");
    }
}
