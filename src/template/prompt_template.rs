use std::collections::HashSet;

use super::MessageTemplate;
use crate::schemas::{Message, Prompt};
use crate::template::{PlaceholderReplacements, TemplateError, TextReplacements};

#[derive(Debug, Clone)]
pub enum MessageOrTemplate {
    Message(Message),
    Template(MessageTemplate),
    Placeholder(String),
}

impl From<Message> for MessageOrTemplate {
    fn from(message: Message) -> Self {
        MessageOrTemplate::Message(message)
    }
}

impl From<MessageTemplate> for MessageOrTemplate {
    fn from(template: MessageTemplate) -> Self {
        MessageOrTemplate::Template(template)
    }
}

#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub(crate) messages: Vec<MessageOrTemplate>,
}

impl PromptTemplate {
    pub fn new(messages: impl IntoIterator<Item = MessageOrTemplate>) -> Self {
        Self {
            messages: messages.into_iter().collect(),
        }
    }

    /// Insert variables into a prompt template to create a full-fletched prompt.
    ///
    /// A placeholder with no replacement expands to nothing, so an empty chat
    /// history needs no special casing.
    pub fn format(
        &self,
        text_replacements: &TextReplacements,
        placeholder_replacements: &PlaceholderReplacements,
    ) -> Result<Prompt, TemplateError> {
        let mut messages = Vec::with_capacity(self.messages.len());

        for m in &self.messages {
            match m {
                MessageOrTemplate::Message(m) => messages.push(m.clone()),
                MessageOrTemplate::Template(t) => messages.push(t.format(text_replacements)?),
                MessageOrTemplate::Placeholder(p) => {
                    if let Some(replacement) = placeholder_replacements.get(p.as_str()) {
                        messages.extend(replacement.iter().cloned());
                    }
                }
            }
        }

        Ok(Prompt::new(messages))
    }

    /// Returns a list of required input variable names for the template.
    pub fn variables(&self) -> HashSet<&str> {
        self.messages
            .iter()
            .filter_map(|m| match m {
                MessageOrTemplate::Template(t) => Some(t.variables()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    pub fn placeholders(&self) -> HashSet<&str> {
        self.messages
            .iter()
            .filter_map(|m| match m {
                MessageOrTemplate::Placeholder(p) => Some(p.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl From<MessageTemplate> for PromptTemplate {
    fn from(template: MessageTemplate) -> Self {
        Self::new(vec![MessageOrTemplate::Template(template)])
    }
}

#[macro_export]
macro_rules! prompt_template {
    ($($x:expr),*) => {
        $crate::template::PromptTemplate::new(vec![$($crate::template::MessageOrTemplate::from($x)),*])
    };
}
