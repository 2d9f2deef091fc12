use std::collections::HashMap;

use crate::schemas::Message;

mod error;
pub use error::*;

mod message_template;
pub use message_template::*;

mod prompt_template;
pub use prompt_template::*;

/// Values substituted for `{variable}` markers in message templates.
pub type TextReplacements<'a> = HashMap<&'a str, String>;

/// Messages spliced in place of named placeholders, e.g. the chat history.
pub type PlaceholderReplacements<'a> = HashMap<&'a str, Vec<Message>>;
