use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a chat message inside a prompt.
///
/// # Usage
/// ```rust,ignore
/// let system = MessageType::System;
/// let human = MessageType::Human;
/// ```
#[derive(PartialEq, Eq, Serialize, Deserialize, Debug, Clone, Copy, Default)]
pub enum MessageType {
    #[default]
    #[serde(rename = "system")]
    System,
    #[serde(rename = "ai")]
    Ai,
    #[serde(rename = "human")]
    Human,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageType::System => write!(f, "system"),
            MessageType::Ai => write!(f, "ai"),
            MessageType::Human => write!(f, "human"),
        }
    }
}
