mod message_type;
pub use message_type::*;

pub mod messages;
pub use messages::*;

pub mod prompt;
pub use prompt::*;

pub mod document;
pub use document::*;
