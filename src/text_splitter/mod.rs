mod error;
pub use error::*;

mod character_splitter;
pub use character_splitter::*;
