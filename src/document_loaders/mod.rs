mod error;
pub use error::*;

mod loader;
pub use loader::*;

mod table;
pub use table::*;

mod table_loader;
pub use table_loader::*;

mod csv_loader;
pub use csv_loader::*;

mod text_loader;
pub use text_loader::*;

pub mod roster;
pub use roster::{RosterColumns, RosterLoader, RosterOptions, RosterOutcome, Verbosity};
pub(crate) use roster::plain_document;

mod csv_dispatch;
pub use csv_dispatch::*;

mod registry;
pub use registry::*;
