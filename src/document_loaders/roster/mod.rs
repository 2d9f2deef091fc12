//! Employee roster loader.
//!
//! Each department becomes one document that repeats the department name,
//! head count and common query phrasings many times over, followed by a
//! numbered roster and a per-employee detail block, so that department-level
//! questions ("営業部の社員一覧", "人事部のスタッフは？") match it lexically.

mod options;
pub use options::*;

mod render;
pub(crate) use render::*;
pub use render::NOT_AVAILABLE;

mod loader;
pub use loader::*;
