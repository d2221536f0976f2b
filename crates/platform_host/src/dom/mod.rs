//! Document and element contracts plus an in-memory document for tests and non-browser targets.

pub mod document;
pub mod memory;
pub mod query;

pub use document::{ClickHandler, DocumentHandle, ElementHandle};
pub use memory::{MemoryDocument, MemoryElement};
pub use query::ElementQuery;
