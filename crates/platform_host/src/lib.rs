//! Host-neutral contracts shared by the theme runtime and its browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the preference store
//! and document/element traits the runtime is written against, plus in-memory implementations
//! used by tests and non-browser targets. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dom;
pub mod storage;

pub use dom::{
    ClickHandler, DocumentHandle, ElementHandle, ElementQuery, MemoryDocument, MemoryElement,
};
pub use storage::prefs::{
    MemoryPreferenceStore, NoopPreferenceStore, PreferenceStore, UnavailablePreferenceStore,
};
