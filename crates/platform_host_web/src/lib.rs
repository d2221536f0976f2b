//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! - `storage::local_prefs`: [`WebPreferenceStore`] over `window.localStorage`
//! - `dom::web_document`: [`WebDocument`]/[`WebElement`] over `web_sys`
//!
//! Off-wasm every adapter is inert (empty reads, successful no-op writes, no document) so host
//! wiring can be exercised in native tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dom;
pub mod storage;

pub use dom::web_document::{WebDocument, WebElement};
pub use storage::local_prefs::WebPreferenceStore;
