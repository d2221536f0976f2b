//! Light/dark theme toggle for statically generated pages.
//!
//! [`ThemeController`] is written against the [`platform_host`] store and document contracts, so
//! it runs unchanged over `localStorage` and the browser DOM (`platform_host_web`) or over the
//! in-memory implementations in tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod controller;
pub mod error;
pub mod preference;

pub use config::{
    LabelPair, ThemeConfig, CONFIG_ELEMENT_ID, DEFAULT_CONTROL_ID, DEFAULT_STORAGE_KEY,
    DEFAULT_THEME_CLASS,
};
pub use controller::ThemeController;
pub use error::ThemeError;
pub use preference::Preference;
