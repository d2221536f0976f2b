//! Browser document adapters.

pub mod web_document;
