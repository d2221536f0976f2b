//! Errors raised while loading theme configuration.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Theme configuration errors.
///
/// Runtime operations on [`crate::ThemeController`] never fail; only configuration does.
pub enum ThemeError {
    /// The configuration text was not valid JSON for [`crate::ThemeConfig`].
    #[error("theme config parse failed: {0}")]
    Parse(String),
    /// The theme class name is empty or contains whitespace (rejected by `classList`).
    #[error("invalid theme class name `{0}`")]
    InvalidClassName(String),
    /// The toggle control id is empty.
    #[error("toggle control id must not be empty")]
    EmptyControlId,
    /// The preference storage key is empty.
    #[error("preference storage key must not be empty")]
    EmptyStorageKey,
    /// A label is empty or both labels are the same.
    #[error("toggle labels must be non-empty and distinct")]
    InvalidLabels,
}
