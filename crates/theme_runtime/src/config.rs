//! Theme toggle configuration.

use platform_host::ElementQuery;
use serde::{Deserialize, Serialize};

use crate::{error::ThemeError, preference::Preference};

/// Preference store key holding `"y"`/`"n"`.
pub const DEFAULT_STORAGE_KEY: &str = "darkmode_enabled";
/// Id of the toggle control element.
pub const DEFAULT_CONTROL_ID: &str = "dark-button";
/// Class applied to the body and themed surfaces while dark.
pub const DEFAULT_THEME_CLASS: &str = "dark";
/// Id of the optional inline JSON block a page can use to override [`ThemeConfig`].
pub const CONFIG_ELEMENT_ID: &str = "theme-toggle-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Label text shown on the toggle control.
///
/// The control always shows the label of the state one click away.
pub struct LabelPair {
    /// Shown while light, i.e. offering the switch to dark.
    pub dark: String,
    /// Shown while dark.
    pub light: String,
}

impl Default for LabelPair {
    fn default() -> Self {
        Self {
            dark: "dark".to_string(),
            light: "light".to_string(),
        }
    }
}

impl LabelPair {
    /// Label naming `preference` itself.
    pub fn label_for(&self, preference: Preference) -> &str {
        match preference {
            Preference::Light => &self.light,
            Preference::Dark => &self.dark,
        }
    }

    /// Label to show while `current` is active.
    pub fn offered_from(&self, current: Preference) -> &str {
        self.label_for(current.toggled())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Everything the controller needs to know about the host page.
pub struct ThemeConfig {
    /// Class toggled on the body and every themed surface.
    pub theme_class_name: String,
    /// Surfaces themed alongside the body, in order.
    pub themed_selectors: Vec<ElementQuery>,
    /// Control label text.
    pub labels: LabelPair,
    /// Id of the toggle control; an existing element with this id is reused.
    pub control_id: String,
    /// Preference store key.
    pub storage_key: String,
    /// Where a newly created control is prepended; falls back to the body.
    pub header_container: Option<ElementQuery>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme_class_name: DEFAULT_THEME_CLASS.to_string(),
            themed_selectors: vec![ElementQuery::class("card")],
            labels: LabelPair::default(),
            control_id: DEFAULT_CONTROL_ID.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            header_container: Some(ElementQuery::tag("header")),
        }
    }
}

impl ThemeConfig {
    /// Default configuration that also themes `code` and `pre` blocks.
    pub fn with_code_blocks() -> Self {
        let mut config = Self::default();
        config
            .themed_selectors
            .extend([ElementQuery::tag("code"), ElementQuery::tag("pre")]);
        config
    }

    /// Parses and validates a JSON configuration. Omitted fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] for malformed JSON or unknown fields, or the
    /// [`ThemeConfig::validate`] error.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ThemeError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values the browser would reject or that make the control ambiguous.
    ///
    /// # Errors
    ///
    /// Returns the first [`ThemeError`] found.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let class_name = &self.theme_class_name;
        if class_name.is_empty() || class_name.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(ThemeError::InvalidClassName(class_name.clone()));
        }
        if self.control_id.trim().is_empty() {
            return Err(ThemeError::EmptyControlId);
        }
        if self.storage_key.is_empty() {
            return Err(ThemeError::EmptyStorageKey);
        }
        let LabelPair { dark, light } = &self.labels;
        if dark.is_empty() || light.is_empty() || dark == light {
            return Err(ThemeError::InvalidLabels);
        }
        Ok(())
    }
}
