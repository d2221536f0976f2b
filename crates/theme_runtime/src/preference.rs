//! The persisted light/dark preference.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Binary theme preference.
pub enum Preference {
    /// Default when nothing (or something unrecognized) is stored.
    #[default]
    Light,
    /// Dark theme enabled.
    Dark,
}

impl Preference {
    /// Stored value for [`Preference::Dark`].
    pub const STORED_DARK: &'static str = "y";
    /// Stored value for [`Preference::Light`].
    pub const STORED_LIGHT: &'static str = "n";

    /// Parses a stored value; anything other than `"y"`/`"n"` is unrecognized.
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            Self::STORED_DARK => Some(Self::Dark),
            Self::STORED_LIGHT => Some(Self::Light),
            _ => None,
        }
    }

    /// Value written to the preference store.
    pub const fn stored_value(self) -> &'static str {
        match self {
            Self::Light => Self::STORED_LIGHT,
            Self::Dark => Self::STORED_DARK,
        }
    }

    /// The other preference.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether the theme class should be present.
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}
