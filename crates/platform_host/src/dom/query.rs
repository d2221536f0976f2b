//! Element selection shared by host document implementations.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// A single class-or-tag selector.
///
/// The textual form mirrors CSS: `.card` selects by class, `pre` selects by tag name.
pub enum ElementQuery {
    /// Elements whose class list contains the name.
    Class(String),
    /// Elements whose tag name matches, ASCII case-insensitively.
    Tag(String),
}

impl ElementQuery {
    /// Selects elements carrying `name` in their class list.
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }

    /// Selects elements by tag name.
    pub fn tag(name: impl Into<String>) -> Self {
        Self::Tag(name.into().to_ascii_lowercase())
    }

    /// Returns the bare class or tag name.
    pub fn name(&self) -> &str {
        match self {
            Self::Class(name) | Self::Tag(name) => name,
        }
    }
}

impl FromStr for ElementQuery {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        let (query, name) = match raw.strip_prefix('.') {
            Some(class_name) => (Self::class(class_name), class_name),
            None => (Self::tag(raw), raw),
        };
        if name.is_empty() {
            return Err(format!("empty selector `{raw}`"));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(format!(
                "unsupported selector `{raw}`; expected `.class` or `tag`"
            ));
        }
        Ok(query)
    }
}

impl TryFrom<String> for ElementQuery {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<ElementQuery> for String {
    fn from(query: ElementQuery) -> Self {
        query.to_string()
    }
}

impl fmt::Display for ElementQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(name) => write!(f, ".{name}"),
            Self::Tag(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_class_and_tag_forms() {
        assert_eq!(".card".parse::<ElementQuery>(), Ok(ElementQuery::class("card")));
        assert_eq!("PRE".parse::<ElementQuery>(), Ok(ElementQuery::tag("pre")));
        assert_eq!(" code ".parse::<ElementQuery>(), Ok(ElementQuery::tag("code")));
    }

    #[test]
    fn rejects_empty_and_compound_selectors() {
        assert!(".".parse::<ElementQuery>().is_err());
        assert!("".parse::<ElementQuery>().is_err());
        assert!("div.card".parse::<ElementQuery>().is_err());
        assert!(".card pre".parse::<ElementQuery>().is_err());
    }

    #[test]
    fn serde_uses_css_text_form() {
        let queries: Vec<ElementQuery> =
            serde_json::from_str(r#"[".card", "pre"]"#).expect("deserialize");
        assert_eq!(
            queries,
            vec![ElementQuery::class("card"), ElementQuery::tag("pre")]
        );
        assert_eq!(
            serde_json::to_string(&queries).expect("serialize"),
            r#"[".card","pre"]"#
        );
    }
}
