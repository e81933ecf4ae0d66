//! Operator-supplied element labels.

use serde::{Deserialize, Serialize};

use crate::SaatyError;

/// A label for one compared element, guaranteed non-empty after trimming.
///
/// Control characters are stripped at construction so a label can never
/// smuggle escape sequences into the menu rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Element(String);

impl Element {
    pub fn new(label: impl Into<String>) -> Result<Self, SaatyError> {
        let label: String = label.into();
        let cleaned: String = label.chars().filter(|c| !c.is_control()).collect();
        let trimmed = cleaned.trim();
        if trimmed.is_empty() {
            return Err(SaatyError::invalid_argument("element label must not be empty"));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Placeholder label for the element at `index` (0-based), rendered 1-based.
    #[must_use]
    pub fn positional(index: usize) -> Self {
        Self(format!("#{}", index + 1))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Element {
    type Error = SaatyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Element {
    type Error = SaatyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Element> for String {
    fn from(value: Element) -> Self {
        value.0
    }
}

impl AsRef<str> for Element {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Element;
    use crate::SaatyError;

    #[test]
    fn trims_surrounding_whitespace() {
        let element = Element::new("  price ").unwrap();
        assert_eq!(element.as_str(), "price");
    }

    #[test]
    fn rejects_blank_label() {
        assert!(matches!(
            Element::new("   "),
            Err(SaatyError::InvalidArgument(_))
        ));
    }

    #[test]
    fn strips_escape_sequences_control_bytes() {
        let element = Element::new("red\x1b[31m\x07").unwrap();
        assert_eq!(element.as_str(), "red[31m");
    }

    #[test]
    fn label_of_only_control_chars_is_empty() {
        assert!(Element::new("\x1b\x07").is_err());
    }

    #[test]
    fn positional_is_one_based() {
        assert_eq!(Element::positional(0).as_str(), "#1");
        assert_eq!(Element::positional(4).as_str(), "#5");
    }

    #[test]
    fn deserialize_rejects_empty() {
        let result: Result<Element, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
        let ok: Element = serde_json::from_str("\"quality\"").unwrap();
        assert_eq!(ok.as_str(), "quality");
    }
}
