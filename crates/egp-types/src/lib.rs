/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// A free-text answer to a user prompt, guaranteed to be non-empty.
///
/// Prompt answers arrive as raw strings from whatever front-end collected
/// them. This type trims surrounding whitespace during construction and
/// guarantees at least one remaining non-whitespace character, so a
/// dismissed or blank answer can never masquerade as a real one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptText(String);

impl PromptText {
    /// Creates a new `PromptText` from the given answer.
    ///
    /// Leading and trailing whitespace is removed. If nothing remains,
    /// `Err(TextError::Empty)` is returned and the caller should treat the
    /// prompt as cancelled.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value and returns the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PromptText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PromptText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for PromptText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PromptText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PromptText::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_surrounding_whitespace() {
        let text = PromptText::new("  Headache \n").unwrap();
        assert_eq!(text.as_str(), "Headache");
    }

    #[test]
    fn test_rejects_empty_and_whitespace_only() {
        assert!(matches!(PromptText::new(""), Err(TextError::Empty)));
        assert!(matches!(PromptText::new("   \t"), Err(TextError::Empty)));
    }

    #[test]
    fn test_display_matches_inner_text() {
        let text = PromptText::new("Fever").unwrap();
        assert_eq!(text.to_string(), "Fever");
        assert_eq!(text.into_string(), "Fever");
    }
}
