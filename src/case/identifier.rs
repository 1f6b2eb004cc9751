use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("selection is empty")]
    Empty,

    #[error("identifier cannot start with {0:?}")]
    InvalidStart(char),

    #[error("invalid character {ch:?} at byte {index}")]
    InvalidChar { ch: char, index: usize },
}

/// A validated `[A-Za-z_][A-Za-z0-9_]*` token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn parse(text: &str) -> Result<Self, IdentifierError> {
        let mut chars = text.char_indices();

        match chars.next() {
            None => return Err(IdentifierError::Empty),
            Some((_, ch)) if !is_start_char(ch) => return Err(IdentifierError::InvalidStart(ch)),
            Some(_) => {}
        }

        if let Some((index, ch)) = chars.find(|&(_, ch)| !is_continue_char(ch)) {
            return Err(IdentifierError::InvalidChar { ch, index });
        }

        Ok(Self(text.to_string()))
    }

    /// Validate an editor selection, which may be absent
    pub fn from_selection(selection: Option<&str>) -> Option<Self> {
        selection.and_then(|text| Self::parse(text).ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_snake_case(&self) -> String {
        super::snake::to_snake_case(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

pub fn is_valid_identifier(text: &str) -> bool {
    Identifier::parse(text).is_ok()
}

fn is_start_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_continue_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_identifiers() {
        assert!(is_valid_identifier("_x1"));
        assert!(is_valid_identifier("Foo"));
        assert!(is_valid_identifier("_"));
        assert!(is_valid_identifier("someVariableName"));
    }

    #[test]
    fn test_rejects_non_identifiers() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("123abc"));
        assert!(!is_valid_identifier("foo-bar"));
        assert!(!is_valid_identifier("foo bar"));
        assert!(!is_valid_identifier("naïve"));
    }

    #[test]
    fn test_absent_selection() {
        assert_eq!(Identifier::from_selection(None), None);
        assert_eq!(Identifier::from_selection(Some("")), None);
        assert_eq!(
            Identifier::from_selection(Some("count")).map(|id| id.to_string()),
            Some("count".to_string())
        );
    }

    #[test]
    fn test_rejection_reasons() {
        assert_eq!(Identifier::parse(""), Err(IdentifierError::Empty));
        assert_eq!(
            Identifier::parse("1abc"),
            Err(IdentifierError::InvalidStart('1'))
        );
        assert_eq!(
            Identifier::parse("foo-bar"),
            Err(IdentifierError::InvalidChar { ch: '-', index: 3 })
        );
    }

    #[test]
    fn test_from_str() {
        let id: Identifier = "HTTPServer".parse().unwrap();
        assert_eq!(id.as_str(), "HTTPServer");
        assert_eq!(id.to_snake_case(), "http_server");
    }
}
