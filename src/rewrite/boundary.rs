use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which characters count as part of an identifier when deciding whether a
/// match stands on its own
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryClass {
    /// `[A-Za-z0-9_]`
    #[default]
    Ascii,
    /// Approximates Java's identifier-part test: any alphanumeric
    /// character, connecting punctuation and currency symbols. Unlike Java,
    /// other numerics such as `²` count as identifier characters, while
    /// combining marks only count when they are alphabetic.
    Unicode,
}

/// Unicode connecting punctuation (`Pc`)
const CONNECTORS: &[char] = &[
    '_', '\u{203F}', '\u{2040}', '\u{2054}', '\u{FE33}', '\u{FE34}', '\u{FE4D}', '\u{FE4E}',
    '\u{FE4F}', '\u{FF3F}',
];

fn is_currency_symbol(ch: char) -> bool {
    matches!(
        ch,
        '$' | '\u{A2}'..='\u{A5}'
            | '\u{58F}'
            | '\u{60B}'
            | '\u{9F2}'
            | '\u{9F3}'
            | '\u{9FB}'
            | '\u{AF1}'
            | '\u{BF9}'
            | '\u{E3F}'
            | '\u{17DB}'
            | '\u{20A0}'..='\u{20C0}'
            | '\u{A838}'
            | '\u{FDFC}'
            | '\u{FE69}'
            | '\u{FF04}'
            | '\u{FFE0}'
            | '\u{FFE1}'
            | '\u{FFE5}'
            | '\u{FFE6}'
    )
}

impl BoundaryClass {
    pub fn is_identifier_char(self, ch: char) -> bool {
        match self {
            BoundaryClass::Ascii => ch.is_ascii_alphanumeric() || ch == '_',
            BoundaryClass::Unicode => {
                ch.is_alphanumeric() || CONNECTORS.contains(&ch) || is_currency_symbol(ch)
            }
        }
    }

    /// True when neither neighbour of `text[start..end]` is an identifier
    /// character. Buffer edges count as boundaries.
    pub fn is_delimited(self, text: &str, start: usize, end: usize) -> bool {
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();

        !before.is_some_and(|ch| self.is_identifier_char(ch))
            && !after.is_some_and(|ch| self.is_identifier_char(ch))
    }
}

impl FromStr for BoundaryClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascii" => Ok(BoundaryClass::Ascii),
            "unicode" => Ok(BoundaryClass::Unicode),
            _ => Err(format!("Unknown boundary class: {}", s)),
        }
    }
}

impl fmt::Display for BoundaryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryClass::Ascii => write!(f, "ascii"),
            BoundaryClass::Unicode => write!(f, "unicode"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_edges_are_boundaries() {
        let class = BoundaryClass::Ascii;
        assert!(class.is_delimited("count", 0, 5));
        assert!(class.is_delimited("count + 1", 0, 5));
        assert!(class.is_delimited("x = count", 4, 9));
    }

    #[test]
    fn test_identifier_neighbours() {
        let class = BoundaryClass::Ascii;
        assert!(!class.is_delimited("discount", 3, 8));
        assert!(!class.is_delimited("count1", 0, 5));
        assert!(!class.is_delimited("_count", 1, 6));
        assert!(class.is_delimited("(count)", 1, 6));
    }

    #[test]
    fn test_unicode_class() {
        assert!(BoundaryClass::Ascii.is_delimited("$count", 1, 6));
        assert!(!BoundaryClass::Unicode.is_delimited("$count", 1, 6));
        assert!(BoundaryClass::Ascii.is_delimited("écount", 2, 7));
        assert!(!BoundaryClass::Unicode.is_delimited("écount", 2, 7));
    }

    #[test]
    fn test_unicode_currency_and_connectors() {
        let class = BoundaryClass::Unicode;
        for ch in ['$', '€', '£', '¥', '＄', '‿', '⁀', '＿'] {
            assert!(class.is_identifier_char(ch), "{:?}", ch);
            assert!(!BoundaryClass::Ascii.is_identifier_char(ch) || ch == '_');
        }
        assert!(!class.is_delimited("€count", 3, 8));
        assert!(!class.is_delimited("count‿x", 0, 5));
        assert!(class.is_delimited("(count)", 1, 6));
        assert!(!class.is_identifier_char('-'));
        assert!(!class.is_identifier_char('+'));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("ASCII".parse::<BoundaryClass>(), Ok(BoundaryClass::Ascii));
        assert_eq!("unicode".parse::<BoundaryClass>(), Ok(BoundaryClass::Unicode));
        assert!("latin1".parse::<BoundaryClass>().is_err());
        assert_eq!(BoundaryClass::Unicode.to_string(), "unicode");
    }
}
