use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Each pass sees the output of the previous one
    static ref LOWER_UPPER: Regex = Regex::new(r"([a-z])([A-Z])").unwrap();
    static ref ACRONYM_WORD: Regex = Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap();
}

/// Convert a camelCase, PascalCase or separated identifier to snake_case
///
/// `someVariableName => some_variable_name`
///
/// Runs of capitals are treated as one word, and the last capital of the run
/// starts a new word when a lowercase letter follows it
///
/// `HTTPServer => http_server`
///
/// A trailing run with nothing lowercase after it is left in one piece
///
/// `parseXML => parse_xml`, `XMLHTTP => xmlhttp`
pub fn to_snake_case(identifier: &str) -> String {
    let humps = LOWER_UPPER.replace_all(identifier, "${1}_${2}");
    let acronyms = ACRONYM_WORD.replace_all(&humps, "${1}_${2}");
    acronyms.to_lowercase()
}

pub fn is_snake_case(identifier: &str) -> bool {
    to_snake_case(identifier) == identifier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::is_valid_identifier;

    const SAMPLES: &[&str] = &[
        "someVariableName",
        "SomeVariable",
        "HTTPServer",
        "already_snake",
        "ABC",
        "Some_Variable",
        "getHTTPResponseCode",
        "parseXML",
        "_privateField",
        "__init__",
        "x1Y2z3",
        "IOError",
        "aB",
        "A",
        "_",
    ];

    #[test]
    fn test_worked_conversions() {
        assert_eq!(to_snake_case("someVariableName"), "some_variable_name");
        assert_eq!(to_snake_case("SomeVariable"), "some_variable");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("ABC"), "abc");
    }

    #[test]
    fn test_existing_separators() {
        assert_eq!(to_snake_case("Some_Variable"), "some_variable");
        assert_eq!(to_snake_case("_privateField"), "_private_field");
        assert_eq!(to_snake_case("__init__"), "__init__");
    }

    #[test]
    fn test_single_case_identifiers() {
        assert_eq!(to_snake_case("name"), "name");
        assert_eq!(to_snake_case("NAME"), "name");
    }

    #[test]
    fn test_acronyms() {
        assert_eq!(to_snake_case("getHTTPResponseCode"), "get_http_response_code");
        assert_eq!(to_snake_case("IOError"), "io_error");
        assert_eq!(to_snake_case("abCDe"), "ab_c_de");
    }

    #[test]
    fn test_trailing_acronym_stays_whole() {
        assert_eq!(to_snake_case("parseXML"), "parse_xml");
        assert_eq!(to_snake_case("XMLHTTP"), "xmlhttp");
    }

    #[test]
    fn test_digits_do_not_split() {
        assert_eq!(to_snake_case("x1Y2z3"), "x1y2z3");
        assert_eq!(to_snake_case("getHTTP2Server"), "get_http2server");
    }

    #[test]
    fn test_output_is_snake_identifier() {
        for sample in SAMPLES {
            let snake = to_snake_case(sample);
            assert!(is_valid_identifier(&snake), "{} -> {}", sample, snake);
            assert!(
                snake
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "{} -> {}",
                sample,
                snake
            );
            let first = snake.chars().next().unwrap();
            assert!(first.is_ascii_lowercase() || first == '_');
        }
    }

    #[test]
    fn test_idempotent() {
        for sample in SAMPLES {
            let once = to_snake_case(sample);
            assert_eq!(to_snake_case(&once), once);
            assert!(is_snake_case(&once));
        }
    }

    #[test]
    fn test_is_snake_case() {
        assert!(is_snake_case("already_snake"));
        assert!(!is_snake_case("camelCase"));
        assert!(!is_snake_case("NAME"));
    }
}
