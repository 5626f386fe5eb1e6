//! Errors raised while parsing a CoNLL-U token line.
//!
//! All errors surface at construction time. Mutating or serializing an
//! already-built [`Token`](super::Token) never fails; a malformed line never
//! yields a partial token.

use std::fmt;

/// Errors that can occur while parsing one token line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line does not split into exactly ten tab-separated fields
    MalformedLine { found: usize, line: String },
    /// A FEATS or MISC entry is missing the `=` separator
    MalformedAttribute { entry: String },
    /// A DEPS entry is missing the `:` separator
    MalformedDeps { entry: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedLine { found, line } => write!(
                f,
                "expected 10 tab-separated fields, found {}: {:?}",
                found, line
            ),
            ParseError::MalformedAttribute { entry } => {
                write!(f, "attribute entry {:?} is missing the '=' separator", entry)
            }
            ParseError::MalformedDeps { entry } => {
                write!(f, "deps entry {:?} is missing the ':' separator", entry)
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_line_display() {
        let err = ParseError::MalformedLine {
            found: 3,
            line: "a\tb\tc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "expected 10 tab-separated fields, found 3: \"a\\tb\\tc\""
        );
    }

    #[test]
    fn test_malformed_attribute_display() {
        let err = ParseError::MalformedAttribute {
            entry: "Gender".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "attribute entry \"Gender\" is missing the '=' separator"
        );
    }

    #[test]
    fn test_malformed_deps_display() {
        let err = ParseError::MalformedDeps {
            entry: "2nsubj".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "deps entry \"2nsubj\" is missing the ':' separator"
        );
    }
}
