//! One token line of a CoNLL-U table
//!
//!     A token line carries exactly ten tab-separated fields in fixed order:
//!     ID, FORM, LEMMA, UPOS, XPOS, FEATS, HEAD, DEPREL, DEPS, MISC. The ID
//!     is an integer index ("7"), a multiword range ("8-9") or an empty-node
//!     decimal index ("10.1"). FEATS and MISC share the attribute sub-grammar
//!     handled by [`Attributes`]; DEPS uses the edge sub-grammar handled by
//!     [`Relations`].
//!
//!     The underscore does triple duty in this format: it marks an absent
//!     scalar value, an empty FEATS/DEPS/MISC map, and in some corpora it is
//!     a genuine surface token. [`UnderscorePolicy`] controls the third
//!     reading at construction time; the first two are fixed by field
//!     identity.
//!
//!     Parsing, mutation and serialization are three operations on the one
//!     record and are mutually inverse wherever the grammar allows: a parsed
//!     line renders back byte-for-byte (minus the trailing newline), and any
//!     edit is visible in the very next rendering.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::attributes::Attributes;
use super::error::ParseError;
use super::relations::Relations;
use super::{FIELD_COUNT, PLACEHOLDER};

static MULTIWORD_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+-\d+$").expect("multiword id pattern is valid"));
static EMPTY_NODE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+$").expect("empty node id pattern is valid"));

/// How an underscore in the FORM and LEMMA columns is read at construction
///
/// Some corpora contain the underscore as a real (degenerate) surface token
/// rather than as the absence marker. The policy is chosen per construction
/// call and applies to that whole line; it never affects the ID column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum UnderscorePolicy {
    /// The underscore marks an absent value (the normal CoNLL-U reading)
    #[default]
    Marker,
    /// The underscore is kept as literal FORM/LEMMA content when both
    /// columns carry it. A lone underscore in either column, or one in any
    /// other scalar column, still reads as absent: a present value next to
    /// an underscore disambiguates the underscore as a marker.
    Literal,
}

/// One token (or multiword span, or empty node) of a dependency-annotated
/// sentence
///
/// Scalar fields are plain `pub` fields and are edited by direct assignment.
/// `feats`, `deps` and `misc` are the live field containers: mutating them
/// through their APIs mutates the token, and the change shows up in the next
/// [`fmt::Display`] rendering without any commit step.
///
/// The parser stores whatever well-formed text is present; it does not
/// enforce semantic constraints such as multiword rows carrying no lemma or
/// head. [`Token::is_multiword`] exposes the predicate so callers can
/// enforce that convention themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    /// Token index: integer, `m-n` multiword range, or `m.n` empty node
    pub id: String,
    /// Surface form
    pub form: Option<String>,
    /// Canonical form
    pub lemma: Option<String>,
    /// Universal part-of-speech tag
    pub upos: Option<String>,
    /// Language-specific part-of-speech tag
    pub xpos: Option<String>,
    /// Morphological features
    pub feats: Attributes,
    /// Governor token id
    pub head: Option<String>,
    /// Relation to the governor
    pub deprel: Option<String>,
    /// Secondary dependency edges
    pub deps: Relations,
    /// Free-form annotations
    pub misc: Attributes,
}

impl Token {
    /// Parse a token line with the default [`UnderscorePolicy::Marker`]
    pub fn from_line(line: &str) -> Result<Self, ParseError> {
        Self::from_line_with(line, UnderscorePolicy::Marker)
    }

    /// Parse a token line under an explicit underscore policy.
    ///
    /// At most one trailing line terminator (`\n` or `\r\n`) is stripped;
    /// no other whitespace is touched, since spaces inside a field are
    /// content. The line must split into exactly ten tab-separated fields.
    pub fn from_line_with(line: &str, policy: UnderscorePolicy) -> Result<Self, ParseError> {
        let line = strip_line_terminator(line);
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != FIELD_COUNT {
            return Err(ParseError::MalformedLine {
                found: fields.len(),
                line: line.to_string(),
            });
        }

        let mut token = Token {
            id: fields[0].to_string(),
            form: scalar(fields[1]),
            lemma: scalar(fields[2]),
            upos: scalar(fields[3]),
            xpos: scalar(fields[4]),
            feats: Attributes::parse(fields[5])?,
            head: scalar(fields[6]),
            deprel: scalar(fields[7]),
            deps: Relations::parse(fields[8])?,
            misc: Attributes::parse(fields[9])?,
        };

        if policy == UnderscorePolicy::Literal
            && fields[1] == PLACEHOLDER
            && fields[2] == PLACEHOLDER
        {
            token.form = Some(PLACEHOLDER.to_string());
            token.lemma = Some(PLACEHOLDER.to_string());
        }

        Ok(token)
    }

    /// True if the id is a multiword range (`m-n`)
    pub fn is_multiword(&self) -> bool {
        MULTIWORD_ID.is_match(&self.id)
    }

    /// True if the id is an empty-node index (`m.n`)
    pub fn is_empty_node(&self) -> bool {
        EMPTY_NODE_ID.is_match(&self.id)
    }
}

/// Strip at most one trailing line terminator
fn strip_line_terminator(line: &str) -> &str {
    match line.strip_suffix("\r\n") {
        Some(stripped) => stripped,
        None => line.strip_suffix('\n').unwrap_or(line),
    }
}

/// Resolve one scalar column: the placeholder reads as absent
fn scalar(raw: &str) -> Option<String> {
    if raw == PLACEHOLDER {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Render one scalar column: absent renders as the placeholder
fn render(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(PLACEHOLDER)
}

impl fmt::Display for Token {
    /// Serialize back to the token line form, without a trailing newline
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.id,
            render(&self.form),
            render(&self.lemma),
            render(&self.upos),
            render(&self.xpos),
            self.feats,
            render(&self.head),
            render(&self.deprel),
            self.deps,
            self.misc
        )
    }
}
