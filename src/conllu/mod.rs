//! Parsing and serialization of CoNLL-U token lines.
//!
//! One line of a CoNLL-U token table maps to one [`Token`]; the token maps
//! back to the exact line through [`std::fmt::Display`]. Document and
//! sentence handling (comment lines, blank-line block separation, file I/O)
//! live with the consumers of this module.

pub mod attributes;
pub mod error;
pub mod relations;
pub mod token;

pub use attributes::Attributes;
pub use error::ParseError;
pub use relations::Relations;
pub use token::{Token, UnderscorePolicy};

/// The placeholder marking an absent value in a field
pub const PLACEHOLDER: &str = "_";

/// Number of tab-separated fields in a token line
pub const FIELD_COUNT: usize = 10;
