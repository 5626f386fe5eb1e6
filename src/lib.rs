//! # conllu
//!
//! A parser and serializer for CoNLL-U token lines.
//!
//! Each line of a CoNLL-U token table becomes a [`Token`]: ten typed fields,
//! editable in place, rendering back to the exact original line (or the
//! faithfully-updated line after edits) through `Display`. See the
//! [conllu module](crate::conllu) for the field semantics and the underscore
//! placeholder rules.

pub mod conllu;

pub use conllu::{Attributes, ParseError, Relations, Token, UnderscorePolicy};
