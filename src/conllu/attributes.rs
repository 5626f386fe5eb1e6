//! Ordered multi-valued attribute map for the FEATS and MISC fields
//!
//! The sub-grammar is `Name1=Val1,Val2|Name2=Val3`: pipe-separated entries,
//! the first `=` splits the name from its values, commas split the value list.
//! Attribute names keep their first-seen order so that a parsed line
//! serializes back with entries in the original order; the values of each
//! attribute live in a sorted set and always render in ascending order, which
//! is what makes serialization deterministic no matter the mutation order.
//!
//! The maps handed out by [`Token`](super::Token) are the live field state:
//! a value set obtained through [`Attributes::get_mut`] or
//! [`Attributes::entry`] aliases the token's own storage, so in-place
//! mutation changes what the next serialization emits with no commit step.
//! This aliasing is the intended mutation API, not an implementation leak.
//!
//! Mutation is not validated. Callers can build names or values that the
//! sub-grammar cannot re-read (for example a name containing `=`);
//! well-formedness is only enforced when a line is parsed.

use std::collections::BTreeSet;
use std::fmt;

use super::error::ParseError;
use super::PLACEHOLDER;

/// An insertion-ordered map from attribute name to a sorted set of values
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Attributes {
    entries: Vec<(String, BTreeSet<String>)>,
}

impl Attributes {
    /// Create an empty attribute map
    pub fn new() -> Self {
        Attributes {
            entries: Vec::new(),
        }
    }

    /// Parse one FEATS or MISC field.
    ///
    /// The placeholder denotes an empty map. A repeated attribute name merges
    /// its values into the set registered at the name's first position.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let mut attrs = Attributes::new();
        if raw == PLACEHOLDER {
            return Ok(attrs);
        }
        for entry in raw.split('|') {
            let (name, values) = entry
                .split_once('=')
                .ok_or_else(|| ParseError::MalformedAttribute {
                    entry: entry.to_string(),
                })?;
            let set = attrs.entry(name);
            for value in values.split(',') {
                set.insert(value.to_string());
            }
        }
        Ok(attrs)
    }

    /// True if no attribute is present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of attribute names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the attribute name is present
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Get the value set of an attribute
    pub fn get(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values)
    }

    /// Get the live value set of an attribute for in-place mutation
    pub fn get_mut(&mut self, name: &str) -> Option<&mut BTreeSet<String>> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values)
    }

    /// Get the live value set of an attribute, appending an empty entry for
    /// the name first if it is not present yet
    pub fn entry(&mut self, name: &str) -> &mut BTreeSet<String> {
        if let Some(pos) = self.entries.iter().position(|(n, _)| n == name) {
            return &mut self.entries[pos].1;
        }
        self.entries.push((name.to_string(), BTreeSet::new()));
        &mut self.entries.last_mut().expect("entry was just pushed").1
    }

    /// Add one value to an attribute, appending the name if needed
    pub fn add(&mut self, name: &str, value: &str) {
        self.entry(name).insert(value.to_string());
    }

    /// Remove an attribute entirely, returning its values
    pub fn remove(&mut self, name: &str) -> Option<BTreeSet<String>> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Iterate over `(name, values)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values))
    }
}

impl fmt::Display for Attributes {
    /// Render the field form: `_` when empty, otherwise pipe-joined
    /// `name=v1,v2` entries with values sorted ascending.
    ///
    /// An attribute whose value set was emptied through the live handle is
    /// treated as if the name were absent and skipped; when nothing is left
    /// to render the field collapses to the placeholder.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, values) in &self.entries {
            if values.is_empty() {
                continue;
            }
            if !first {
                f.write_str("|")?;
            }
            first = false;
            let joined = values.iter().cloned().collect::<Vec<_>>().join(",");
            write!(f, "{}={}", name, joined)?;
        }
        if first {
            f.write_str(PLACEHOLDER)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_placeholder_is_empty() {
        let attrs = Attributes::parse("_").unwrap();
        assert!(attrs.is_empty());
        assert_eq!(attrs.to_string(), "_");
    }

    #[test]
    fn test_parse_multiple_attributes() {
        let attrs = Attributes::parse("Gender=Fem|Number=Sing").unwrap();
        assert_eq!(attrs.len(), 2);
        assert!(attrs.get("Gender").unwrap().contains("Fem"));
        assert!(attrs.get("Number").unwrap().contains("Sing"));
    }

    #[test]
    fn test_parse_multi_valued_attribute() {
        let attrs = Attributes::parse("Definite=Ind,Def").unwrap();
        let values: Vec<_> = attrs.get("Definite").unwrap().iter().collect();
        assert_eq!(values, ["Def", "Ind"]);
    }

    #[test]
    fn test_parse_missing_separator() {
        let err = Attributes::parse("Gender=Fem|Number").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedAttribute {
                entry: "Number".to_string()
            }
        );
    }

    #[test]
    fn test_display_preserves_name_order() {
        let attrs = Attributes::parse("Number=Sing|Gender=Fem").unwrap();
        assert_eq!(attrs.to_string(), "Number=Sing|Gender=Fem");
    }

    #[test]
    fn test_display_sorts_values() {
        let mut attrs = Attributes::new();
        attrs.add("Gender", "Masc");
        attrs.add("Gender", "Fem");
        assert_eq!(attrs.to_string(), "Gender=Fem,Masc");
    }

    #[test]
    fn test_entry_aliases_live_state() {
        let mut attrs = Attributes::parse("Definite=Ind").unwrap();
        attrs.entry("Definite").insert("Def".to_string());
        assert_eq!(attrs.to_string(), "Definite=Def,Ind");
    }

    #[test]
    fn test_remove_returns_values() {
        let mut attrs = Attributes::parse("Gender=Fem|Number=Sing").unwrap();
        let removed = attrs.remove("Gender").unwrap();
        assert!(removed.contains("Fem"));
        assert_eq!(attrs.to_string(), "Number=Sing");
        assert!(attrs.remove("Gender").is_none());
    }

    #[test]
    fn test_emptied_value_set_is_skipped() {
        let mut attrs = Attributes::parse("Gender=Fem|Number=Sing").unwrap();
        attrs.get_mut("Gender").unwrap().clear();
        assert_eq!(attrs.to_string(), "Number=Sing");

        attrs.get_mut("Number").unwrap().clear();
        assert_eq!(attrs.to_string(), "_");
    }

    #[test]
    fn test_duplicate_names_merge() {
        let attrs = Attributes::parse("Gender=Fem|Gender=Masc").unwrap();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.to_string(), "Gender=Fem,Masc");
    }
}
