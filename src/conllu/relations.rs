//! Ordered head-to-relation map for the DEPS field
//!
//! The sub-grammar is `Head1:Rel1|Head2:Rel2`: pipe-separated edges, the
//! first `:` splits the governor id from the relation label. Lookup is by
//! head id; entry order is preserved so the field serializes back exactly as
//! it was read. Like [`Attributes`](super::Attributes), the map exposed on a
//! token is the live field state and mutates in place.

use std::fmt;

use super::error::ParseError;
use super::PLACEHOLDER;

/// An insertion-ordered map from head token id to relation label
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Relations {
    entries: Vec<(String, String)>,
}

impl Relations {
    /// Create an empty relation map
    pub fn new() -> Self {
        Relations {
            entries: Vec::new(),
        }
    }

    /// Parse one DEPS field. The placeholder denotes an empty map.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let mut deps = Relations::new();
        if raw == PLACEHOLDER {
            return Ok(deps);
        }
        for entry in raw.split('|') {
            let (head, relation) = entry
                .split_once(':')
                .ok_or_else(|| ParseError::MalformedDeps {
                    entry: entry.to_string(),
                })?;
            deps.insert(head, relation);
        }
        Ok(deps)
    }

    /// True if no edge is present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if an edge to the given head is present
    pub fn contains(&self, head: &str) -> bool {
        self.entries.iter().any(|(h, _)| h == head)
    }

    /// Get the relation label of the edge to a head
    pub fn get(&self, head: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(h, _)| h == head)
            .map(|(_, relation)| relation.as_str())
    }

    /// Get the live relation label of the edge to a head
    pub fn get_mut(&mut self, head: &str) -> Option<&mut String> {
        self.entries
            .iter_mut()
            .find(|(h, _)| h == head)
            .map(|(_, relation)| relation)
    }

    /// Set the relation for a head. An existing edge is relabeled in place,
    /// keeping its position; a new head is appended.
    pub fn insert(&mut self, head: &str, relation: &str) {
        match self.get_mut(head) {
            Some(existing) => *existing = relation.to_string(),
            None => self
                .entries
                .push((head.to_string(), relation.to_string())),
        }
    }

    /// Remove the edge to a head, returning its relation label
    pub fn remove(&mut self, head: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(h, _)| h == head)?;
        Some(self.entries.remove(pos).1)
    }

    /// Iterate over `(head, relation)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(head, relation)| (head.as_str(), relation.as_str()))
    }
}

impl fmt::Display for Relations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str(PLACEHOLDER);
        }
        for (i, (head, relation)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}:{}", head, relation)?;
        }
        Ok(())
    }
}
