//! Ordered find/replace mapping.

use std::collections::HashMap;

/// A single literal substitution rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub find: String,
    pub replace: String,
}

impl MappingEntry {
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
        }
    }
}

/// Ordered collection of [`MappingEntry`] keyed by the find string.
///
/// Iteration order is first-seen insertion order. The table is immutable once
/// built; use [`MappingTableBuilder`] to construct one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
    index: HashMap<String, usize>,
}

impl MappingTable {
    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the replacement registered for `find`.
    pub fn get(&self, find: &str) -> Option<&str> {
        self.index
            .get(find)
            .map(|&idx| self.entries[idx].replace.as_str())
    }

    /// Returns true if `find` is a key of this table.
    pub fn contains(&self, find: &str) -> bool {
        self.index.contains_key(find)
    }

    /// Iterates the rules in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, MappingEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a MappingTable {
    type Item = &'a MappingEntry;
    type IntoIter = std::slice::Iter<'a, MappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Outcome of [`MappingTableBuilder::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The find string was new and has been added.
    Inserted,
    /// The find string already existed; the first replacement was kept.
    Duplicate,
}

/// Accumulates rules in order, keeping the first replacement for each key.
#[derive(Debug, Default)]
pub struct MappingTableBuilder {
    table: MappingTable,
}

impl MappingTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule unless `find` is already present. Existing rules are never
    /// overwritten.
    pub fn insert(&mut self, find: impl Into<String>, replace: impl Into<String>) -> Insertion {
        let find = find.into();
        if self.table.index.contains_key(&find) {
            return Insertion::Duplicate;
        }
        self.table
            .index
            .insert(find.clone(), self.table.entries.len());
        self.table.entries.push(MappingEntry::new(find, replace));
        Insertion::Inserted
    }

    pub fn contains(&self, find: &str) -> bool {
        self.table.contains(find)
    }

    pub fn build(self) -> MappingTable {
        self.table
    }
}

impl FromIterator<MappingEntry> for MappingTable {
    /// Collects entries with first-occurrence-wins semantics.
    fn from_iter<I: IntoIterator<Item = MappingEntry>>(iter: I) -> Self {
        let mut builder = MappingTableBuilder::new();
        for entry in iter {
            builder.insert(entry.find, entry.replace);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_first_value() {
        let mut builder = MappingTableBuilder::new();
        assert_eq!(builder.insert("x", "1"), Insertion::Inserted);
        assert_eq!(builder.insert("x", "2"), Insertion::Duplicate);
        let table = builder.build();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("x"), Some("1"));
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let table: MappingTable = [
            MappingEntry::new("c", "3"),
            MappingEntry::new("a", "1"),
            MappingEntry::new("b", "2"),
        ]
        .into_iter()
        .collect();
        let finds: Vec<&str> = table.iter().map(|e| e.find.as_str()).collect();
        assert_eq!(finds, vec!["c", "a", "b"]);
    }

    #[test]
    fn empty_replacement_is_allowed() {
        let mut builder = MappingTableBuilder::new();
        builder.insert("drop me", "");
        let table = builder.build();
        assert_eq!(table.get("drop me"), Some(""));
        assert!(!table.contains("missing"));
    }
}
