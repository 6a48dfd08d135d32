//! Ordered list of contact entries

use super::entry::{Entry, EntryField};
use serde::{Deserialize, Serialize};

/// The entries currently shown in the form, in display and submission order.
///
/// Never empty. Every transition returns a new value and leaves `self` as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Entry>", into = "Vec<Entry>")]
pub struct FormState {
    entries: Vec<Entry>,
}

impl FormState {
    /// A form holding a single empty entry
    pub fn new() -> Self {
        Self {
            entries: vec![Entry::default()],
        }
    }

    /// Build from existing entries. An empty list yields a single empty entry.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        if entries.is_empty() {
            Self::new()
        } else {
            Self { entries }
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Whether an entry can be removed without dropping below one
    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    /// Append an empty entry
    pub fn add_entry(&self) -> Self {
        let mut entries = self.entries.clone();
        entries.push(Entry::default());
        Self { entries }
    }

    /// Drop the entry at `index`. Entries above it shift down by one.
    ///
    /// Returns `None` when the form holds a single entry or the index is out
    /// of range.
    pub fn remove_entry(&self, index: usize) -> Option<Self> {
        if !self.can_remove() || index >= self.entries.len() {
            return None;
        }
        let entries = self
            .entries
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, entry)| entry.clone())
            .collect();
        Some(Self { entries })
    }

    /// Replace one attribute of the entry at `index`
    pub fn update_entry(&self, index: usize, field: EntryField, value: impl Into<String>) -> Self {
        let value = value.into();
        let entries = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                if i == index {
                    entry.with(field, value.clone())
                } else {
                    entry.clone()
                }
            })
            .collect();
        Self { entries }
    }

    /// Position of the first empty input, scanning entries in order
    pub fn first_missing(&self) -> Option<(usize, EntryField)> {
        self.entries
            .iter()
            .enumerate()
            .find_map(|(i, entry)| Some((i, entry.first_empty_field()?)))
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Entry>> for FormState {
    fn from(entries: Vec<Entry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<FormState> for Vec<Entry> {
    fn from(form: FormState) -> Self {
        form.entries
    }
}
