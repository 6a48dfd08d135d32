//! Contact entry value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One name/email pair in the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub email: String,
}

impl Entry {
    /// Create an entry with both values set
    #[cfg(test)]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Get the value of one attribute
    pub fn get(&self, field: EntryField) -> &str {
        match field {
            EntryField::Name => &self.name,
            EntryField::Email => &self.email,
        }
    }

    /// Return a copy with one attribute replaced
    pub fn with(&self, field: EntryField, value: impl Into<String>) -> Self {
        let mut entry = self.clone();
        match field {
            EntryField::Name => entry.name = value.into(),
            EntryField::Email => entry.email = value.into(),
        }
        entry
    }

    /// First attribute left empty, in input order
    pub fn first_empty_field(&self) -> Option<EntryField> {
        EntryField::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }
}

/// Attribute of an entry, addressed the way the inputs are named
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    Name,
    Email,
}

impl EntryField {
    /// Both attributes in render order
    pub const ALL: [EntryField; 2] = [EntryField::Name, EntryField::Email];

    /// Input name, as it appears in the payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
        }
    }

    /// Placeholder shown while the input is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Name => "👤",
            Self::Email => "✉",
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input name that is neither `name` nor `email`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entry field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for EntryField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_entry_is_empty() {
        let entry = Entry::default();
        assert_eq!(entry.name, "");
        assert_eq!(entry.email, "");
    }

    #[test]
    fn test_with_replaces_only_named_field() {
        let entry = Entry::new("Alice", "a@x.com");
        let renamed = entry.with(EntryField::Name, "Alicia");
        assert_eq!(renamed, Entry::new("Alicia", "a@x.com"));
        assert_eq!(entry, Entry::new("Alice", "a@x.com"));
    }

    #[test]
    fn test_get_reads_field() {
        let entry = Entry::new("Bob", "b@x.com");
        assert_eq!(entry.get(EntryField::Name), "Bob");
        assert_eq!(entry.get(EntryField::Email), "b@x.com");
    }

    #[test]
    fn test_first_empty_field() {
        assert_eq!(Entry::default().first_empty_field(), Some(EntryField::Name));
        assert_eq!(
            Entry::new("Bob", "").first_empty_field(),
            Some(EntryField::Email)
        );
        assert_eq!(Entry::new("Bob", "b@x.com").first_empty_field(), None);
    }

    #[test]
    fn test_field_parses_input_names() {
        assert_eq!("name".parse::<EntryField>(), Ok(EntryField::Name));
        assert_eq!("email".parse::<EntryField>(), Ok(EntryField::Email));
        assert_eq!(
            "phone".parse::<EntryField>(),
            Err(UnknownField("phone".to_string()))
        );
    }

    #[test]
    fn test_serializes_as_name_email_object() {
        let json = serde_json::to_value(Entry::new("Alice", "a@x.com")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Alice", "email": "a@x.com"})
        );
    }
}
