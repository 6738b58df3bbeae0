use serde::{Deserialize, Serialize};

/// A user record, as returned by the directory endpoint
///
/// Only the fields shown on screen are kept, everything else in the record is
/// ignored while decoding.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct User {
    /// Their unique id
    pub id: u64,
    /// Their display name
    pub name: String,
    /// The company they work for
    pub company: Company,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Company {
    pub name: String,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            company: Company {
                name: company.into(),
            },
        }
    }

    /// Whether this user's name contains the already-lowercased `needle`
    pub(crate) fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    pub fn as_row(&self) -> Row<'_> {
        Row {
            primary: &self.name,
            secondary: &self.company.name,
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// A single rendered line: the user's name and their company
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Row<'a> {
    pub primary: &'a str,
    pub secondary: &'a str,
}
