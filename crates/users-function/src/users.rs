//! The fixed user table behind the API

use serde::{Deserialize, Serialize};

/// A user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    /// Only synthesized records carry a creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Id handed to every synthesized user on create. There is no store behind
/// the API, so the assignment is neither unique nor stable across calls.
pub const CREATED_USER_ID: u32 = 3;

/// Read-only directory of users.
///
/// Rebuilt from the same fixed records on every construction; a "created"
/// user is never retrievable afterward.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// The two fixed records the API serves
    pub fn seeded() -> Self {
        Self {
            users: vec![
                User {
                    id: 1,
                    name: "John Doe".to_string(),
                    email: "john@example.com".to_string(),
                    created_at: None,
                },
                User {
                    id: 2,
                    name: "Jane Smith".to_string(),
                    email: "jane@example.com".to_string(),
                    created_at: None,
                },
            ],
        }
    }

    /// All users, in fixed order
    pub fn all(&self) -> &[User] {
        &self.users
    }

    /// Look up a user by the raw id string taken from the path.
    ///
    /// The lookup is textual: "01" does not match id 1.
    pub fn find(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id.to_string() == id)
    }
}
