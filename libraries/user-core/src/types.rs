//! User domain type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identifier, assigned by the store on creation
pub type UserId = i32;

/// A user account record
///
/// `id`, `created_at`, and `updated_at` are `None` until the record has been
/// persisted; the store assigns all three on create and refreshes only
/// `updated_at` afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct User {
    /// Store-assigned identifier
    pub id: Option<UserId>,

    /// Login name, unique across all users
    pub username: String,

    /// Email address, unique across all users
    pub email: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Set once when the row is inserted
    pub created_at: Option<DateTime<Utc>>,

    /// Refreshed on every successful update
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a user with the required identity fields only
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            email: email.into(),
            first_name: String::new(),
            last_name: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Create a user with all profile fields
    pub fn with_names(
        username: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            username: username.into(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Start building a user field by field
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Full display name, degrading gracefully when parts are missing
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }

    /// Whether the required identity fields are present
    pub fn is_valid(&self) -> bool {
        !self.username.is_empty() && !self.email.is_empty()
    }
}

// Equality is identity-based: two users are the same record iff their
// (id, username, email) tuples match. Profile fields and timestamps are
// deliberately excluded.
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.username == other.username && self.email == other.email
    }
}

impl Eq for User {}

/// Fluent builder for [`User`]
///
/// Any subset of fields may be set before `build`; unset string fields
/// default to empty. No validation is performed here.
#[derive(Debug, Default, Clone)]
pub struct UserBuilder {
    id: Option<UserId>,
    username: Option<String>,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl UserBuilder {
    /// Set the identifier (normally left to the store)
    pub fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the email address
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the given name
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the family name
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Finalize the entity
    pub fn build(self) -> User {
        User {
            id: self.id,
            username: self.username.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            created_at: None,
            updated_at: None,
        }
    }
}
