//! User Store Core
//!
//! Domain types for the user store: the `User` entity and its builder.
//!
//! The entity is a plain data holder. It performs no validation beyond the
//! trivial `is_valid` convenience check; uniqueness and required-field
//! constraints are enforced by the storage layer's schema.
//!
//! # Example
//!
//! ```rust
//! use user_core::User;
//!
//! let user = User::builder()
//!     .username("alice")
//!     .email("alice@example.com")
//!     .first_name("Alice")
//!     .last_name("Smith")
//!     .build();
//!
//! assert!(user.id.is_none()); // not persisted yet
//! assert_eq!(user.full_name(), "Alice Smith");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod types;

pub use types::{User, UserBuilder, UserId};
