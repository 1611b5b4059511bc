//! Minimal in-memory user directory.
//!
//! The crate stores user records in insertion order, authenticates them by
//! exact user name and password equality, and indexes them by id. It is
//! meant to be embedded: persistence, transport, and password hardening
//! belong to the surrounding application.
//!
//! # Overview
//!
//! - [`UserDirectory`] is the single-owner, append-only directory.
//! - [`SharedUserDirectory`] wraps it behind a lock for multi-threaded use.
//! - [`DirectorySettings`] carries layered configuration.
//! - [`DirectoryError`] covers absent login arguments and duplicate ids.
//!
//! # Example
//!
//! ```
//! use user_directory::{DirectoryError, User, UserDirectory, UserId};
//!
//! let mut directory = UserDirectory::new();
//! directory.add(User::new(1, "Ivan", "123"));
//! directory.add(User::new(2, "Petr", "111"));
//!
//! assert!(directory.login(Some("Petr"), Some("wrong")).unwrap().is_none());
//!
//! let by_id = directory.get_all_converted_by_id().unwrap();
//! assert_eq!(by_id[&UserId::new(1)].user_name(), "Ivan");
//!
//! directory.add(User::new(2, "Oleg", "222"));
//! assert_eq!(
//!     directory.get_all_converted_by_id(),
//!     Err(DirectoryError::DuplicateKey { id: UserId::new(2) })
//! );
//! ```

mod auth;
mod config;
mod directory;
mod error;
mod shared;
mod user;

pub use auth::LoginCredentials;
pub use config::DirectorySettings;
pub use directory::UserDirectory;
pub use error::{DirectoryError, DirectoryResult};
pub use shared::SharedUserDirectory;
pub use user::{User, UserId};
