//! Error types for the user directory.
//!
//! Both variants signal caller-side problems: a missing login argument or a
//! record set that cannot be indexed by id. Neither is retried internally.

use thiserror::Error;

use crate::user::UserId;

/// Errors returned by directory operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// A required argument was absent.
    #[error("missing required argument: {argument}")]
    InvalidArgument {
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// Two records share the same identifier.
    #[error("duplicate user id {id} while building id index")]
    DuplicateKey {
        /// The identifier seen more than once.
        id: UserId,
    },
}

/// Convenient result alias for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
