//! Login credentials accepted by the directory.
//!
//! Values are kept exactly as supplied: no trimming and no case folding, so
//! `" Ivan"` and `"ivan"` never match a user named `"Ivan"`.

use std::fmt;

use zeroize::Zeroizing;

use crate::error::{DirectoryError, DirectoryResult};

/// User name and password pair used to authenticate against a directory.
///
/// # Examples
/// ```
/// use user_directory::{DirectoryError, LoginCredentials};
///
/// let creds = LoginCredentials::try_from_parts(Some("Ivan"), Some("123")).unwrap();
/// assert_eq!(creds.user_name(), "Ivan");
///
/// let err = LoginCredentials::try_from_parts(Some("Ivan"), None).unwrap_err();
/// assert_eq!(err, DirectoryError::InvalidArgument { argument: "password" });
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    user_name: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Build credentials from present values.
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Build credentials from possibly absent values.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::InvalidArgument`] naming the first absent
    /// argument; `user_name` is checked before `password`.
    pub fn try_from_parts(
        user_name: Option<&str>,
        password: Option<&str>,
    ) -> DirectoryResult<Self> {
        let Some(name) = user_name else {
            return Err(DirectoryError::InvalidArgument {
                argument: "user_name",
            });
        };
        let Some(secret) = password else {
            return Err(DirectoryError::InvalidArgument {
                argument: "password",
            });
        };
        Ok(Self::new(name, secret))
    }

    /// User name to match.
    #[must_use]
    pub const fn user_name(&self) -> &str {
        self.user_name.as_str()
    }

    /// Password to match.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("user_name", &self.user_name)
            .field("password", &"<redacted>")
            .finish()
    }
}
