//! User record stored by the directory.

use std::{fmt, mem};

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, Zeroizing};

/// Externally assigned user identifier.
///
/// The directory never allocates identifiers and does not enforce their
/// uniqueness; see [`crate::UserDirectory::get_all_converted_by_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw integer identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<UserId> for i32 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Directory user record.
///
/// ## Invariants
/// - Immutable once constructed; only getters are exposed.
/// - Equality is structural over `id`, `user_name`, and `password`.
/// - The password is plain text and compared verbatim. Its buffer is wiped
///   on drop, and so is the intermediate copy made while (de)serializing.
///   Bytes already handed to a serializer's output are the caller's to wipe.
///
/// # Examples
/// ```
/// use user_directory::User;
///
/// let ivan = User::new(1, "Ivan", "123");
/// assert_eq!(ivan.id().get(), 1);
/// assert_eq!(ivan.user_name(), "Ivan");
/// assert_eq!(ivan, User::new(1, "Ivan", "123"));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    user_name: String,
    password: Zeroizing<String>,
}

impl User {
    /// Build a record from its parts.
    pub fn new(
        id: impl Into<UserId>,
        user_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user_name: user_name.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Externally assigned identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Login name, matched case-sensitively.
    #[must_use]
    pub const fn user_name(&self) -> &str {
        self.user_name.as_str()
    }

    /// Plain-text password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    pub(crate) fn matches(&self, user_name: &str, password: &str) -> bool {
        self.user_name == user_name && self.password.as_str() == password
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("user_name", &self.user_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct UserDto {
    id: i32,
    #[serde(alias = "user_name")]
    user_name: String,
    password: String,
}

impl UserDto {
    fn wipe(&mut self) {
        self.password.zeroize();
    }
}

impl Drop for UserDto {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        Self {
            id: value.id.get(),
            password: value.password.as_str().to_owned(),
            user_name: value.user_name,
        }
    }
}

impl From<UserDto> for User {
    fn from(mut value: UserDto) -> Self {
        Self::new(
            value.id,
            mem::take(&mut value.user_name),
            mem::take(&mut value.password),
        )
    }
}
