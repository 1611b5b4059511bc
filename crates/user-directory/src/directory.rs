//! Append-only, single-owner user directory.
//!
//! Records keep their insertion order. Reads borrow the directory, `add`
//! borrows it mutably, so concurrent mutation needs an outer lock such as
//! [`crate::SharedUserDirectory`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::slice;

use tracing::{debug, warn};

use crate::auth::LoginCredentials;
use crate::config::DirectorySettings;
use crate::error::{DirectoryError, DirectoryResult};
use crate::user::{User, UserId};

/// Ordered in-memory collection of users.
///
/// Duplicate ids and user names are accepted and coexist; [`Self::login`]
/// resolves ties to the earliest record and
/// [`Self::get_all_converted_by_id`] refuses to index duplicate ids.
///
/// # Examples
/// ```
/// use user_directory::{User, UserDirectory};
///
/// let mut directory = UserDirectory::new();
/// directory.add(User::new(1, "Ivan", "123"));
///
/// let found = directory.login(Some("Ivan"), Some("123")).unwrap();
/// assert_eq!(found, Some(&User::new(1, "Ivan", "123")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Create an empty directory.
    #[must_use]
    pub const fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Create an empty directory with room for `capacity` records.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            users: Vec::with_capacity(capacity),
        }
    }

    /// Create an empty directory sized from configuration.
    #[must_use]
    pub fn from_settings(settings: &DirectorySettings) -> Self {
        Self::with_capacity(settings.initial_capacity())
    }

    /// Append a record. Always returns `true`.
    pub fn add(&mut self, user: User) -> bool {
        debug!(
            user_id = %user.id(),
            user_name = user.user_name(),
            len = self.users.len() + 1,
            "user added to directory"
        );
        self.users.push(user);
        true
    }

    /// All records in insertion order.
    #[must_use]
    pub fn get_all(&self) -> &[User] {
        &self.users
    }

    /// Find the first user matching both the user name and password.
    ///
    /// Matching is exact string equality on both fields.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::InvalidArgument`] when either argument is
    /// `None`, whatever the directory holds.
    pub fn login(
        &self,
        user_name: Option<&str>,
        password: Option<&str>,
    ) -> DirectoryResult<Option<&User>> {
        let credentials = LoginCredentials::try_from_parts(user_name, password)?;
        Ok(self.authenticate(&credentials))
    }

    /// Find the first user matching already validated credentials.
    #[must_use]
    pub fn authenticate(&self, credentials: &LoginCredentials) -> Option<&User> {
        let found = self
            .users
            .iter()
            .find(|user| user.matches(credentials.user_name(), credentials.password()));
        debug!(
            user_name = credentials.user_name(),
            matched = found.is_some(),
            "login attempt"
        );
        found
    }

    /// Index every record by id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::DuplicateKey`] for the first id that occurs
    /// more than once. Nothing is overwritten.
    pub fn get_all_converted_by_id(&self) -> DirectoryResult<HashMap<UserId, User>> {
        let mut index = HashMap::with_capacity(self.users.len());
        for user in &self.users {
            match index.entry(user.id()) {
                Entry::Occupied(_) => {
                    warn!(user_id = %user.id(), "duplicate user id blocks id index");
                    return Err(DirectoryError::DuplicateKey { id: user.id() });
                }
                Entry::Vacant(slot) => {
                    slot.insert(user.clone());
                }
            }
        }
        debug!(size = index.len(), "built user id index");
        Ok(index)
    }

    /// Number of stored records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no record has been added.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, User> {
        self.users.iter()
    }
}

impl Extend<User> for UserDirectory {
    fn extend<I: IntoIterator<Item = User>>(&mut self, iter: I) {
        for user in iter {
            self.add(user);
        }
    }
}

impl FromIterator<User> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        let mut directory = Self::new();
        directory.extend(iter);
        directory
    }
}

impl<'a> IntoIterator for &'a UserDirectory {
    type Item = &'a User;
    type IntoIter = slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests;
