//! Internally synchronized directory handle.
//!
//! Clones share one [`UserDirectory`] behind a read/write lock. Results are
//! returned as owned snapshots so no lock guard escapes a call.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::auth::LoginCredentials;
use crate::config::DirectorySettings;
use crate::directory::UserDirectory;
use crate::error::DirectoryResult;
use crate::user::{User, UserId};

/// Cloneable, thread-safe handle to a [`UserDirectory`].
///
/// # Examples
/// ```
/// use user_directory::{SharedUserDirectory, User};
///
/// let directory = SharedUserDirectory::new();
/// let writer = directory.clone();
/// std::thread::spawn(move || writer.add(User::new(1, "Ivan", "123")))
///     .join()
///     .unwrap();
///
/// assert_eq!(directory.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedUserDirectory {
    inner: Arc<RwLock<UserDirectory>>,
}

impl SharedUserDirectory {
    /// Create a handle to an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle to an empty directory sized from configuration.
    #[must_use]
    pub fn from_settings(settings: &DirectorySettings) -> Self {
        Self::from(UserDirectory::from_settings(settings))
    }

    /// Append a record. Always returns `true`.
    #[must_use]
    pub fn add(&self, user: User) -> bool {
        self.write().add(user)
    }

    /// Snapshot of all records in insertion order.
    #[must_use]
    pub fn get_all(&self) -> Vec<User> {
        self.read().get_all().to_vec()
    }

    /// See [`UserDirectory::login`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::DirectoryError::InvalidArgument`] when either
    /// argument is `None`.
    pub fn login(
        &self,
        user_name: Option<&str>,
        password: Option<&str>,
    ) -> DirectoryResult<Option<User>> {
        let credentials = LoginCredentials::try_from_parts(user_name, password)?;
        Ok(self.authenticate(&credentials))
    }

    /// See [`UserDirectory::authenticate`].
    #[must_use]
    pub fn authenticate(&self, credentials: &LoginCredentials) -> Option<User> {
        self.read().authenticate(credentials).cloned()
    }

    /// See [`UserDirectory::get_all_converted_by_id`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::DirectoryError::DuplicateKey`] when two records share
    /// an id.
    pub fn get_all_converted_by_id(&self) -> DirectoryResult<HashMap<UserId, User>> {
        self.read().get_all_converted_by_id()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no record has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Writers only ever push whole records, so a poisoned lock still guards a
    // consistent directory.
    fn read(&self) -> RwLockReadGuard<'_, UserDirectory> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, UserDirectory> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<UserDirectory> for SharedUserDirectory {
    fn from(directory: UserDirectory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }
}
