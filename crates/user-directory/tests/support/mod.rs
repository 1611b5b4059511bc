//! Shared fixtures for user directory integration tests.

use user_directory::{SharedUserDirectory, User};

const FIXTURE_USERS: &str = include_str!("../fixtures/users.json");

/// Users loaded from `tests/fixtures/users.json`, in file order.
pub fn fixture_users() -> Vec<User> {
    serde_json::from_str(FIXTURE_USERS)
        .unwrap_or_else(|err| panic!("fixture users must parse: {err}"))
}

/// A shared directory seeded with [`fixture_users`].
pub fn seeded_directory() -> SharedUserDirectory {
    let directory = SharedUserDirectory::new();
    for user in fixture_users() {
        assert!(directory.add(user), "fixture user must be added");
    }
    directory
}
