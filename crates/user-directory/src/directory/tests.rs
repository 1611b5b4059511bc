//! Tests for the user directory.

use super::*;
use rstest::{fixture, rstest};

fn ivan() -> User {
    User::new(1, "Ivan", "123")
}

fn petr() -> User {
    User::new(2, "Petr", "111")
}

fn oleg() -> User {
    User::new(3, "Oleg", "222")
}

#[fixture]
fn empty() -> UserDirectory {
    UserDirectory::new()
}

fn seeded() -> UserDirectory {
    [ivan(), petr()].into_iter().collect()
}

#[fixture]
fn populated() -> UserDirectory {
    seeded()
}

#[rstest]
fn users_empty_if_no_user_added(empty: UserDirectory) {
    assert!(empty.get_all().is_empty());
    assert!(empty.is_empty());
}

#[rstest]
fn users_size_if_users_added(mut empty: UserDirectory) {
    assert!(empty.add(ivan()));
    assert!(empty.add(petr()));
    assert!(empty.add(oleg()));

    assert_eq!(empty.get_all().len(), 3);
    assert_eq!(empty.len(), 3);
}

#[rstest]
fn add_appends_to_the_end(mut populated: UserDirectory) {
    let before = populated.len();
    populated.add(oleg());

    assert_eq!(populated.len(), before + 1);
    assert_eq!(populated.get_all().last(), Some(&oleg()));
    assert_eq!(populated.get_all(), [ivan(), petr(), oleg()].as_slice());
}

#[rstest]
fn add_accepts_duplicates(mut empty: UserDirectory) {
    assert!(empty.add(ivan()));
    assert!(empty.add(ivan()));
    assert!(empty.add(User::new(1, "Ivan", "other")));

    assert_eq!(empty.len(), 3);
}

#[rstest]
fn login_on_empty_directory_finds_nothing(empty: UserDirectory) {
    let found = empty.login(Some("Ivan"), Some("123")).expect("login");
    assert!(found.is_none());
}

#[rstest]
#[case("Ivan", "123", Some(ivan()))]
#[case("Petr", "111", Some(petr()))]
#[case("Petr", "dummy", None)]
#[case("dummy", "123", None)]
#[case("Kiril", "123", None)]
#[case("ivan", "123", None)]
#[case("Ivan ", "123", None)]
#[case(" Ivan", "123", None)]
#[case("Ivan", "12", None)]
#[case("", "", None)]
fn login_matches_exact_user_name_and_password(
    populated: UserDirectory,
    #[case] user_name: &str,
    #[case] password: &str,
    #[case] expected: Option<User>,
) {
    let found = populated
        .login(Some(user_name), Some(password))
        .expect("login");
    assert_eq!(found, expected.as_ref());
}

#[rstest]
#[case(None, Some("dummy"), "user_name")]
#[case(Some("dummy"), None, "password")]
fn login_rejects_absent_arguments(
    #[case] user_name: Option<&str>,
    #[case] password: Option<&str>,
    #[case] argument: &'static str,
) {
    for directory in [UserDirectory::new(), seeded()] {
        let err = directory
            .login(user_name, password)
            .expect_err("absent argument must fail");
        assert_eq!(err, DirectoryError::InvalidArgument { argument });
    }
}

#[rstest]
fn login_prefers_first_added_on_ties(mut empty: UserDirectory) {
    let first = User::new(10, "Anna", "pw");
    let second = User::new(11, "Anna", "pw");
    empty.add(first.clone());
    empty.add(second);

    let found = empty.login(Some("Anna"), Some("pw")).expect("login");
    assert_eq!(found, Some(&first));
}

#[rstest]
fn authenticate_matches_login(populated: UserDirectory) {
    let credentials = LoginCredentials::new("Petr", "111");
    let via_login = populated.login(Some("Petr"), Some("111")).expect("login");

    assert_eq!(populated.authenticate(&credentials), via_login);
}

#[rstest]
fn reads_are_idempotent(populated: UserDirectory) {
    let first_all = populated.get_all().to_vec();
    let first_login = populated
        .login(Some("Ivan"), Some("123"))
        .expect("login")
        .cloned();

    for _ in 0..3 {
        assert_eq!(populated.get_all(), first_all.as_slice());
        let again = populated
            .login(Some("Ivan"), Some("123"))
            .expect("login")
            .cloned();
        assert_eq!(again, first_login);
    }
}

#[rstest]
fn users_converted_to_map_by_id(populated: UserDirectory) {
    let index = populated.get_all_converted_by_id().expect("unique ids");

    assert_eq!(index.len(), 2);
    assert_eq!(index.get(&UserId::new(1)), Some(&ivan()));
    assert_eq!(index.get(&UserId::new(2)), Some(&petr()));
}

#[rstest]
fn map_keys_cover_every_id(mut populated: UserDirectory) {
    populated.add(oleg());
    let index = populated.get_all_converted_by_id().expect("unique ids");

    let mut keys: Vec<_> = index.keys().copied().collect();
    keys.sort();
    let mut ids: Vec<_> = populated.iter().map(User::id).collect();
    ids.sort();
    assert_eq!(keys, ids);
    assert_eq!(index.len(), populated.len());
}

#[rstest]
fn empty_directory_converts_to_empty_map(empty: UserDirectory) {
    let index = empty.get_all_converted_by_id().expect("no ids");
    assert!(index.is_empty());
}

#[rstest]
fn duplicate_ids_fail_conversion(mut empty: UserDirectory) {
    empty.add(User::new(5, "Ivan", "123"));
    empty.add(User::new(5, "Petr", "111"));

    let err = empty
        .get_all_converted_by_id()
        .expect_err("duplicate ids must fail");
    assert_eq!(
        err,
        DirectoryError::DuplicateKey {
            id: UserId::new(5)
        }
    );
}

#[rstest]
fn conversion_does_not_mutate_directory(populated: UserDirectory) {
    let before = populated.clone();
    let _index = populated.get_all_converted_by_id().expect("unique ids");
    assert_eq!(populated, before);
}

#[rstest]
fn settings_capacity_is_preallocated() {
    let settings = DirectorySettings {
        initial_capacity: 16,
    };
    let directory = UserDirectory::from_settings(&settings);

    assert!(directory.is_empty());
    assert!(directory.users.capacity() >= 16);
}
