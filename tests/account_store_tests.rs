use tasksort::store::{SESSION_KEY, USERS_KEY};
use tasksort::{Account, AccountStore, LocalStorage, MemoryStorage, Page, StoreError};

#[test]
fn duplicate_registration_fails_and_leaves_the_collection_unchanged() {
    let storage = MemoryStorage::new();
    let mut store = AccountStore::open(storage.clone()).unwrap();
    store.register("ada@example.com", "pw", "Ada").unwrap();
    let snapshot = storage.get_item(USERS_KEY).unwrap();
    let count = store.accounts().len();

    let err = store
        .register("ada@example.com", "different", "Else")
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateIdentity(_)));
    assert_eq!(store.accounts().len(), count);
    assert_eq!(storage.get_item(USERS_KEY).unwrap(), snapshot);
}

#[test]
fn rejected_logins_never_touch_the_session() {
    let storage = MemoryStorage::new();
    let mut store = AccountStore::open(storage.clone()).unwrap();
    store.register("ada@example.com", "pw", "Ada").unwrap();

    // Correct email, wrong password
    let err = store.login("ada@example.com", "nope").unwrap_err();
    assert!(matches!(err, StoreError::CredentialsRejected));
    // Nonexistent email
    let err = store.login("ghost@example.com", "pw").unwrap_err();
    assert!(matches!(err, StoreError::CredentialsRejected));

    assert!(store.current_user().is_none());
    assert_eq!(storage.get_item(SESSION_KEY).unwrap(), None);
}

#[test]
fn login_then_logout_walks_the_route_guard_through_both_redirects() {
    let mut store = AccountStore::open(MemoryStorage::new()).unwrap();
    store.register("ada@example.com", "pw", "Ada").unwrap();

    let name = store.login("ada@example.com", "pw").unwrap();
    assert_eq!(name, "Ada");
    assert_eq!(store.current_user().map(|a| a.email.as_str()), Some("ada@example.com"));
    // Authenticated on the landing page: redirect to tasks
    assert_eq!(store.route_guard(Page::Landing), Some(Page::Tasks));

    assert!(store.logout(|| true).unwrap());
    // Logged out on the task page: redirect to landing
    assert_eq!(store.route_guard(Page::Tasks), Some(Page::Landing));
}

#[test]
fn session_is_a_full_copy_of_the_matched_record() {
    let storage = MemoryStorage::new();
    let mut store = AccountStore::open(storage.clone()).unwrap();
    store.register("ada@example.com", "pw", "Ada").unwrap();
    store.login("ada@example.com", "pw").unwrap();

    let raw = storage.get_item(SESSION_KEY).unwrap().unwrap();
    let session: Account = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        session,
        Account {
            email: "ada@example.com".into(),
            password: "pw".into(),
            display_name: "Ada".into(),
        }
    );
}

#[test]
fn declining_the_logout_prompt_changes_nothing() {
    let storage = MemoryStorage::new();
    let mut store = AccountStore::open(storage.clone()).unwrap();
    store.login("TaskSort@example.com", "12345678").unwrap();

    assert!(!store.logout(|| false).unwrap());
    assert!(store.current_user().is_some());
    assert!(storage.get_item(SESSION_KEY).unwrap().is_some());
    assert_eq!(store.route_guard(Page::Tasks), None);
}

#[test]
fn accounts_written_by_older_versions_load_unchanged() {
    let storage = MemoryStorage::new();
    storage
        .set_item(
            USERS_KEY,
            r#"[{"email":"TaskSort@example.com","password":"12345678","user":"Juan Pablo"}]"#,
        )
        .unwrap();

    let mut store = AccountStore::open(storage).unwrap();
    assert!(!store.recovered());
    let name = store.login("TaskSort@example.com", "12345678").unwrap();
    assert_eq!(name, "Juan Pablo");
}

#[test]
fn registration_persists_in_the_on_device_field_layout() {
    let storage = MemoryStorage::new();
    let mut store = AccountStore::open(storage.clone()).unwrap();
    store.register("ada@example.com", "pw", "Ada").unwrap();

    let raw = storage.get_item(USERS_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let last = json.as_array().unwrap().last().unwrap();
    assert_eq!(last["email"], "ada@example.com");
    assert_eq!(last["password"], "pw");
    assert_eq!(last["user"], "Ada");
}
