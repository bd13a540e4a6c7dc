//! End to end session lifecycle against a stub API.

use std::rc::Rc;

use dioxus::prelude::*;
use futures::executor::block_on;
use health_frontend::{
    client::{
        components::LogoutButton,
        navigation::{RecordingNavigator, LOGIN_PATH},
        store::{
            session::{REFRESH_TOKEN_KEY, TOKEN_KEY},
            AuthStore, MemorySessionStorage, SessionStorage,
        },
    },
    model::auth::LoginDto,
};

use super::{patient, StubApi};

fn render_logout(store: AuthStore) -> String {
    fn harness(store: AuthStore) -> Element {
        use_context_provider(move || Signal::new(store));

        rsx!(LogoutButton {})
    }

    let mut dom = VirtualDom::new_with_props(harness, store);
    dom.rebuild_in_place();

    dioxus_ssr::render(&dom)
}

/// Tests the logout control across a full login and logout.
///
/// Verifies that the control appears once login persists a token, and that
/// logging out hides it again and sends the browser to the login page.
///
/// Expected: hidden, shown, hidden; one navigation to /login
#[test]
fn logout_control_follows_session() {
    let storage = MemorySessionStorage::new();
    let navigator = RecordingNavigator::new();
    let mut store = AuthStore::from_storage(Rc::new(storage.clone()), Rc::new(navigator.clone()));

    assert!(!render_logout(store.clone()).contains("Logout"));

    let credentials = LoginDto {
        username: "bob".to_string(),
        password: "correct horse".to_string(),
    };
    block_on(store.login(&StubApi, &credentials)).unwrap();

    assert!(render_logout(store.clone()).contains("Logout"));
    assert_eq!(store.state.user, Some(patient()));

    store.logout();

    assert!(!render_logout(store.clone()).contains("Logout"));
    assert!(storage.is_empty());
    assert_eq!(navigator.visited(), vec![LOGIN_PATH.to_string()]);
}

/// Tests that a reload restores the session persisted by a login.
///
/// Expected: second store built from the same storage is authenticated with the same user
#[test]
fn session_survives_reload() {
    let storage = MemorySessionStorage::new();
    let mut store = AuthStore::from_storage(
        Rc::new(storage.clone()),
        Rc::new(RecordingNavigator::new()),
    );
    let credentials = LoginDto {
        username: "bob".to_string(),
        password: "correct horse".to_string(),
    };
    block_on(store.login(&StubApi, &credentials)).unwrap();

    let mut reloaded = AuthStore::from_storage(Rc::new(storage), Rc::new(RecordingNavigator::new()));

    assert!(reloaded.is_authenticated());
    assert_eq!(reloaded.state.user, Some(patient()));
    assert!(block_on(reloaded.load_user(&StubApi)).is_ok());
}

/// Tests that wrong credentials leave no session behind.
///
/// Expected: Err, no session, API detail shown
#[test]
fn rejected_login_leaves_no_session() {
    let navigator = RecordingNavigator::new();
    let mut store = AuthStore::from_storage(
        Rc::new(MemorySessionStorage::new()),
        Rc::new(navigator.clone()),
    );
    let credentials = LoginDto {
        username: "bob".to_string(),
        password: "wrong".to_string(),
    };

    let result = block_on(store.login(&StubApi, &credentials));

    assert!(result.is_err());
    assert!(!store.has_session());
    assert_eq!(
        store.state.error.as_deref(),
        Some("No active account found with the given credentials")
    );
    assert!(navigator.visited().is_empty());
}

/// Tests reopening the app after the access token expired.
///
/// Verifies that the startup user load refreshes the token and keeps the
/// session, so the logout control stays visible.
///
/// Expected: Ok, new access token stored, no navigation
#[test]
fn expired_token_refreshed_on_reload() {
    let storage = MemorySessionStorage::with_token("access-stale");
    storage.set(REFRESH_TOKEN_KEY, "refresh-bob");
    let navigator = RecordingNavigator::new();
    let mut store = AuthStore::from_storage(Rc::new(storage.clone()), Rc::new(navigator.clone()));

    let result = block_on(store.load_user(&StubApi));

    assert!(result.is_ok());
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("access-bob"));
    assert_eq!(store.state.user, Some(patient()));
    assert!(render_logout(store).contains("Logout"));
    assert!(navigator.visited().is_empty());
}

/// Tests reopening the app after both tokens expired.
///
/// Expected: Err, session cleared, control hidden, one navigation to /login
#[test]
fn expired_session_ends_on_reload() {
    let storage = MemorySessionStorage::with_token("access-stale");
    storage.set(REFRESH_TOKEN_KEY, "refresh-stale");
    let navigator = RecordingNavigator::new();
    let mut store = AuthStore::from_storage(Rc::new(storage.clone()), Rc::new(navigator.clone()));

    let result = block_on(store.load_user(&StubApi));

    assert!(result.is_err());
    assert!(storage.is_empty());
    assert!(!render_logout(store).contains("Logout"));
    assert_eq!(navigator.visited(), vec![LOGIN_PATH.to_string()]);
}
