//! Browser-only checks for the token lookup; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use frontend::storage::BrowserCredentialStore;
use gloo_storage::{LocalStorage, SessionStorage, Storage};
use shared::{CredentialStore, TokenKeys};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn store() -> BrowserCredentialStore {
    BrowserCredentialStore::new(TokenKeys::default())
}

#[wasm_bindgen_test]
fn finds_token_in_primary_then_legacy_then_session() {
    let store = store();
    store.clear();
    assert_eq!(store.token(), None);

    SessionStorage::set("token", "session-token").unwrap();
    assert_eq!(store.token().as_deref(), Some("session-token"));

    LocalStorage::set("authToken", "legacy-token").unwrap();
    assert_eq!(store.token().as_deref(), Some("legacy-token"));

    LocalStorage::set("token", "primary-token").unwrap();
    assert_eq!(store.token().as_deref(), Some("primary-token"));

    store.clear();
}

#[wasm_bindgen_test]
fn accepts_bare_string_tokens() {
    let store = store();
    store.clear();
    LocalStorage::raw().set_item("token", "raw-token").unwrap();
    assert_eq!(store.token().as_deref(), Some("raw-token"));
    store.clear();
}

#[wasm_bindgen_test]
fn clear_removes_every_location() {
    let store = store();
    LocalStorage::set("token", "a").unwrap();
    LocalStorage::set("authToken", "b").unwrap();
    SessionStorage::set("token", "c").unwrap();

    store.clear();

    assert_eq!(store.token(), None);
    assert!(LocalStorage::raw().get_item("authToken").unwrap().is_none());
    assert!(SessionStorage::raw().get_item("token").unwrap().is_none());
}
