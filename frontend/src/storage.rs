use gloo_storage::{LocalStorage, SessionStorage, Storage};
use log::debug;
use shared::{CredentialStore, TokenKeys};

/// Key under which the auth layer keeps the signed-in user
pub const USER_KEY: &str = "user";

fn read<S: Storage>(key: &str) -> Option<String> {
    // Tokens may be stored JSON-encoded or as a bare string
    S::get::<String>(key)
        .ok()
        .or_else(|| S::raw().get_item(key).ok().flatten())
        .filter(|token| !token.trim().is_empty())
}

/// Bearer token lookup across local and session storage
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserCredentialStore {
    keys: TokenKeys,
}

impl BrowserCredentialStore {
    pub fn new(keys: TokenKeys) -> Self {
        Self { keys }
    }
}

impl CredentialStore for BrowserCredentialStore {
    fn token(&self) -> Option<String> {
        read::<LocalStorage>(&self.keys.primary)
            .or_else(|| read::<LocalStorage>(&self.keys.legacy))
            .or_else(|| read::<SessionStorage>(&self.keys.session))
    }

    fn clear(&self) {
        debug!("Clearing stored auth tokens");
        LocalStorage::delete(&self.keys.primary);
        LocalStorage::delete(&self.keys.legacy);
        SessionStorage::delete(&self.keys.session);
    }
}
