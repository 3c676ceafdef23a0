//! The browser-persisted session: bearer token plus the cached profile.
//!
//! This module is the only code that touches localStorage. Everything else
//! goes through these functions, so the read/write/clear lifecycle is in
//! one place: written at login, refreshed after profile revalidation,
//! cleared at logout.

use payloads::responses::UserProfile;
use web_sys::Storage;

const TOKEN_KEY: &str = "access_token";
const USER_KEY: &str = "user";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// The stored bearer token, if a session exists.
pub fn access_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

/// The profile cached at login. May be stale; callers revalidate against
/// the `me` endpoint before trusting it.
pub fn cached_profile() -> Option<UserProfile> {
    let raw = local_storage()?.get_item(USER_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn store_profile(profile: &UserProfile) {
    if let Some(storage) = local_storage()
        && let Ok(serialized) = serde_json::to_string(profile)
    {
        let _ = storage.set_item(USER_KEY, &serialized);
    }
}

/// Drop the session entirely. Domain data is never persisted, so this is
/// all logout has to clean up.
pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
