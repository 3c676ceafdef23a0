use payloads::{Role, responses};
use yewdux::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(responses::UserProfile),
}

/// Global application state. Holds authentication only; domain data lives
/// in the hooks that fetch it and dies with their components.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub auth_state: AuthState,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn(_))
    }

    pub fn profile(&self) -> Option<&responses::UserProfile> {
        match &self.auth_state {
            AuthState::LoggedIn(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.profile().map(|profile| profile.role)
    }

    pub fn login(&mut self, profile: responses::UserProfile) {
        self.auth_state = AuthState::LoggedIn(profile);
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
    }
}
