use payloads::Role;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::pages::{
    AuthorityDashboard, CitizenDashboard, OfficerDashboard,
};
use crate::{AuthState, Route, State};

/// Dispatches to the dashboard for the authenticated role.
#[function_component]
pub fn HomePage() -> Html {
    let (state, _) = use_store::<State>();
    let navigator = use_navigator().unwrap();

    // Leave for the login page once the startup session check settles as
    // logged out.
    {
        let navigator = navigator.clone();
        use_effect_with(state.auth_state.clone(), move |auth_state| {
            if matches!(auth_state, AuthState::LoggedOut) {
                navigator.push(&Route::Login);
            }
        });
    }

    match &state.auth_state {
        AuthState::Unknown => html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Checking session..."}
                </p>
            </div>
        },
        AuthState::LoggedOut => html! {},
        AuthState::LoggedIn(profile) => match profile.role {
            Role::Admin => html! { <AuthorityDashboard /> },
            Role::Officer => html! { <OfficerDashboard /> },
            Role::Citizen => html! { <CitizenDashboard /> },
        },
    }
}
