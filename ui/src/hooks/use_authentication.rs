use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, get_api_client, session};

/// Hook to revalidate the stored session on startup.
///
/// A stored token is checked against the `me` endpoint; the refreshed
/// profile replaces the cached copy on success, and the whole session is
/// dropped on any failure.
#[hook]
pub fn use_authentication() {
    let (_state, dispatch) = use_store::<State>();

    use_effect_with((), {
        let dispatch = dispatch.clone();
        move |_| {
            if session::access_token().is_none() {
                dispatch.reduce_mut(|state| state.logout());
                return;
            }

            // Show the cached profile right away; the revalidation below
            // replaces it with a fresh copy or drops the session.
            if let Some(cached) = session::cached_profile() {
                dispatch.reduce_mut(|state| state.login(cached));
            }

            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                match api_client.me().await {
                    Ok(profile) => {
                        session::store_profile(&profile);
                        dispatch.reduce_mut(|state| state.login(profile));
                    }
                    Err(_) => {
                        // Invalid or expired token
                        session::clear();
                        dispatch.reduce_mut(|state| state.logout());
                    }
                }
            });
        }
    });
}
