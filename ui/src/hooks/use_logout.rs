use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{Route, State, session};

/// Returns a callback that ends the session and returns to the login page.
/// Auth is bearer-token based, so logout is purely client-side.
#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let (_, dispatch) = use_store::<State>();
    let navigator = use_navigator().unwrap();

    Callback::from(move |_| {
        session::clear();

        dispatch.reduce_mut(|state| {
            state.logout();
        });

        navigator.push(&Route::Login);
    })
}
