use payloads::responses;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::components::{LoginForm, login_form::AuthMode};
use crate::state::State;

#[function_component]
pub fn LoginPage() -> Html {
    let navigator = use_navigator().unwrap();
    let mode = use_state(|| AuthMode::Login);
    let (state, _) = use_store::<State>();

    // Redirect to home if already logged in
    {
        let navigator = navigator.clone();
        let is_authenticated = state.is_authenticated();

        use_effect_with(is_authenticated, move |is_auth| {
            if *is_auth {
                navigator.push(&Route::Home);
            }
        });
    }

    let on_auth_success = {
        let navigator = navigator.clone();

        Callback::from(move |_profile: responses::UserProfile| {
            navigator.push(&Route::Home);
        })
    };

    let toggle_mode = {
        let mode = mode.clone();

        Callback::from(move |_: MouseEvent| {
            mode.set(match *mode {
                AuthMode::Login => AuthMode::CreateAccount,
                AuthMode::CreateAccount => AuthMode::Login,
            });
        })
    };

    let (toggle_text, toggle_link_text) = match *mode {
        AuthMode::Login => ("Don't have an account?", "Create one"),
        AuthMode::CreateAccount => ("Already have an account?", "Sign in"),
    };

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-4">
                <LoginForm mode={*mode} on_success={on_auth_success} />

                <div class="text-center space-y-2">
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {toggle_text}
                        {" "}
                        <button
                            onclick={toggle_mode}
                            class="text-neutral-900 dark:text-neutral-100 hover:text-neutral-700 dark:hover:text-neutral-300 font-medium underline"
                        >
                            {toggle_link_text}
                        </button>
                    </p>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        <Link<Route> to={Route::ViolationLookup} classes="underline">
                            {"Look up violations by license plate"}
                        </Link<Route>>
                    </p>
                </div>
            </div>
        </div>
    }
}
