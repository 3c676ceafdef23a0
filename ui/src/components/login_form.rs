use payloads::{requests, responses};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, get_api_client, session};

#[derive(Clone, Copy, PartialEq)]
pub enum AuthMode {
    Login,
    CreateAccount,
}

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub mode: AuthMode,
    pub on_success: Callback<responses::UserProfile>,
}

fn field(
    label: &str,
    input_type: &str,
    value: UseStateHandle<String>,
    required: bool,
) -> Html {
    let oninput = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            value.set(input.value());
        })
    };

    html! {
        <div>
            <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1">
                {label.to_string()}
                if !required {
                    <span class="text-neutral-400">{" (optional)"}</span>
                }
            </label>
            <input
                type={input_type.to_string()}
                value={(*value).clone()}
                {oninput}
                class="w-full px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm"
            />
        </div>
    }
}

#[function_component]
pub fn LoginForm(props: &LoginFormProps) -> Html {
    let (_, dispatch) = use_store::<State>();

    let username = use_state(String::new);
    let password = use_state(String::new);
    let email = use_state(String::new);
    let full_name = use_state(String::new);
    let phone_number = use_state(String::new);
    let identification_number = use_state(String::new);
    let error_message = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);

    let mode = props.mode;

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let email = email.clone();
        let full_name = full_name.clone();
        let phone_number = phone_number.clone();
        let identification_number = identification_number.clone();
        let error_message = error_message.clone();
        let is_submitting = is_submitting.clone();
        let dispatch = dispatch.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let username = (*username).clone();
            let password = (*password).clone();
            let email = (*email).clone();
            let full_name = (*full_name).clone();
            let phone_number = (*phone_number).clone();
            let identification_number = (*identification_number).clone();
            let error_message = error_message.clone();
            let is_submitting = is_submitting.clone();
            let dispatch = dispatch.clone();
            let on_success = on_success.clone();

            is_submitting.set(true);
            error_message.set(None);

            yew::platform::spawn_local(async move {
                let result = async {
                    let api_client = get_api_client();

                    if mode == AuthMode::CreateAccount {
                        let details = requests::RegisterAccount {
                            username: username.clone(),
                            email,
                            password: password.clone(),
                            full_name,
                            phone_number: (!phone_number.is_empty())
                                .then_some(phone_number),
                            identification_number: identification_number
                                .clone(),
                        };
                        api_client
                            .register(&details)
                            .await
                            .map_err(|e| e.to_string())?;
                    }

                    let credentials = requests::LoginCredentials {
                        username,
                        password,
                        identification_number: (!identification_number
                            .is_empty())
                        .then_some(identification_number),
                    };
                    let token = api_client
                        .login(&credentials)
                        .await
                        .map_err(|e| e.to_string())?;
                    session::store_token(&token.access_token);

                    // Re-create the client so the new token is attached.
                    let api_client = get_api_client();
                    let profile =
                        api_client.me().await.map_err(|e| e.to_string())?;
                    session::store_profile(&profile);
                    Ok::<responses::UserProfile, String>(profile)
                }
                .await;

                match result {
                    Ok(profile) => {
                        dispatch.reduce_mut(|state| {
                            state.login(profile.clone());
                        });
                        on_success.emit(profile);
                    }
                    Err(message) => {
                        session::clear();
                        error_message.set(Some(message));
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    let (title, submit_text) = match mode {
        AuthMode::Login => ("Sign in to RoadWatch", "Sign in"),
        AuthMode::CreateAccount => ("Create your account", "Create account"),
    };

    html! {
        <form {onsubmit} class="p-6 rounded-lg border border-neutral-200 dark:border-neutral-800 bg-white dark:bg-neutral-900 space-y-4">
            <h2 class="text-xl font-bold text-neutral-900 dark:text-white">
                {title}
            </h2>

            {field("Username", "text", username.clone(), true)}
            if mode == AuthMode::CreateAccount {
                {field("Email", "email", email.clone(), true)}
                {field("Full name", "text", full_name.clone(), true)}
                {field("Phone number", "tel", phone_number.clone(), false)}
            }
            {field("Password", "password", password.clone(), true)}
            {field(
                "Identification number",
                "text",
                identification_number.clone(),
                mode == AuthMode::CreateAccount,
            )}

            if let Some(error) = &*error_message {
                <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {error.clone()}
                    </p>
                </div>
            }

            <button
                type="submit"
                disabled={*is_submitting}
                class="w-full py-2 rounded-md bg-neutral-900 dark:bg-white text-white dark:text-neutral-900 text-sm font-medium disabled:opacity-50"
            >
                {if *is_submitting { "Please wait..." } else { submit_text }}
            </button>
        </form>
    }
}
