use payloads::requests;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OfficerFormProps {
    pub on_submit: Callback<requests::CreateOfficer>,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub is_submitting: bool,
}

/// Inline form for creating an officer account. The parent owns the API
/// call so the confirmed record can be spliced into its list.
#[function_component]
pub fn OfficerForm(props: &OfficerFormProps) -> Html {
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let full_name = use_state(String::new);
    let badge_number = use_state(String::new);
    let department = use_state(String::new);
    let phone_number = use_state(String::new);

    let input = |label: &str,
                 input_type: &str,
                 value: &UseStateHandle<String>| {
        let value = value.clone();
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
                </label>
                <input
                    type={input_type.to_string()}
                    value={(*value).clone()}
                    {oninput}
                    class="w-full px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm"
                />
            </div>
        }
    };

    let onsubmit = {
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let full_name = full_name.clone();
        let badge_number = badge_number.clone();
        let department = department.clone();
        let phone_number = phone_number.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(requests::CreateOfficer {
                username: (*username).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                full_name: (*full_name).clone(),
                badge_number: (!badge_number.is_empty())
                    .then(|| (*badge_number).clone()),
                department: (!department.is_empty())
                    .then(|| (*department).clone()),
                phone_number: (!phone_number.is_empty())
                    .then(|| (*phone_number).clone()),
            });
        })
    };

    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <form {onsubmit} class="p-4 rounded-lg border border-neutral-200 dark:border-neutral-800 bg-neutral-50 dark:bg-neutral-800/50 space-y-3">
            <h3 class="font-semibold text-neutral-900 dark:text-white">
                {"Create officer account"}
            </h3>
            <div class="grid sm:grid-cols-2 gap-3">
                {input("Username", "text", &username)}
                {input("Email", "email", &email)}
                {input("Password", "password", &password)}
                {input("Full name", "text", &full_name)}
                {input("Badge number", "text", &badge_number)}
                {input("Department", "text", &department)}
                {input("Phone number", "tel", &phone_number)}
            </div>
            <div class="flex space-x-2">
                <button
                    type="submit"
                    disabled={props.is_submitting || username.is_empty() || password.is_empty()}
                    class="px-4 py-2 rounded-md bg-neutral-900 dark:bg-white text-white dark:text-neutral-900 text-sm font-medium disabled:opacity-50"
                >
                    {"Create"}
                </button>
                <button
                    type="button"
                    onclick={on_cancel}
                    class="px-4 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 text-sm"
                >
                    {"Cancel"}
                </button>
            </div>
        </form>
    }
}
