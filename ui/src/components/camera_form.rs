use payloads::requests;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CameraFormProps {
    pub on_submit: Callback<requests::CreateCamera>,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub is_submitting: bool,
}

/// Inline form for registering a new camera. The parent owns the actual
/// API call so the confirmed record can be spliced into its list.
#[function_component]
pub fn CameraForm(props: &CameraFormProps) -> Html {
    let code = use_state(String::new);
    let name = use_state(String::new);
    let location_name = use_state(String::new);
    let address = use_state(String::new);
    let resolution = use_state(String::new);

    let input = |label: &str, value: &UseStateHandle<String>| {
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
                    type="text"
                    value={(*value).clone()}
                    {oninput}
                    class="w-full px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm"
                />
            </div>
        }
    };

    let onsubmit = {
        let code = code.clone();
        let name = name.clone();
        let location_name = location_name.clone();
        let address = address.clone();
        let resolution = resolution.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(requests::CreateCamera {
                code: (*code).clone(),
                name: (*name).clone(),
                location_name: (*location_name).clone(),
                address: (!address.is_empty()).then(|| (*address).clone()),
                latitude: None,
                longitude: None,
                resolution: (!resolution.is_empty())
                    .then(|| (*resolution).clone()),
                confidence_threshold: None,
            });
        })
    };

    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <form {onsubmit} class="p-4 rounded-lg border border-neutral-200 dark:border-neutral-800 bg-neutral-50 dark:bg-neutral-800/50 space-y-3">
            <h3 class="font-semibold text-neutral-900 dark:text-white">
                {"Register camera"}
            </h3>
            <div class="grid sm:grid-cols-2 gap-3">
                {input("Camera code", &code)}
                {input("Name", &name)}
                {input("Location", &location_name)}
                {input("Resolution", &resolution)}
            </div>
            {input("Address", &address)}
            <div class="flex space-x-2">
                <button
                    type="submit"
                    disabled={props.is_submitting}
                    class="px-4 py-2 rounded-md bg-neutral-900 dark:bg-white text-white dark:text-neutral-900 text-sm font-medium disabled:opacity-50"
                >
                    {"Save"}
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
