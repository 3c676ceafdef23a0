use payloads::requests;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const COMPLAINT_TYPES: &[(&str, &str)] = &[
    ("wrong_fine", "Incorrect fine"),
    ("service_attitude", "Service attitude"),
    ("procedure", "Procedure issue"),
    ("other", "Other"),
];

#[derive(Properties, PartialEq)]
pub struct ComplaintFormProps {
    pub on_submit: Callback<requests::CreateComplaint>,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub is_submitting: bool,
}

#[function_component]
pub fn ComplaintForm(props: &ComplaintFormProps) -> Html {
    let title = use_state(String::new);
    let description = use_state(String::new);
    let complaint_type = use_state(|| COMPLAINT_TYPES[0].0.to_string());
    let desired_resolution = use_state(String::new);
    let is_anonymous = use_state(|| false);

    let on_title = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };
    let on_description = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };
    let on_type = {
        let complaint_type = complaint_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            complaint_type.set(select.value());
        })
    };
    let on_resolution = {
        let desired_resolution = desired_resolution.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            desired_resolution.set(input.value());
        })
    };
    let on_anonymous = {
        let is_anonymous = is_anonymous.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            is_anonymous.set(input.checked());
        })
    };

    let onsubmit = {
        let title = title.clone();
        let description = description.clone();
        let complaint_type = complaint_type.clone();
        let desired_resolution = desired_resolution.clone();
        let is_anonymous = is_anonymous.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(requests::CreateComplaint {
                title: (*title).clone(),
                description: (*description).clone(),
                complaint_type: (*complaint_type).clone(),
                desired_resolution: (!desired_resolution.is_empty())
                    .then(|| (*desired_resolution).clone()),
                is_anonymous: *is_anonymous,
                violation_id: None,
                evidence_urls: Vec::new(),
            });
        })
    };

    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <form {onsubmit} class="p-4 rounded-lg border border-neutral-200 dark:border-neutral-800 bg-neutral-50 dark:bg-neutral-800/50 space-y-3">
            <h3 class="font-semibold text-neutral-900 dark:text-white">
                {"File a complaint"}
            </h3>
            <div>
                <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1">
                    {"Title"}
                </label>
                <input
                    type="text"
                    value={(*title).clone()}
                    oninput={on_title}
                    class="w-full px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm"
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1">
                    {"Type"}
                </label>
                <select
                    onchange={on_type}
                    class="w-full px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm"
                >
                    {for COMPLAINT_TYPES.iter().map(|(value, label)| html! {
                        <option
                            value={*value}
                            selected={*complaint_type == *value}
                        >
                            {*label}
                        </option>
                    })}
                </select>
            </div>
            <div>
                <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1">
                    {"Description"}
                </label>
                <textarea
                    value={(*description).clone()}
                    oninput={on_description}
                    rows="4"
                    class="w-full px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm"
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1">
                    {"Desired resolution"}
                    <span class="text-neutral-400">{" (optional)"}</span>
                </label>
                <input
                    type="text"
                    value={(*desired_resolution).clone()}
                    oninput={on_resolution}
                    class="w-full px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm"
                />
            </div>
            <label class="flex items-center space-x-2 text-sm text-neutral-700 dark:text-neutral-300">
                <input
                    type="checkbox"
                    checked={*is_anonymous}
                    onchange={on_anonymous}
                />
                <span>{"Submit anonymously"}</span>
            </label>
            <div class="flex space-x-2">
                <button
                    type="submit"
                    disabled={props.is_submitting || title.is_empty() || description.is_empty()}
                    class="px-4 py-2 rounded-md bg-neutral-900 dark:bg-white text-white dark:text-neutral-900 text-sm font-medium disabled:opacity-50"
                >
                    {"Submit complaint"}
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
