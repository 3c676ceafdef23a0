use payloads::requests;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const DENUNCIATION_TYPES: &[(&str, &str)] = &[
    ("corruption", "Corruption"),
    ("misconduct", "Misconduct"),
    ("abuse_of_power", "Abuse of power"),
    ("other", "Other"),
];

const SEVERITY_LEVELS: &[&str] = &["low", "medium", "high"];
const URGENCY_LEVELS: &[&str] = &["normal", "urgent"];

#[derive(Properties, PartialEq)]
pub struct DenunciationFormProps {
    pub on_submit: Callback<requests::CreateDenunciation>,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub is_submitting: bool,
}

#[function_component]
pub fn DenunciationForm(props: &DenunciationFormProps) -> Html {
    let title = use_state(String::new);
    let description = use_state(String::new);
    let denunciation_type =
        use_state(|| DENUNCIATION_TYPES[0].0.to_string());
    let accused_department = use_state(String::new);
    let severity_level = use_state(|| "medium".to_string());
    let urgency_level = use_state(|| "normal".to_string());
    let is_anonymous = use_state(|| true);

    let select = |options: Html,
                  value: &UseStateHandle<String>,
                  label: &str| {
        let value = value.clone();
        let onchange = {
            let value = value.clone();
            Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                value.set(select.value());
            })
        };
        html! {
            <div>
                <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1">
                    {label.to_string()}
                </label>
                <select
                    {onchange}
                    class="w-full px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm"
                >
                    {options}
                </select>
            </div>
        }
    };

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
    let on_department = {
        let accused_department = accused_department.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            accused_department.set(input.value());
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
        let denunciation_type = denunciation_type.clone();
        let accused_department = accused_department.clone();
        let severity_level = severity_level.clone();
        let urgency_level = urgency_level.clone();
        let is_anonymous = is_anonymous.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(requests::CreateDenunciation {
                title: (*title).clone(),
                description: (*description).clone(),
                denunciation_type: (*denunciation_type).clone(),
                accused_department: (!accused_department.is_empty())
                    .then(|| (*accused_department).clone()),
                severity_level: (*severity_level).clone(),
                urgency_level: (*urgency_level).clone(),
                is_anonymous: *is_anonymous,
            });
        })
    };

    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    let type_options = html! {
        {for DENUNCIATION_TYPES.iter().map(|(value, label)| html! {
            <option value={*value} selected={*denunciation_type == *value}>
                {*label}
            </option>
        })}
    };
    let severity_options = html! {
        {for SEVERITY_LEVELS.iter().map(|level| html! {
            <option value={*level} selected={*severity_level == *level}>
                {*level}
            </option>
        })}
    };
    let urgency_options = html! {
        {for URGENCY_LEVELS.iter().map(|level| html! {
            <option value={*level} selected={*urgency_level == *level}>
                {*level}
            </option>
        })}
    };

    html! {
        <form {onsubmit} class="p-4 rounded-lg border border-neutral-200 dark:border-neutral-800 bg-neutral-50 dark:bg-neutral-800/50 space-y-3">
            <h3 class="font-semibold text-neutral-900 dark:text-white">
                {"File a denunciation"}
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
            <div class="grid sm:grid-cols-3 gap-3">
                {select(type_options, &denunciation_type, "Type")}
                {select(severity_options, &severity_level, "Severity")}
                {select(urgency_options, &urgency_level, "Urgency")}
            </div>
            <div>
                <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1">
                    {"Accused department"}
                    <span class="text-neutral-400">{" (optional)"}</span>
                </label>
                <input
                    type="text"
                    value={(*accused_department).clone()}
                    oninput={on_department}
                    class="w-full px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm"
                />
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
                    {"Submit denunciation"}
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
