use payloads::requests::validate_license_plate;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::ViolationCard;
use crate::hooks::use_violation_lookup;

/// Public license-plate lookup. The search only fires on submit; typing
/// alone issues no requests.
#[function_component]
pub fn ViolationLookupPage() -> Html {
    let plate_input = use_state(String::new);
    let submitted = use_state(|| None::<String>);
    let validation_error = use_state(|| None::<&'static str>);

    let results = use_violation_lookup((*submitted).clone());

    let oninput = {
        let plate_input = plate_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            plate_input.set(input.value().to_uppercase());
        })
    };

    let onsubmit = {
        let plate_input = plate_input.clone();
        let submitted = submitted.clone();
        let validation_error = validation_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let plate = (*plate_input).clone();
            let validation = validate_license_plate(&plate);
            if validation.is_valid() {
                validation_error.set(None);
                submitted.set(Some(plate));
            } else {
                validation_error.set(validation.error_message());
            }
        })
    };

    html! {
        <div class="space-y-6 max-w-2xl mx-auto">
            <div>
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                    {"Violation lookup"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400 mt-1">
                    {"Check a license plate for recorded violations"}
                </p>
            </div>

            <form {onsubmit} class="flex gap-3">
                <input
                    type="text"
                    placeholder="e.g. 30A-123.45"
                    value={(*plate_input).clone()}
                    {oninput}
                    class="flex-1 px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 font-mono text-sm"
                />
                <button
                    type="submit"
                    disabled={results.is_initial_loading()}
                    class="px-4 py-2 rounded-md bg-neutral-900 dark:bg-white text-white dark:text-neutral-900 text-sm font-medium disabled:opacity-50"
                >
                    {"Search"}
                </button>
            </form>

            if let Some(error) = *validation_error {
                <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
            }

            if let Some(plate) = &*submitted {
                {results.render("violations", |violations, _, _| {
                    if violations.is_empty() {
                        html! {
                            <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                                {format!("No violations found for {plate}")}
                            </p>
                        }
                    } else {
                        html! {
                            <div class="space-y-4">
                                {for violations.iter().map(|violation| html! {
                                    <ViolationCard
                                        key={violation.id.0}
                                        violation={violation.clone()}
                                    />
                                })}
                            </div>
                        }
                    }
                })}
            }
        </div>
    }
}
