use payloads::{requests, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::components::{DenunciationForm, StatusBadge};
use crate::contexts::toast::use_toast;
use crate::hooks::{use_denunciations, use_my_denunciations};
use crate::status::AsStatusDisplay;
use crate::utils::format_timestamp;

fn denunciation_row(denunciation: &responses::Denunciation) -> Html {
    html! {
        <div
            key={denunciation.id.0}
            class="p-4 rounded-lg border border-neutral-200 dark:border-neutral-800 bg-white dark:bg-neutral-900 space-y-2"
        >
            <div class="flex items-center justify-between">
                <h3 class="font-semibold text-neutral-900 dark:text-white">
                    {denunciation.title.clone()}
                </h3>
                <StatusBadge display={denunciation.status.display()} />
            </div>
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {denunciation.description.clone()}
            </p>
            <p class="text-xs text-neutral-500">
                {denunciation.denunciation_code.clone()}
                {" · "}
                {denunciation.severity_level.clone()}
                {" severity · "}
                {format_timestamp(denunciation.created_at)}
                if denunciation.is_anonymous {
                    {" · anonymous"}
                }
            </p>
        </div>
    }
}

/// The citizen's own denunciations, with filing.
#[function_component]
fn MyDenunciations() -> Html {
    let toast = use_toast();
    let show_form = use_state(|| false);
    let is_submitting = use_state(|| false);

    let (denunciations, handle) = use_my_denunciations();

    let on_create = {
        let handle = handle.clone();
        let toast = toast.clone();
        let show_form = show_form.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |details: requests::CreateDenunciation| {
            let handle = handle.clone();
            let toast = toast.clone();
            let show_form = show_form.clone();
            let is_submitting = is_submitting.clone();

            is_submitting.set(true);
            yew::platform::spawn_local(async move {
                match handle.create(details).await {
                    Ok(denunciation) => {
                        toast.success(format!(
                            "Denunciation {} filed",
                            denunciation.denunciation_code
                        ));
                        show_form.set(false);
                    }
                    Err(message) => toast.error(message),
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                    {"My denunciations"}
                </h1>
                if !*show_form {
                    <button
                        onclick={{
                            let show_form = show_form.clone();
                            Callback::from(move |_| show_form.set(true))
                        }}
                        class="px-4 py-2 rounded-md bg-neutral-900 dark:bg-white text-white dark:text-neutral-900 text-sm font-medium"
                    >
                        {"File denunciation"}
                    </button>
                }
            </div>

            if *show_form {
                <DenunciationForm
                    on_submit={on_create}
                    on_cancel={{
                        let show_form = show_form.clone();
                        Callback::from(move |_| show_form.set(false))
                    }}
                    is_submitting={*is_submitting}
                />
            }

            {denunciations.render("denunciations", |list, _, error| html! {
                <div class="space-y-4">
                    if let Some(error) = error {
                        <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 dark:text-red-400">
                                {format!("Refresh failed: {error}")}
                            </p>
                        </div>
                    }
                    if list.denunciations.is_empty() {
                        <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                            {"You haven't filed any denunciations"}
                        </p>
                    }
                    {for list.denunciations.iter().map(denunciation_row)}
                </div>
            })}
        </div>
    }
}

/// Read-only staff view over all denunciations.
#[function_component]
fn AllDenunciations() -> Html {
    let denunciations = use_denunciations(requests::ListDenunciations {
        skip: 0,
        limit: 50,
        status: None,
    });

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                {"Denunciations"}
            </h1>
            {denunciations.render("denunciations", |list, _, _| html! {
                <div class="space-y-4">
                    {for list.denunciations.iter().map(denunciation_row)}
                </div>
            })}
        </div>
    }
}

#[function_component]
pub fn DenunciationsPage() -> Html {
    let (state, _) = use_store::<State>();
    let is_staff = state.role().is_some_and(|role| role.is_staff());

    if is_staff {
        html! { <AllDenunciations /> }
    } else {
        html! { <MyDenunciations /> }
    }
}
