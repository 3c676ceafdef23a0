use payloads::{requests, responses};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{OfficerForm, Pagination};
use crate::contexts::toast::use_toast;
use crate::hooks::{OfficerFilters, use_officers};
use crate::utils::format_timestamp;

fn officer_row(officer: &responses::Officer) -> Html {
    let (status_label, status_classes) = if officer.is_active {
        (
            "Active",
            "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-400",
        )
    } else {
        (
            "Inactive",
            "bg-neutral-100 text-neutral-700 dark:bg-neutral-800 dark:text-neutral-300",
        )
    };

    html! {
        <div
            key={officer.id.0}
            class="flex items-center justify-between p-4 rounded-lg border border-neutral-200 dark:border-neutral-800 bg-white dark:bg-neutral-900"
        >
            <div class="space-y-1">
                <div class="flex items-center space-x-2">
                    <span class="font-semibold text-neutral-900 dark:text-white">
                        {officer.full_name.clone()}
                    </span>
                    <span class={format!(
                        "inline-flex items-center px-2 py-0.5 rounded-full text-xs font-medium {status_classes}"
                    )}>
                        {status_label}
                    </span>
                </div>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {officer.email.clone()}
                    if let Some(badge) = &officer.badge_number {
                        {" · "}{badge.clone()}
                    }
                    if let Some(department) = &officer.department {
                        {" · "}{department.clone()}
                    }
                </p>
                <p class="text-xs text-neutral-500">
                    {format!("Joined {}", format_timestamp(officer.created_at))}
                    if let Some(last_login) = officer.last_login {
                        {format!(" · last seen {}", format_timestamp(last_login))}
                    }
                </p>
            </div>
            <div class="text-right text-sm">
                <p class="font-medium text-neutral-900 dark:text-white">
                    {format!("{} assigned", officer.assigned_cases)}
                </p>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {format!("{} completed", officer.completed_cases)}
                </p>
            </div>
        </div>
    }
}

/// Officer management for the authority: roster, performance counters,
/// and account creation.
#[function_component]
pub fn OfficersPage() -> Html {
    let toast = use_toast();

    let filters = use_state(OfficerFilters::default);
    let show_form = use_state(|| false);
    let is_submitting = use_state(|| false);

    let (officers, handle) = use_officers((*filters).clone());

    let on_search = {
        let filters = filters.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filters.set(OfficerFilters {
                search: input.value(),
                page: 1,
                ..(*filters).clone()
            });
        })
    };

    let on_page_change = {
        let filters = filters.clone();
        Callback::from(move |page: u32| {
            filters.set(OfficerFilters {
                page,
                ..(*filters).clone()
            });
        })
    };

    let on_create = {
        let handle = handle.clone();
        let toast = toast.clone();
        let show_form = show_form.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |details: requests::CreateOfficer| {
            let handle = handle.clone();
            let toast = toast.clone();
            let show_form = show_form.clone();
            let is_submitting = is_submitting.clone();

            is_submitting.set(true);
            yew::platform::spawn_local(async move {
                match handle.create(details).await {
                    Ok(officer) => {
                        toast.success(format!(
                            "Officer account {} created",
                            officer.username
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
                <div>
                    <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                        {"Officers"}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400 mt-1">
                        {"Accounts, departments, and case load"}
                    </p>
                </div>
                if !*show_form {
                    <button
                        onclick={{
                            let show_form = show_form.clone();
                            Callback::from(move |_| show_form.set(true))
                        }}
                        class="px-4 py-2 rounded-md bg-neutral-900 dark:bg-white text-white dark:text-neutral-900 text-sm font-medium"
                    >
                        {"Create officer"}
                    </button>
                }
            </div>

            if *show_form {
                <OfficerForm
                    on_submit={on_create}
                    on_cancel={{
                        let show_form = show_form.clone();
                        Callback::from(move |_| show_form.set(false))
                    }}
                    is_submitting={*is_submitting}
                />
            }

            <input
                type="text"
                placeholder="Search by name or badge number"
                value={filters.search.clone()}
                oninput={on_search}
                class="px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm w-72"
            />

            {officers.render("officers", |list, is_refreshing, error| html! {
                <div class="space-y-3">
                    if let Some(error) = error {
                        <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 dark:text-red-400">
                                {format!("Refresh failed: {error}")}
                            </p>
                        </div>
                    }
                    if is_refreshing {
                        <p class="text-sm text-neutral-500">{"Refreshing..."}</p>
                    }
                    if list.users.is_empty() {
                        <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                            {"No officers match the current search"}
                        </p>
                    }
                    {for list.users.iter().map(officer_row)}
                    <Pagination
                        page={filters.page}
                        page_size={filters.page_size}
                        total={list.total}
                        on_page_change={on_page_change.clone()}
                    />
                </div>
            })}
        </div>
    }
}
