use payloads::{ReviewAction, ViolationId};
use yew::prelude::*;

use crate::components::{Pagination, ViolationCard};
use crate::contexts::toast::use_toast;
use crate::hooks::{ReviewHandle, ReviewQueueFilters, use_review_queue};

fn review_button(
    label: &str,
    classes: &str,
    disabled: bool,
    onclick: Callback<MouseEvent>,
) -> Html {
    html! {
        <button
            {onclick}
            {disabled}
            class={format!("px-3 py-1.5 rounded-md text-sm font-medium disabled:opacity-50 {classes}")}
        >
            {label.to_string()}
        </button>
    }
}

#[function_component]
pub fn ReviewQueuePage() -> Html {
    let toast = use_toast();
    let filters = use_state(ReviewQueueFilters::default);
    let reviewing = use_state(|| None::<ViolationId>);

    let (queue, handle) = use_review_queue((*filters).clone());

    let on_page_change = {
        let filters = filters.clone();
        Callback::from(move |page: u32| {
            filters.set(ReviewQueueFilters {
                page,
                ..(*filters).clone()
            });
        })
    };

    let review = {
        let toast = toast.clone();
        let reviewing = reviewing.clone();

        move |handle: ReviewHandle,
              violation_id: ViolationId,
              action: ReviewAction| {
            let toast = toast.clone();
            let reviewing = reviewing.clone();

            reviewing.set(Some(violation_id));
            yew::platform::spawn_local(async move {
                match handle.review(violation_id, action, None).await {
                    Ok(_) => match action {
                        ReviewAction::Approve => {
                            toast.success("Violation approved")
                        }
                        ReviewAction::Reject => {
                            toast.success("Violation rejected")
                        }
                    },
                    Err(message) => toast.error(message),
                }
                reviewing.set(None);
            });
        }
    };

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                    {"Review queue"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400 mt-1">
                    {"AI-detected violations awaiting a decision"}
                </p>
            </div>

            {queue.render("review queue", |list, is_refreshing, error| html! {
                <div class="space-y-4">
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
                    if list.total == 0 {
                        <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                            {"The queue is empty. Nothing waiting for review."}
                        </p>
                    }
                    {for list.violations.iter().map(|violation| {
                        let violation_id = violation.id;
                        let busy = *reviewing == Some(violation_id);

                        let on_approve = {
                            let review = review.clone();
                            let handle = handle.clone();
                            Callback::from(move |_: MouseEvent| {
                                review(
                                    handle.clone(),
                                    violation_id,
                                    ReviewAction::Approve,
                                );
                            })
                        };
                        let on_reject = {
                            let review = review.clone();
                            let handle = handle.clone();
                            Callback::from(move |_: MouseEvent| {
                                review(
                                    handle.clone(),
                                    violation_id,
                                    ReviewAction::Reject,
                                );
                            })
                        };

                        let actions = html! {
                            <div class="flex space-x-2">
                                {review_button(
                                    "Approve",
                                    "bg-neutral-900 dark:bg-white text-white dark:text-neutral-900",
                                    busy,
                                    on_approve,
                                )}
                                {review_button(
                                    "Reject",
                                    "border border-neutral-300 dark:border-neutral-700",
                                    busy,
                                    on_reject,
                                )}
                            </div>
                        };

                        html! {
                            <ViolationCard
                                key={violation.id.0}
                                violation={violation.clone()}
                                actions={actions}
                            />
                        }
                    })}
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
