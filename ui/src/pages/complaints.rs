use payloads::{ComplaintId, ComplaintStatus, requests, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::components::{ComplaintForm, StatusBadge};
use crate::contexts::toast::use_toast;
use crate::hooks::{use_complaints, use_my_complaints};
use crate::status::AsStatusDisplay;
use crate::utils::format_timestamp;

fn complaint_row(
    complaint: &responses::Complaint,
    actions: Option<Html>,
) -> Html {
    html! {
        <div
            key={complaint.id.0}
            class="p-4 rounded-lg border border-neutral-200 dark:border-neutral-800 bg-white dark:bg-neutral-900 space-y-2"
        >
            <div class="flex items-center justify-between">
                <h3 class="font-semibold text-neutral-900 dark:text-white">
                    {complaint.title.clone()}
                </h3>
                <StatusBadge display={complaint.status.display()} />
            </div>
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {complaint.description.clone()}
            </p>
            <p class="text-xs text-neutral-500">
                {complaint.complaint_code.clone()}
                {" · "}
                {format_timestamp(complaint.created_at)}
                if let Some(rating) = complaint.user_rating {
                    {format!(" · rated {rating}/5")}
                }
            </p>
            if let Some(actions) = actions {
                <div class="pt-1">{actions}</div>
            }
        </div>
    }
}

/// The citizen's own complaints, with filing and rating.
#[function_component]
fn MyComplaints() -> Html {
    let toast = use_toast();
    let show_form = use_state(|| false);
    let is_submitting = use_state(|| false);

    let (complaints, handle) = use_my_complaints();

    let on_create = {
        let handle = handle.clone();
        let toast = toast.clone();
        let show_form = show_form.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |details: requests::CreateComplaint| {
            let handle = handle.clone();
            let toast = toast.clone();
            let show_form = show_form.clone();
            let is_submitting = is_submitting.clone();

            is_submitting.set(true);
            yew::platform::spawn_local(async move {
                match handle.create(details).await {
                    Ok(complaint) => {
                        toast.success(format!(
                            "Complaint {} filed",
                            complaint.complaint_code
                        ));
                        show_form.set(false);
                    }
                    Err(message) => toast.error(message),
                }
                is_submitting.set(false);
            });
        })
    };

    let rate = {
        let handle = handle.clone();
        let toast = toast.clone();

        move |complaint_id: ComplaintId, rating: u8| {
            let handle = handle.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                match handle.rate(complaint_id, rating, None).await {
                    Ok(_) => toast.success("Thanks for the feedback"),
                    Err(message) => toast.error(message),
                }
            });
        }
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                    {"My complaints"}
                </h1>
                if !*show_form {
                    <button
                        onclick={{
                            let show_form = show_form.clone();
                            Callback::from(move |_| show_form.set(true))
                        }}
                        class="px-4 py-2 rounded-md bg-neutral-900 dark:bg-white text-white dark:text-neutral-900 text-sm font-medium"
                    >
                        {"File complaint"}
                    </button>
                }
            </div>

            if *show_form {
                <ComplaintForm
                    on_submit={on_create}
                    on_cancel={{
                        let show_form = show_form.clone();
                        Callback::from(move |_| show_form.set(false))
                    }}
                    is_submitting={*is_submitting}
                />
            }

            {complaints.render("complaints", |list, _, error| html! {
                <div class="space-y-4">
                    if let Some(error) = error {
                        <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 dark:text-red-400">
                                {format!("Refresh failed: {error}")}
                            </p>
                        </div>
                    }
                    if list.complaints.is_empty() {
                        <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                            {"You haven't filed any complaints"}
                        </p>
                    }
                    {for list.complaints.iter().map(|complaint| {
                        // Resolved complaints can be rated once.
                        let actions = (complaint.status
                            == ComplaintStatus::Resolved
                            && complaint.user_rating.is_none())
                            .then(|| {
                                let complaint_id = complaint.id;
                                html! {
                                    <div class="flex items-center space-x-1">
                                        <span class="text-sm text-neutral-600 dark:text-neutral-400 mr-1">
                                            {"Rate the resolution:"}
                                        </span>
                                        {for (1..=5u8).map(|stars| {
                                            let rate = rate.clone();
                                            let onclick = Callback::from(move |_: MouseEvent| {
                                                rate(complaint_id, stars);
                                            });
                                            html! {
                                                <button
                                                    {onclick}
                                                    class="px-2 py-1 rounded border border-neutral-300 dark:border-neutral-700 text-sm"
                                                >
                                                    {stars}
                                                </button>
                                            }
                                        })}
                                    </div>
                                }
                            });
                        complaint_row(complaint, actions)
                    })}
                </div>
            })}
        </div>
    }
}

/// Read-only staff view over all complaints.
#[function_component]
fn AllComplaints() -> Html {
    let complaints = use_complaints(requests::ListComplaints {
        skip: 0,
        limit: 50,
        status: None,
    });

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                {"Complaints"}
            </h1>
            {complaints.render("complaints", |list, _, _| html! {
                <div class="space-y-4">
                    {for list.complaints.iter().map(|complaint| {
                        complaint_row(complaint, None)
                    })}
                </div>
            })}
        </div>
    }
}

#[function_component]
pub fn ComplaintsPage() -> Html {
    let (state, _) = use_store::<State>();
    let is_staff = state.role().is_some_and(|role| role.is_staff());

    if is_staff {
        html! { <AllComplaints /> }
    } else {
        html! { <MyComplaints /> }
    }
}
