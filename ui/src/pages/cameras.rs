use payloads::{CameraId, CameraStatus, requests};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::components::{CameraCard, CameraForm, Pagination};
use crate::contexts::toast::use_toast;
use crate::hooks::{CameraFilters, use_cameras};

fn parse_status(value: &str) -> Option<CameraStatus> {
    match value {
        "online" => Some(CameraStatus::Online),
        "offline" => Some(CameraStatus::Offline),
        "maintenance" => Some(CameraStatus::Maintenance),
        _ => None,
    }
}

#[function_component]
pub fn CamerasPage() -> Html {
    let (state, _) = use_store::<State>();
    let toast = use_toast();

    let filters = use_state(CameraFilters::default);
    let show_form = use_state(|| false);
    let is_submitting = use_state(|| false);
    let mutating = use_state(|| None::<CameraId>);

    let (cameras, handle) = use_cameras((*filters).clone());

    let on_search = {
        let filters = filters.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filters.set(CameraFilters {
                search: input.value(),
                page: 1,
                ..(*filters).clone()
            });
        })
    };

    let on_status = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            filters.set(CameraFilters {
                status: parse_status(&select.value()),
                page: 1,
                ..(*filters).clone()
            });
        })
    };

    let on_page_change = {
        let filters = filters.clone();
        Callback::from(move |page: u32| {
            filters.set(CameraFilters {
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

        Callback::from(move |details: requests::CreateCamera| {
            let handle = handle.clone();
            let toast = toast.clone();
            let show_form = show_form.clone();
            let is_submitting = is_submitting.clone();

            is_submitting.set(true);
            yew::platform::spawn_local(async move {
                match handle.create(details).await {
                    Ok(camera) => {
                        toast.success(format!(
                            "Camera {} registered",
                            camera.code
                        ));
                        show_form.set(false);
                    }
                    Err(message) => toast.error(message),
                }
                is_submitting.set(false);
            });
        })
    };

    let set_status = {
        let handle = handle.clone();
        let toast = toast.clone();
        let mutating = mutating.clone();

        move |camera_id: CameraId, status: CameraStatus| {
            let handle = handle.clone();
            let toast = toast.clone();
            let mutating = mutating.clone();

            mutating.set(Some(camera_id));
            yew::platform::spawn_local(async move {
                let details = requests::UpdateCamera {
                    status: Some(status),
                    ..Default::default()
                };
                match handle.update(camera_id, details).await {
                    Ok(camera) => toast.success(format!(
                        "Camera {} updated",
                        camera.code
                    )),
                    Err(message) => toast.error(message),
                }
                mutating.set(None);
            });
        }
    };

    let remove_camera = {
        let handle = handle.clone();
        let toast = toast.clone();
        let mutating = mutating.clone();

        move |camera_id: CameraId| {
            let handle = handle.clone();
            let toast = toast.clone();
            let mutating = mutating.clone();

            mutating.set(Some(camera_id));
            yew::platform::spawn_local(async move {
                match handle.remove(camera_id).await {
                    Ok(()) => toast.success("Camera removed"),
                    Err(message) => toast.error(message),
                }
                mutating.set(None);
            });
        }
    };

    let is_staff = state.role().is_some_and(|role| role.is_staff());

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                    {"Cameras"}
                </h1>
                if is_staff && !*show_form {
                    <button
                        onclick={{
                            let show_form = show_form.clone();
                            Callback::from(move |_| show_form.set(true))
                        }}
                        class="px-4 py-2 rounded-md bg-neutral-900 dark:bg-white text-white dark:text-neutral-900 text-sm font-medium"
                    >
                        {"Register camera"}
                    </button>
                }
            </div>

            if *show_form {
                <CameraForm
                    on_submit={on_create}
                    on_cancel={{
                        let show_form = show_form.clone();
                        Callback::from(move |_| show_form.set(false))
                    }}
                    is_submitting={*is_submitting}
                />
            }

            <div class="flex flex-wrap gap-3">
                <input
                    type="text"
                    placeholder="Search by name or location"
                    value={filters.search.clone()}
                    oninput={on_search}
                    class="px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm w-64"
                />
                <select
                    onchange={on_status}
                    class="px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm"
                >
                    <option value="all" selected={filters.status.is_none()}>{"All statuses"}</option>
                    <option value="online" selected={filters.status == Some(CameraStatus::Online)}>{"Online"}</option>
                    <option value="offline" selected={filters.status == Some(CameraStatus::Offline)}>{"Offline"}</option>
                    <option value="maintenance" selected={filters.status == Some(CameraStatus::Maintenance)}>{"Maintenance"}</option>
                </select>
            </div>

            {cameras.render("cameras", |list, is_refreshing, error| html! {
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
                    if list.items.is_empty() {
                        <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                            {"No cameras match the current filters"}
                        </p>
                    } else {
                        <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4">
                            {for list.items.iter().map(|camera| {
                                let actions = is_staff.then(|| {
                                    let camera_id = camera.id;
                                    let busy = *mutating == Some(camera_id);
                                    // Maintenance is the only state an
                                    // operator sets by hand; online/offline
                                    // track the camera's own heartbeat.
                                    let (next_status, toggle_label) =
                                        match camera.status {
                                            CameraStatus::Maintenance => (
                                                CameraStatus::Online,
                                                "End maintenance",
                                            ),
                                            _ => (
                                                CameraStatus::Maintenance,
                                                "Start maintenance",
                                            ),
                                        };
                                    let on_toggle = {
                                        let set_status = set_status.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            set_status(camera_id, next_status);
                                        })
                                    };
                                    let on_remove = {
                                        let remove_camera = remove_camera.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            remove_camera(camera_id);
                                        })
                                    };
                                    html! {
                                        <div class="flex space-x-2">
                                            <button
                                                onclick={on_toggle}
                                                disabled={busy}
                                                class="px-3 py-1.5 rounded-md border border-neutral-300 dark:border-neutral-700 text-sm disabled:opacity-50"
                                            >
                                                {toggle_label}
                                            </button>
                                            <button
                                                onclick={on_remove}
                                                disabled={busy}
                                                class="px-3 py-1.5 rounded-md border border-red-300 dark:border-red-800 text-sm text-red-700 dark:text-red-400 disabled:opacity-50"
                                            >
                                                {"Remove"}
                                            </button>
                                        </div>
                                    }
                                });
                                html! {
                                    <CameraCard
                                        key={camera.id.0}
                                        camera={camera.clone()}
                                        actions={actions}
                                    />
                                }
                            })}
                        </div>
                    }
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
