use jiff::Timestamp;
use payloads::{CameraId, ProcessingStatus, responses};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{Pagination, StatusBadge, VideoUpload};
use crate::contexts::toast::use_toast;
use crate::hooks::{VideoFilters, use_camera, use_camera_videos};
use crate::status::AsStatusDisplay;
use crate::utils::{format_duration, format_file_size, format_timestamp};

/// Sort order for the fetched page. Sorting is client-side only: changing
/// it reorders what is already on screen and never triggers a refetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortKey {
    Newest,
    Oldest,
    LongestDuration,
}

fn sorted_videos(
    videos: &[responses::CameraVideo],
    sort: SortKey,
) -> Vec<responses::CameraVideo> {
    let mut sorted = videos.to_vec();
    match sort {
        SortKey::Newest => {
            sorted.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at))
        }
        SortKey::Oldest => {
            sorted.sort_by(|a, b| a.uploaded_at.cmp(&b.uploaded_at))
        }
        SortKey::LongestDuration => sorted.sort_by(|a, b| {
            b.duration.unwrap_or(0).cmp(&a.duration.unwrap_or(0))
        }),
    }
    sorted
}

fn parse_date(value: &str) -> Option<Timestamp> {
    if value.is_empty() {
        return None;
    }
    format!("{value}T00:00:00Z").parse().ok()
}

fn parse_processing_status(value: &str) -> Option<ProcessingStatus> {
    match value {
        "pending" => Some(ProcessingStatus::Pending),
        "processing" => Some(ProcessingStatus::Processing),
        "completed" => Some(ProcessingStatus::Completed),
        "failed" => Some(ProcessingStatus::Failed),
        _ => None,
    }
}

#[derive(Properties, PartialEq)]
pub struct CameraVideosPageProps {
    pub camera_id: CameraId,
}

#[function_component]
pub fn CameraVideosPage(props: &CameraVideosPageProps) -> Html {
    let toast = use_toast();
    let camera = use_camera(props.camera_id);

    let filters = use_state(VideoFilters::default);
    let sort = use_state(|| SortKey::Newest);
    let is_uploading = use_state(|| false);

    let (videos, handle) =
        use_camera_videos(props.camera_id, (*filters).clone());

    let on_violations_filter = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let has_violations = match select.value().as_str() {
                "with" => Some(true),
                "without" => Some(false),
                _ => None,
            };
            filters.set(VideoFilters {
                has_violations,
                page: 1,
                ..(*filters).clone()
            });
        })
    };

    let on_status_filter = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            filters.set(VideoFilters {
                processing_status: parse_processing_status(&select.value()),
                page: 1,
                ..(*filters).clone()
            });
        })
    };

    let on_date_from = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filters.set(VideoFilters {
                date_from: parse_date(&input.value()),
                page: 1,
                ..(*filters).clone()
            });
        })
    };

    let on_date_to = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filters.set(VideoFilters {
                date_to: parse_date(&input.value()),
                page: 1,
                ..(*filters).clone()
            });
        })
    };

    let on_sort = {
        let sort = sort.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            sort.set(match select.value().as_str() {
                "oldest" => SortKey::Oldest,
                "duration" => SortKey::LongestDuration,
                _ => SortKey::Newest,
            });
        })
    };

    let on_page_change = {
        let filters = filters.clone();
        Callback::from(move |page: u32| {
            filters.set(VideoFilters {
                page,
                ..(*filters).clone()
            });
        })
    };

    let on_upload = {
        let handle = handle.clone();
        let toast = toast.clone();
        let is_uploading = is_uploading.clone();

        Callback::from(move |(file_name, bytes): (String, Vec<u8>)| {
            let handle = handle.clone();
            let toast = toast.clone();
            let is_uploading = is_uploading.clone();

            is_uploading.set(true);
            yew::platform::spawn_local(async move {
                match handle.upload(file_name, bytes).await {
                    Ok(_) => toast.success("Recording uploaded"),
                    Err(message) => toast.error(message),
                }
                is_uploading.set(false);
            });
        })
    };

    html! {
        <div class="space-y-6">
            {camera.render("camera", |camera, _, _| html! {
                <div>
                    <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                        {format!("{} recordings", camera.name)}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400 mt-1">
                        {camera.location_name.clone()}
                    </p>
                </div>
            })}

            <div class="flex flex-wrap items-end gap-3">
                <select
                    onchange={on_violations_filter}
                    class="px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm"
                >
                    <option value="all" selected={filters.has_violations.is_none()}>{"All recordings"}</option>
                    <option value="with" selected={filters.has_violations == Some(true)}>{"With violations"}</option>
                    <option value="without" selected={filters.has_violations == Some(false)}>{"Without violations"}</option>
                </select>
                <select
                    onchange={on_status_filter}
                    class="px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm"
                >
                    <option value="all" selected={filters.processing_status.is_none()}>{"Any processing state"}</option>
                    <option value="pending" selected={filters.processing_status == Some(ProcessingStatus::Pending)}>{"Pending"}</option>
                    <option value="processing" selected={filters.processing_status == Some(ProcessingStatus::Processing)}>{"Processing"}</option>
                    <option value="completed" selected={filters.processing_status == Some(ProcessingStatus::Completed)}>{"Completed"}</option>
                    <option value="failed" selected={filters.processing_status == Some(ProcessingStatus::Failed)}>{"Failed"}</option>
                </select>
                <label class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"From "}
                    <input
                        type="date"
                        onchange={on_date_from}
                        class="px-2 py-1.5 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm"
                    />
                </label>
                <label class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"To "}
                    <input
                        type="date"
                        onchange={on_date_to}
                        class="px-2 py-1.5 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm"
                    />
                </label>
                <select
                    onchange={on_sort}
                    class="px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm"
                >
                    <option value="newest" selected={*sort == SortKey::Newest}>{"Newest first"}</option>
                    <option value="oldest" selected={*sort == SortKey::Oldest}>{"Oldest first"}</option>
                    <option value="duration" selected={*sort == SortKey::LongestDuration}>{"Longest first"}</option>
                </select>
            </div>

            <VideoUpload on_file={on_upload} is_uploading={*is_uploading} />

            {videos.render("recordings", |list, is_refreshing, error| {
                let sorted = sorted_videos(&list.videos, *sort);
                html! {
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
                                {"No recordings match the current filters"}
                            </p>
                        } else {
                            <div class="space-y-3">
                                {for sorted.iter().map(|video| html! {
                                    <div
                                        key={video.id.0}
                                        class="flex items-center gap-4 p-3 rounded-lg border border-neutral-200 dark:border-neutral-800 bg-white dark:bg-neutral-900"
                                    >
                                        if let Some(thumbnail) = &video.thumbnail_url {
                                            <img
                                                src={thumbnail.clone()}
                                                alt="Thumbnail"
                                                class="h-16 w-28 object-cover rounded"
                                            />
                                        }
                                        <div class="flex-1 min-w-0">
                                            <div class="flex items-center gap-2">
                                                <StatusBadge display={video.processing_status.display()} />
                                                if video.has_violations {
                                                    <span class="text-xs font-medium text-red-700 dark:text-red-400">
                                                        {format!("{} violations", video.violation_count)}
                                                    </span>
                                                }
                                            </div>
                                            <p class="text-xs text-neutral-500 mt-1">
                                                {format_timestamp(video.uploaded_at)}
                                                if let Some(duration) = video.duration {
                                                    {" · "}{format_duration(duration)}
                                                }
                                                if let Some(size) = video.file_size {
                                                    {" · "}{format_file_size(size)}
                                                }
                                            </p>
                                        </div>
                                        <a
                                            href={video.cloudinary_url.clone()}
                                            target="_blank"
                                            class="text-sm font-medium underline text-neutral-900 dark:text-neutral-100"
                                        >
                                            {"Play"}
                                        </a>
                                    </div>
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
                }
            })}
        </div>
    }
}
