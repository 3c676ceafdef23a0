use jiff::Timestamp;
use payloads::{CameraId, ProcessingStatus, requests, responses};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::fetch_state::{FetchAction, FetchLifecycle};
use crate::hooks::{FetchHookReturn, use_fetch_with_apply};

/// Server-side filter set for a camera's video library. The sort control
/// in the library is deliberately NOT part of this: sorting reorders the
/// already-fetched page client-side without a refetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFilters {
    /// 1-based.
    pub page: u32,
    pub page_size: u32,
    pub has_violations: Option<bool>,
    pub processing_status: Option<ProcessingStatus>,
    pub date_from: Option<Timestamp>,
    pub date_to: Option<Timestamp>,
}

impl Default for VideoFilters {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
            has_violations: None,
            processing_status: None,
            date_from: None,
            date_to: None,
        }
    }
}

#[derive(Clone)]
pub struct CameraVideosHandle {
    camera_id: CameraId,
    dispatcher: UseReducerDispatcher<FetchLifecycle<responses::VideoList>>,
}

impl CameraVideosHandle {
    /// Upload a clip for processing; the confirmed record is spliced onto
    /// the top of the current page.
    pub async fn upload(
        &self,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<responses::CameraVideo, String> {
        let api_client = get_api_client();
        let video = api_client
            .upload_camera_video(&self.camera_id, &file_name, bytes)
            .await
            .map_err(|e| e.to_string())?;

        let uploaded = video.clone();
        self.dispatcher.dispatch(FetchAction::Apply(Box::new(
            move |list: &mut responses::VideoList| {
                list.videos.insert(0, uploaded);
                list.total += 1;
            },
        )));
        Ok(video)
    }
}

/// Hook for a camera's video list with server-side filtering and
/// pagination. `camera_id` and every filter field participate in the
/// refetch trigger.
#[hook]
pub fn use_camera_videos(
    camera_id: CameraId,
    filters: VideoFilters,
) -> (FetchHookReturn<responses::VideoList>, CameraVideosHandle) {
    let deps = (camera_id, filters.clone());
    let (fetch, dispatcher) = use_fetch_with_apply(deps, move || {
        let filters = filters.clone();
        async move {
            let api_client = get_api_client();
            let params = requests::ListVideos {
                skip: requests::skip_for_page(
                    filters.page,
                    filters.page_size,
                ),
                limit: filters.page_size,
                has_violations: filters.has_violations,
                processing_status: filters.processing_status,
                date_from: filters.date_from,
                date_to: filters.date_to,
            };
            api_client
                .list_camera_videos(&camera_id, &params)
                .await
                .map_err(|e| e.to_string())
        }
    });

    (
        fetch,
        CameraVideosHandle {
            camera_id,
            dispatcher,
        },
    )
}
