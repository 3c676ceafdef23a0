use payloads::{CameraId, CameraStatus, requests, responses};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::fetch_state::{FetchAction, FetchLifecycle};
use crate::hooks::{FetchHookReturn, use_fetch, use_fetch_with_apply};

/// Filter set for the camera list. Every field participates in the
/// refetch trigger; all filtering happens server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraFilters {
    /// 1-based.
    pub page: u32,
    pub page_size: u32,
    pub status: Option<CameraStatus>,
    pub search: String,
}

impl Default for CameraFilters {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 12,
            status: None,
            search: String::new(),
        }
    }
}

/// Write operations on the camera list. Local state is only updated after
/// the server confirms the write.
#[derive(Clone)]
pub struct CamerasHandle {
    dispatcher: UseReducerDispatcher<FetchLifecycle<responses::CameraList>>,
}

impl CamerasHandle {
    pub async fn create(
        &self,
        details: requests::CreateCamera,
    ) -> Result<responses::Camera, String> {
        let api_client = get_api_client();
        let camera = api_client
            .create_camera(&details)
            .await
            .map_err(|e| e.to_string())?;

        let created = camera.clone();
        self.dispatcher.dispatch(FetchAction::Apply(Box::new(
            move |list: &mut responses::CameraList| {
                list.items.insert(0, created);
                list.total += 1;
            },
        )));
        Ok(camera)
    }

    pub async fn update(
        &self,
        camera_id: CameraId,
        details: requests::UpdateCamera,
    ) -> Result<responses::Camera, String> {
        let api_client = get_api_client();
        let camera = api_client
            .update_camera(&camera_id, &details)
            .await
            .map_err(|e| e.to_string())?;

        let updated = camera.clone();
        self.dispatcher.dispatch(FetchAction::Apply(Box::new(
            move |list: &mut responses::CameraList| {
                if let Some(existing) =
                    list.items.iter_mut().find(|c| c.id == updated.id)
                {
                    *existing = updated;
                }
            },
        )));
        Ok(camera)
    }

    pub async fn remove(&self, camera_id: CameraId) -> Result<(), String> {
        let api_client = get_api_client();
        api_client
            .delete_camera(&camera_id)
            .await
            .map_err(|e| e.to_string())?;

        self.dispatcher.dispatch(FetchAction::Apply(Box::new(
            move |list: &mut responses::CameraList| {
                list.items.retain(|c| c.id != camera_id);
                list.total = list.total.saturating_sub(1);
            },
        )));
        Ok(())
    }
}

/// Hook for the camera list with server-side filtering and pagination.
#[hook]
pub fn use_cameras(
    filters: CameraFilters,
) -> (FetchHookReturn<responses::CameraList>, CamerasHandle) {
    let deps = filters.clone();
    let (fetch, dispatcher) = use_fetch_with_apply(deps, move || {
        let filters = filters.clone();
        async move {
            let api_client = get_api_client();
            let params = requests::ListCameras {
                skip: requests::skip_for_page(
                    filters.page,
                    filters.page_size,
                ),
                limit: filters.page_size,
                status: filters.status,
                search: (!filters.search.is_empty())
                    .then_some(filters.search.as_str()),
            };
            api_client
                .list_cameras(&params)
                .await
                .map_err(|e| e.to_string())
        }
    });

    (fetch, CamerasHandle { dispatcher })
}

/// Hook for a single camera's details.
#[hook]
pub fn use_camera(camera_id: CameraId) -> FetchHookReturn<responses::Camera> {
    use_fetch(camera_id, move || async move {
        let api_client = get_api_client();
        api_client
            .get_camera(&camera_id)
            .await
            .map_err(|e| e.to_string())
    })
}
