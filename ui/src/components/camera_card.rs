use payloads::responses;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::StatusBadge;
use crate::status::AsStatusDisplay;

#[derive(Properties, PartialEq)]
pub struct CameraCardProps {
    pub camera: responses::Camera,
    /// Management actions for staff, rendered below the link row.
    #[prop_or_default]
    pub actions: Option<Html>,
}

#[function_component]
pub fn CameraCard(props: &CameraCardProps) -> Html {
    let camera = &props.camera;

    html! {
        <div class="p-4 rounded-lg border border-neutral-200 dark:border-neutral-800 bg-white dark:bg-neutral-900 space-y-2">
            <div class="flex items-center justify-between">
                <h3 class="font-semibold text-neutral-900 dark:text-white">
                    {camera.name.clone()}
                </h3>
                <StatusBadge display={camera.status.display()} />
            </div>
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {camera.location_name.clone()}
            </p>
            <p class="text-xs text-neutral-500 dark:text-neutral-500">
                {camera.code.clone()}
                if let Some(resolution) = &camera.resolution {
                    {" · "}{resolution.clone()}
                }
            </p>
            <div class="pt-2">
                <Link<Route>
                    to={Route::CameraVideos { camera_id: camera.id.0 }}
                    classes="text-sm font-medium underline text-neutral-900 dark:text-neutral-100"
                >
                    {"View recordings"}
                </Link<Route>>
            </div>
            if let Some(actions) = &props.actions {
                <div class="pt-1">{actions.clone()}</div>
            }
        </div>
    }
}
