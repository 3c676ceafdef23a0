use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod contexts;
pub mod hooks;
mod logs;
pub mod pages;
pub mod session;
pub mod state;
pub mod status;
pub mod utils;

pub use state::{AuthState, State};

use components::ToastContainer;
use components::layout::MainLayout;
use contexts::toast::ToastProvider;

// Global API client - base address is configurable at build time, with a
// same-origin fallback for deployments that serve the UI and API together.
// The bearer token always comes from the session module; no other call
// site reads storage.
pub fn get_api_client() -> APIClient {
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            let window = web_sys::window().unwrap();
            window.location().origin().unwrap()
        });

    APIClient {
        address,
        bearer_token: session::access_token(),
        inner_client: reqwest::Client::new(),
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/cameras")]
    Cameras,
    #[at("/cameras/:camera_id/videos")]
    CameraVideos { camera_id: i64 },
    #[at("/officers")]
    Officers,
    #[at("/review")]
    ReviewQueue,
    #[at("/my-violations")]
    MyViolations,
    #[at("/lookup")]
    ViolationLookup,
    #[at("/complaints")]
    Complaints,
    #[at("/denunciations")]
    Denunciations,
    #[at("/payments")]
    Payments,
    #[at("/statistics")]
    Statistics,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| {
        logs::init_logging();
    });

    html! {
        <BrowserRouter>
            <ToastProvider>
                <AppShell />
            </ToastProvider>
        </BrowserRouter>
    }
}

/// Inner shell so that authentication runs below the toast/router
/// providers.
#[function_component]
fn AppShell() -> Html {
    hooks::use_authentication();

    html! {
        <div class="min-h-screen bg-white dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
            <MainLayout>
                <Switch<Route> render={switch} />
            </MainLayout>
            <ToastContainer />
        </div>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::HomePage /> },
        Route::Login => html! { <pages::LoginPage /> },
        Route::Cameras => html! { <pages::CamerasPage /> },
        Route::CameraVideos { camera_id } => html! {
            <pages::CameraVideosPage camera_id={payloads::CameraId(camera_id)} />
        },
        Route::Officers => html! { <pages::OfficersPage /> },
        Route::ReviewQueue => html! { <pages::ReviewQueuePage /> },
        Route::MyViolations => html! { <pages::MyViolationsPage /> },
        Route::ViolationLookup => html! { <pages::ViolationLookupPage /> },
        Route::Complaints => html! { <pages::ComplaintsPage /> },
        Route::Denunciations => html! { <pages::DenunciationsPage /> },
        Route::Payments => html! { <pages::PaymentsPage /> },
        Route::Statistics => html! { <pages::StatisticsPage /> },
        Route::NotFound => html! { <pages::NotFoundPage /> },
    }
}
