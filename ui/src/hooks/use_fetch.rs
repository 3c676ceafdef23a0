use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::fetch_state::{FetchAction, FetchLifecycle, FetchState};

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Returns true if this is the initial load (data not yet fetched,
    /// currently loading, and no error).
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && !self.data.is_fetched() && self.error.is_none()
    }

    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// Handles the common pattern of:
    /// - No data + loading: "Loading {context}..."
    /// - No data + error: error panel for the failed initial load
    /// - Has data: call the render function with (data, is_loading, error)
    ///
    /// The render function receives the refetch loading flag and any error
    /// from a failed refresh; data from the previous fetch is still shown
    /// in that case.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match self.data.as_ref() {
            None => {
                if self.is_loading {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Loading {}...", context)}
                            </p>
                        </div>
                    }
                } else if let Some(error) = &self.error {
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {format!("Error loading {}: {}", context, error)}
                            </p>
                            <button
                                onclick={self.refetch.reform(|_: MouseEvent| ())}
                                class="mt-2 text-sm font-medium underline text-red-700 dark:text-red-400"
                            >
                                {"Retry"}
                            </button>
                        </div>
                    }
                } else {
                    // Shouldn't happen: no data, not loading, no error
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("No {} found", context)}
                            </p>
                        </div>
                    }
                }
            }
            Some(data) => {
                render_fn(data, self.is_loading, self.error.as_ref())
            }
        }
    }
}

/// Generic fetch hook composer.
///
/// Automatically fetches on mount and whenever `deps` changes, and exposes
/// a refetch capability. The fetch function captures its parameters from
/// the closure; `deps` drives dependency tracking in use_callback and
/// use_effect_with, so every scalar that affects the request must be part
/// of it.
///
/// # Example
///
/// ```ignore
/// #[hook]
/// pub fn use_camera(camera_id: CameraId) -> FetchHookReturn<responses::Camera> {
///     use_fetch(camera_id, move || async move {
///         let api_client = get_api_client();
///         api_client
///             .get_camera(&camera_id)
///             .await
///             .map_err(|e| e.to_string())
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let (fetch, _) = use_fetch_with_apply(deps, fetch_fn);
    fetch
}

/// Like [`use_fetch`], but also hands back the lifecycle dispatcher so the
/// caller can splice confirmed mutations into the retained data
/// (`FetchAction::Apply`). Resource hooks with create/update/delete
/// operations build on this.
#[hook]
pub fn use_fetch_with_apply<T, D, F, Fut>(
    deps: D,
    fetch_fn: F,
) -> (FetchHookReturn<T>, UseReducerDispatcher<FetchLifecycle<T>>)
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let lifecycle = use_reducer(FetchLifecycle::<T>::default);
    // Stamp source for request cycles; settles carrying an old stamp are
    // discarded by the reducer.
    let stamp = use_mut_ref(|| 0u64);

    let refetch = {
        let lifecycle = lifecycle.clone();
        let stamp = stamp.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let lifecycle = lifecycle.clone();
            let fetch_fn = fetch_fn.clone();
            let current = {
                let mut stamp = stamp.borrow_mut();
                *stamp += 1;
                *stamp
            };

            lifecycle.dispatch(FetchAction::Begin(current));
            yew::platform::spawn_local(async move {
                let result = fetch_fn().await;
                lifecycle.dispatch(FetchAction::Settle(current, result));
            });
        })
    };

    // Auto-fetch on mount and when deps change. A cycle already in flight
    // is superseded by its stamp, so there is no in-flight guard.
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
        });
    }

    let dispatcher = lifecycle.dispatcher();
    (
        FetchHookReturn {
            data: lifecycle.data.clone(),
            is_loading: lifecycle.is_loading,
            error: lifecycle.error.clone(),
            refetch: Callback::from(move |_| refetch.emit(())),
        },
        dispatcher,
    )
}
