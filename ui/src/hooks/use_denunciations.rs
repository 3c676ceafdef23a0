use payloads::{requests, responses};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::fetch_state::{FetchAction, FetchLifecycle};
use crate::hooks::{FetchHookReturn, use_fetch, use_fetch_with_apply};

#[derive(Clone)]
pub struct DenunciationsHandle {
    dispatcher:
        UseReducerDispatcher<FetchLifecycle<responses::DenunciationList>>,
}

impl DenunciationsHandle {
    pub async fn create(
        &self,
        details: requests::CreateDenunciation,
    ) -> Result<responses::Denunciation, String> {
        let api_client = get_api_client();
        let denunciation = api_client
            .create_denunciation(&details)
            .await
            .map_err(|e| e.to_string())?;

        let created = denunciation.clone();
        self.dispatcher.dispatch(FetchAction::Apply(Box::new(
            move |list: &mut responses::DenunciationList| {
                list.denunciations.insert(0, created);
                list.total += 1;
            },
        )));
        Ok(denunciation)
    }
}

/// Hook for the logged-in citizen's denunciations.
#[hook]
pub fn use_my_denunciations()
-> (FetchHookReturn<responses::DenunciationList>, DenunciationsHandle) {
    let (fetch, dispatcher) = use_fetch_with_apply((), move || async move {
        let api_client = get_api_client();
        api_client
            .my_denunciations()
            .await
            .map_err(|e| e.to_string())
    });

    (fetch, DenunciationsHandle { dispatcher })
}

/// Hook for the staff-side denunciation list.
#[hook]
pub fn use_denunciations(
    params: requests::ListDenunciations,
) -> FetchHookReturn<responses::DenunciationList> {
    use_fetch(
        (params.skip, params.limit, params.status),
        move || async move {
            let api_client = get_api_client();
            api_client
                .list_denunciations(&params)
                .await
                .map_err(|e| e.to_string())
        },
    )
}
