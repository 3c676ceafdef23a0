use payloads::responses;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_fetch};

/// Hook for the logged-in officer's personal dashboard statistics.
#[hook]
pub fn use_officer_stats() -> FetchHookReturn<responses::OfficerStats> {
    use_fetch((), move || async move {
        let api_client = get_api_client();
        api_client.officer_stats().await.map_err(|e| e.to_string())
    })
}
