use payloads::{requests, responses};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_fetch};

/// Hook for the statistics bundle over a trailing window of days.
#[hook]
pub fn use_statistics(days: u32) -> FetchHookReturn<responses::Statistics> {
    use_fetch(days, move || async move {
        let api_client = get_api_client();
        let params = requests::StatisticsRange { days };
        api_client
            .statistics(&params)
            .await
            .map_err(|e| e.to_string())
    })
}

/// Hook for the authority dashboard header counts.
#[hook]
pub fn use_admin_dashboard() -> FetchHookReturn<responses::AdminDashboard> {
    use_fetch((), move || async move {
        let api_client = get_api_client();
        api_client
            .admin_dashboard()
            .await
            .map_err(|e| e.to_string())
    })
}
