use payloads::{
    ReviewAction, ViolationId, ViolationStatus, requests, responses,
};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::fetch_state::{FetchAction, FetchLifecycle};
use crate::hooks::{FetchHookReturn, use_fetch, use_fetch_with_apply};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewQueueFilters {
    /// 1-based.
    pub page: u32,
    pub page_size: u32,
    pub status: Option<ViolationStatus>,
}

impl Default for ReviewQueueFilters {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
            status: None,
        }
    }
}

#[derive(Clone)]
pub struct ReviewHandle {
    dispatcher:
        UseReducerDispatcher<FetchLifecycle<responses::ViolationList>>,
}

impl ReviewHandle {
    /// Approve or reject a detected violation. The decided violation
    /// leaves the pending queue once the server confirms.
    pub async fn review(
        &self,
        violation_id: ViolationId,
        action: ReviewAction,
        notes: Option<String>,
    ) -> Result<responses::Violation, String> {
        let api_client = get_api_client();
        let details = requests::ReviewViolation { action, notes };
        let violation = api_client
            .review_violation(&violation_id, &details)
            .await
            .map_err(|e| e.to_string())?;

        self.dispatcher.dispatch(FetchAction::Apply(Box::new(
            move |list: &mut responses::ViolationList| {
                list.violations.retain(|v| v.id != violation_id);
                list.total = list.total.saturating_sub(1);
            },
        )));
        Ok(violation)
    }
}

/// Hook for the officer review queue.
#[hook]
pub fn use_review_queue(
    filters: ReviewQueueFilters,
) -> (FetchHookReturn<responses::ViolationList>, ReviewHandle) {
    let deps = filters.clone();
    let (fetch, dispatcher) = use_fetch_with_apply(deps, move || {
        let filters = filters.clone();
        async move {
            let api_client = get_api_client();
            let params = requests::ListViolations {
                skip: requests::skip_for_page(
                    filters.page,
                    filters.page_size,
                ),
                limit: filters.page_size,
                status: filters.status,
                license_plate: None,
            };
            api_client
                .review_queue(&params)
                .await
                .map_err(|e| e.to_string())
        }
    });

    (fetch, ReviewHandle { dispatcher })
}

/// Hook for the logged-in citizen's own violations.
#[hook]
pub fn use_my_violations() -> FetchHookReturn<Vec<responses::Violation>> {
    use_fetch((), move || async move {
        let api_client = get_api_client();
        api_client.my_violations().await.map_err(|e| e.to_string())
    })
}

/// Hook for license-plate lookup. `None` means no search has been
/// submitted yet and issues no network call.
#[hook]
pub fn use_violation_lookup(
    license_plate: Option<String>,
) -> FetchHookReturn<Vec<responses::Violation>> {
    use_fetch(license_plate.clone(), move || {
        let license_plate = license_plate.clone();
        async move {
            let Some(plate) = license_plate else {
                return Ok(Vec::new());
            };
            let api_client = get_api_client();
            let params = requests::ListViolations {
                skip: 0,
                limit: 50,
                status: None,
                license_plate: Some(&plate),
            };
            api_client
                .list_violations(&params)
                .await
                .map(|list| list.violations)
                .map_err(|e| e.to_string())
        }
    })
}
