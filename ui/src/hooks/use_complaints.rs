use payloads::{ComplaintId, requests, responses};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::fetch_state::{FetchAction, FetchLifecycle};
use crate::hooks::{FetchHookReturn, use_fetch_with_apply};

#[derive(Clone)]
pub struct ComplaintsHandle {
    dispatcher:
        UseReducerDispatcher<FetchLifecycle<responses::ComplaintList>>,
}

impl ComplaintsHandle {
    pub async fn create(
        &self,
        details: requests::CreateComplaint,
    ) -> Result<responses::Complaint, String> {
        let api_client = get_api_client();
        let complaint = api_client
            .create_complaint(&details)
            .await
            .map_err(|e| e.to_string())?;

        let created = complaint.clone();
        self.dispatcher.dispatch(FetchAction::Apply(Box::new(
            move |list: &mut responses::ComplaintList| {
                list.complaints.insert(0, created);
                list.total += 1;
            },
        )));
        Ok(complaint)
    }

    /// Rate a resolved complaint; the updated record replaces the stale
    /// one in place.
    pub async fn rate(
        &self,
        complaint_id: ComplaintId,
        rating: u8,
        feedback: Option<String>,
    ) -> Result<responses::Complaint, String> {
        let api_client = get_api_client();
        let details = requests::RateComplaint { rating, feedback };
        let complaint = api_client
            .rate_complaint(&complaint_id, &details)
            .await
            .map_err(|e| e.to_string())?;

        let rated = complaint.clone();
        self.dispatcher.dispatch(FetchAction::Apply(Box::new(
            move |list: &mut responses::ComplaintList| {
                if let Some(existing) =
                    list.complaints.iter_mut().find(|c| c.id == rated.id)
                {
                    *existing = rated;
                }
            },
        )));
        Ok(complaint)
    }
}

/// Hook for the logged-in citizen's complaints.
#[hook]
pub fn use_my_complaints()
-> (FetchHookReturn<responses::ComplaintList>, ComplaintsHandle) {
    let (fetch, dispatcher) = use_fetch_with_apply((), move || async move {
        let api_client = get_api_client();
        api_client.my_complaints().await.map_err(|e| e.to_string())
    });

    (fetch, ComplaintsHandle { dispatcher })
}

/// Hook for the staff-side complaint list.
#[hook]
pub fn use_complaints(
    params: requests::ListComplaints,
) -> FetchHookReturn<responses::ComplaintList> {
    let (fetch, _) = use_fetch_with_apply(
        (params.skip, params.limit, params.status),
        move || async move {
            let api_client = get_api_client();
            api_client
                .list_complaints(&params)
                .await
                .map_err(|e| e.to_string())
        },
    );
    fetch
}
