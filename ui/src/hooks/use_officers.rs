use payloads::{requests, responses};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::fetch_state::{FetchAction, FetchLifecycle};
use crate::hooks::{FetchHookReturn, use_fetch_with_apply};

/// Filter set for the authority's officer list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficerFilters {
    /// 1-based.
    pub page: u32,
    pub page_size: u32,
    pub search: String,
}

impl Default for OfficerFilters {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
            search: String::new(),
        }
    }
}

#[derive(Clone)]
pub struct OfficersHandle {
    dispatcher:
        UseReducerDispatcher<FetchLifecycle<responses::OfficerList>>,
}

impl OfficersHandle {
    /// Create an officer account (admin only); the confirmed record is
    /// spliced onto the top of the current page.
    pub async fn create(
        &self,
        details: requests::CreateOfficer,
    ) -> Result<responses::Officer, String> {
        let api_client = get_api_client();
        let officer = api_client
            .create_officer(&details)
            .await
            .map_err(|e| e.to_string())?;

        let created = officer.clone();
        self.dispatcher.dispatch(FetchAction::Apply(Box::new(
            move |list: &mut responses::OfficerList| {
                list.users.insert(0, created);
                list.total += 1;
            },
        )));
        Ok(officer)
    }
}

/// Hook for the officer management list with server-side search and
/// pagination.
#[hook]
pub fn use_officers(
    filters: OfficerFilters,
) -> (FetchHookReturn<responses::OfficerList>, OfficersHandle) {
    let deps = filters.clone();
    let (fetch, dispatcher) = use_fetch_with_apply(deps, move || {
        let filters = filters.clone();
        async move {
            let api_client = get_api_client();
            let params = requests::ListOfficers {
                skip: requests::skip_for_page(
                    filters.page,
                    filters.page_size,
                ),
                limit: filters.page_size,
                search: (!filters.search.is_empty())
                    .then_some(filters.search.as_str()),
            };
            api_client
                .list_officers(&params)
                .await
                .map_err(|e| e.to_string())
        }
    });

    (fetch, OfficersHandle { dispatcher })
}
