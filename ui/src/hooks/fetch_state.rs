//! The fetch lifecycle shared by every resource hook.
//!
//! Each request cycle is stamped with a monotonically increasing sequence
//! number allocated by the owning hook. A settle whose stamp no longer
//! matches the latest issued stamp is discarded, so a slow response for
//! stale parameters can never overwrite newer state. Previously fetched
//! data survives later failures; only a newer success replaces it.

use std::rc::Rc;
use yew::Reducible;

/// Distinguishes "not fetched yet" from "fetched and empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchState::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            FetchState::Fetched(data) => Some(data),
            FetchState::NotFetched => None,
        }
    }
}

/// One resource's fetch lifecycle: the retained data, the in-flight flag,
/// the last error, and the stamp of the latest issued request.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchLifecycle<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    latest_stamp: u64,
}

impl<T> Default for FetchLifecycle<T> {
    fn default() -> Self {
        Self {
            data: FetchState::NotFetched,
            is_loading: false,
            error: None,
            latest_stamp: 0,
        }
    }
}

pub enum FetchAction<T> {
    /// A new request cycle was issued with this stamp.
    Begin(u64),
    /// The request with this stamp settled.
    Settle(u64, Result<T, String>),
    /// Splice a confirmed mutation into the retained data without a fetch
    /// cycle. No-op until the first successful fetch.
    Apply(Box<dyn FnOnce(&mut T)>),
}

impl<T: Clone> Reducible for FetchLifecycle<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FetchAction::Begin(stamp) => Rc::new(Self {
                data: self.data.clone(),
                is_loading: true,
                error: None,
                latest_stamp: stamp,
            }),
            FetchAction::Settle(stamp, result) => {
                if stamp != self.latest_stamp {
                    // A newer request supersedes this one.
                    return self;
                }
                match result {
                    Ok(data) => Rc::new(Self {
                        data: FetchState::Fetched(data),
                        is_loading: false,
                        error: None,
                        latest_stamp: self.latest_stamp,
                    }),
                    Err(message) => Rc::new(Self {
                        data: self.data.clone(),
                        is_loading: false,
                        error: Some(message),
                        latest_stamp: self.latest_stamp,
                    }),
                }
            }
            FetchAction::Apply(update) => {
                let mut next = (*self).clone();
                if let FetchState::Fetched(data) = &mut next.data {
                    update(data);
                }
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce<T: Clone>(
        state: Rc<FetchLifecycle<T>>,
        action: FetchAction<T>,
    ) -> Rc<FetchLifecycle<T>> {
        Reducible::reduce(state, action)
    }

    #[test]
    fn begin_sets_loading_and_clears_error() {
        let state = Rc::new(FetchLifecycle::<Vec<u32>>::default());
        assert!(!state.is_loading);

        let state = reduce(state, FetchAction::Begin(1));
        assert!(state.is_loading);
        assert!(state.error.is_none());
        assert!(!state.data.is_fetched());
    }

    #[test]
    fn success_populates_data_and_stops_loading() {
        let state = Rc::new(FetchLifecycle::default());
        let state = reduce(state, FetchAction::Begin(1));
        let state =
            reduce(state, FetchAction::Settle(1, Ok(vec![10u32, 20])));

        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert_eq!(state.data.as_ref(), Some(&vec![10, 20]));
    }

    #[test]
    fn empty_success_is_distinguishable_from_not_fetched() {
        let state = Rc::new(FetchLifecycle::default());
        let state = reduce(state, FetchAction::Begin(1));
        let state =
            reduce(state, FetchAction::Settle(1, Ok(Vec::<u32>::new())));

        assert!(state.data.is_fetched());
        assert_eq!(state.data.as_ref(), Some(&vec![]));
        assert!(state.error.is_none());
    }

    #[test]
    fn failure_reports_the_error_and_stops_loading() {
        let state = Rc::new(FetchLifecycle::<Vec<u32>>::default());
        let state = reduce(state, FetchAction::Begin(1));
        let state = reduce(
            state,
            FetchAction::Settle(1, Err("Network error".to_string())),
        );

        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("Network error"));
        assert!(!state.data.is_fetched());
    }

    #[test]
    fn failure_retains_previously_fetched_data() {
        let state = Rc::new(FetchLifecycle::default());
        let state = reduce(state, FetchAction::Begin(1));
        let state = reduce(state, FetchAction::Settle(1, Ok(vec![1u32])));

        // A later refresh fails; the stale data stays on screen with the
        // error alongside it.
        let state = reduce(state, FetchAction::Begin(2));
        assert!(state.error.is_none());
        let state = reduce(
            state,
            FetchAction::Settle(2, Err("Server unavailable".to_string())),
        );

        assert_eq!(state.data.as_ref(), Some(&vec![1]));
        assert_eq!(state.error.as_deref(), Some("Server unavailable"));
    }

    #[test]
    fn stale_settle_is_discarded() {
        let state = Rc::new(FetchLifecycle::default());
        let state = reduce(state, FetchAction::Begin(1));
        // Parameters changed before the first request settled.
        let state = reduce(state, FetchAction::Begin(2));

        // The first response arrives late and must not apply.
        let state =
            reduce(state, FetchAction::Settle(1, Ok(vec![99u32])));
        assert!(state.is_loading);
        assert!(!state.data.is_fetched());

        let state = reduce(state, FetchAction::Settle(2, Ok(vec![7u32])));
        assert!(!state.is_loading);
        assert_eq!(state.data.as_ref(), Some(&vec![7]));
    }

    #[test]
    fn stale_failure_does_not_clobber_newer_success() {
        let state = Rc::new(FetchLifecycle::default());
        let state = reduce(state, FetchAction::Begin(1));
        let state = reduce(state, FetchAction::Begin(2));
        let state = reduce(state, FetchAction::Settle(2, Ok(vec![7u32])));

        let state = reduce(
            state,
            FetchAction::Settle(1, Err("timed out".to_string())),
        );
        assert!(state.error.is_none());
        assert_eq!(state.data.as_ref(), Some(&vec![7]));
    }

    #[test]
    fn apply_splices_into_fetched_data() {
        let state = Rc::new(FetchLifecycle::default());
        let state = reduce(state, FetchAction::Begin(1));
        let state = reduce(state, FetchAction::Settle(1, Ok(vec![2u32])));

        let state = reduce(
            state,
            FetchAction::Apply(Box::new(|data: &mut Vec<u32>| {
                data.insert(0, 1);
            })),
        );
        assert_eq!(state.data.as_ref(), Some(&vec![1, 2]));
    }

    #[test]
    fn camera_video_page_flows_through_the_lifecycle() {
        use payloads::responses::VideoList;

        let video = |id: i64| {
            serde_json::json!({
                "id": id,
                "camera_id": 1,
                "cloudinary_url": format!("https://cdn.example.com/{id}.mp4"),
                "thumbnail_url": null,
                "duration": 90,
                "file_size": 512000,
                "format": "mp4",
                "processing_status": "completed",
                "has_violations": false,
                "violation_count": 0,
                "uploaded_at": "2024-01-01T10:00:00Z",
                "processed_at": null,
            })
        };
        let list: VideoList = serde_json::from_value(serde_json::json!({
            "videos": [video(1), video(2)],
            "total": 2,
            "page": 1,
        }))
        .unwrap();

        let state = Rc::new(FetchLifecycle::default());
        let state = reduce(state, FetchAction::Begin(1));
        assert!(state.is_loading);
        let state = reduce(state, FetchAction::Settle(1, Ok(list)));

        let fetched = state.data.as_ref().unwrap();
        assert_eq!(fetched.videos.len(), 2);
        assert_eq!(fetched.total, 2);
        assert_eq!(fetched.page, 1);
        assert!(state.error.is_none());
        assert!(!state.is_loading);
    }

    #[test]
    fn apply_before_first_fetch_is_a_no_op() {
        let state = Rc::new(FetchLifecycle::<Vec<u32>>::default());
        let state = reduce(
            state,
            FetchAction::Apply(Box::new(|data: &mut Vec<u32>| {
                data.push(1);
            })),
        );
        assert!(!state.data.is_fetched());
    }
}
