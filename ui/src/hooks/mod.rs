pub mod fetch_state;
pub mod use_authentication;
pub mod use_camera_videos;
pub mod use_cameras;
pub mod use_complaints;
pub mod use_denunciations;
pub mod use_fetch;
pub mod use_logout;
pub mod use_officer_stats;
pub mod use_officers;
pub mod use_payments;
pub mod use_statistics;
pub mod use_violations;

pub use fetch_state::{FetchAction, FetchLifecycle, FetchState};
pub use use_authentication::use_authentication;
pub use use_camera_videos::{
    CameraVideosHandle, VideoFilters, use_camera_videos,
};
pub use use_cameras::{CameraFilters, CamerasHandle, use_camera, use_cameras};
pub use use_complaints::{
    ComplaintsHandle, use_complaints, use_my_complaints,
};
pub use use_denunciations::{
    DenunciationsHandle, use_denunciations, use_my_denunciations,
};
pub use use_fetch::{FetchHookReturn, use_fetch, use_fetch_with_apply};
pub use use_logout::use_logout;
pub use use_officer_stats::use_officer_stats;
pub use use_officers::{OfficerFilters, OfficersHandle, use_officers};
pub use use_payments::{
    PaymentsHandle, use_my_payments, use_wallet_summary,
};
pub use use_statistics::{use_admin_dashboard, use_statistics};
pub use use_violations::{
    ReviewHandle, ReviewQueueFilters, use_my_violations, use_review_queue,
    use_violation_lookup,
};
