pub mod camera_card;
pub mod camera_form;
pub mod complaint_form;
pub mod denunciation_form;
pub mod layout;
pub mod login_form;
pub mod officer_form;
pub mod pagination;
pub mod stat_card;
pub mod status_badge;
pub mod toast;
pub mod video_upload;
pub mod violation_card;

pub use camera_card::CameraCard;
pub use camera_form::CameraForm;
pub use complaint_form::ComplaintForm;
pub use denunciation_form::DenunciationForm;
pub use login_form::LoginForm;
pub use officer_form::OfficerForm;
pub use pagination::Pagination;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
pub use toast::ToastContainer;
pub use video_upload::VideoUpload;
pub use violation_card::ViolationCard;
