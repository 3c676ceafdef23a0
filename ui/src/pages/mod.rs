pub mod authority_dashboard;
pub mod camera_videos;
pub mod cameras;
pub mod citizen_dashboard;
pub mod complaints;
pub mod denunciations;
pub mod home;
pub mod login;
pub mod lookup;
pub mod my_violations;
pub mod not_found;
pub mod officer_dashboard;
pub mod officers;
pub mod payments;
pub mod review_queue;
pub mod statistics;

pub use authority_dashboard::AuthorityDashboard;
pub use camera_videos::CameraVideosPage;
pub use cameras::CamerasPage;
pub use citizen_dashboard::CitizenDashboard;
pub use complaints::ComplaintsPage;
pub use denunciations::DenunciationsPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use lookup::ViolationLookupPage;
pub use my_violations::MyViolationsPage;
pub use not_found::NotFoundPage;
pub use officer_dashboard::OfficerDashboard;
pub use officers::OfficersPage;
pub use payments::PaymentsPage;
pub use review_queue::ReviewQueuePage;
pub use statistics::StatisticsPage;
