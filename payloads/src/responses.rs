use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    CameraId, CameraStatus, ComplaintId, ComplaintStatus, DenunciationId,
    DenunciationStatus, PaymentId, PaymentMethod, PaymentStatus,
    ProcessingStatus, Role, UserId, VideoId, ViolationId, ViolationStatus,
};

/// Returned by the login endpoint; the client stores the token in the
/// session and sends it as a bearer header from then on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub phone_number: Option<String>,
    pub identification_number: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResult {
    pub message: String,
    pub user_id: UserId,
}

/// An officer account as listed in the authority's management view,
/// including the case counters the performance panel renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Officer {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub badge_number: Option<String>,
    pub department: Option<String>,
    pub phone_number: Option<String>,
    pub is_active: bool,
    pub assigned_cases: u32,
    pub completed_cases: u32,
    pub last_login: Option<Timestamp>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficerList {
    pub users: Vec<Officer>,
    pub total: u32,
    pub page: u32,
    pub size: u32,
}

/// Personal statistics behind the officer dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficerStats {
    pub pending_reviews: u32,
    pub approved_today: u32,
    /// Share of this officer's decided reviews that were upheld, percent.
    pub efficiency_rate: f64,
    /// Hours from detection to decision, averaged over the officer's cases.
    pub average_processing_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub id: CameraId,
    /// Stable external identifier, e.g. "CAM-NGUYEN-HUE-01".
    pub code: String,
    pub name: String,
    pub location_name: String,
    pub address: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub status: CameraStatus,
    pub resolution: Option<String>,
    pub confidence_threshold: Option<Decimal>,
    pub last_maintenance: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraList {
    pub items: Vec<Camera>,
    pub total: u32,
    pub page: u32,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraVideo {
    pub id: VideoId,
    pub camera_id: CameraId,
    pub cloudinary_url: String,
    pub thumbnail_url: Option<String>,
    /// Seconds.
    pub duration: Option<u32>,
    /// Bytes.
    pub file_size: Option<u64>,
    pub format: Option<String>,
    pub processing_status: ProcessingStatus,
    pub has_violations: bool,
    pub violation_count: u32,
    pub uploaded_at: Timestamp,
    pub processed_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoList {
    pub videos: Vec<CameraVideo>,
    pub total: u32,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub id: ViolationId,
    pub license_plate: String,
    pub vehicle_type: Option<String>,
    pub vehicle_brand: Option<String>,
    pub violation_type: String,
    pub violation_description: Option<String>,
    pub fine_amount: Option<Decimal>,
    pub points_deducted: Option<i32>,
    pub location_name: Option<String>,
    pub camera_id: Option<CameraId>,
    pub video_id: Option<VideoId>,
    pub detected_at: Timestamp,
    /// AI confidence in [0, 1].
    pub confidence_score: Option<Decimal>,
    pub evidence_images: Vec<String>,
    pub status: ViolationStatus,
    pub reviewed_at: Option<Timestamp>,
    pub review_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolationList {
    pub violations: Vec<Violation>,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: ComplaintId,
    pub complaint_code: String,
    pub title: String,
    pub description: String,
    pub complaint_type: String,
    pub status: ComplaintStatus,
    pub priority: Option<String>,
    pub violation_id: Option<ViolationId>,
    pub assigned_officer_id: Option<UserId>,
    pub resolved_at: Option<Timestamp>,
    pub user_rating: Option<u8>,
    pub user_feedback: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintList {
    pub complaints: Vec<Complaint>,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Denunciation {
    pub id: DenunciationId,
    pub denunciation_code: String,
    pub denunciation_type: String,
    pub title: String,
    pub description: String,
    pub accused_department: Option<String>,
    /// Absent when the report is anonymous.
    pub informant_name: Option<String>,
    pub is_anonymous: bool,
    pub severity_level: String,
    pub urgency_level: String,
    pub status: DenunciationStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenunciationList {
    pub denunciations: Vec<Denunciation>,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub violation_id: Option<ViolationId>,
    pub amount: Decimal,
    pub original_fine: Option<Decimal>,
    pub late_penalty: Option<Decimal>,
    pub status: PaymentStatus,
    pub payment_method: Option<PaymentMethod>,
    pub due_date: Option<Timestamp>,
    pub paid_at: Option<Timestamp>,
    pub receipt_number: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletSummary {
    pub balance: Decimal,
    pub total_deposited: Decimal,
    pub total_spent: Decimal,
    pub pending_fines: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub receipt_number: String,
    pub payment_id: PaymentId,
    pub amount: Decimal,
    pub payer_name: Option<String>,
    pub payer_identification: Option<String>,
    pub paid_at: Timestamp,
}

/// Top-line counts for the statistics dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsOverview {
    pub total_violations: u32,
    pub pending_violations: u32,
    pub processed_violations: u32,
    pub total_cameras: u32,
    pub online_cameras: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// ISO date, one per day in the requested window.
    pub date: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeBreakdown {
    pub violation_type: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationBreakdown {
    pub location_name: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingEfficiency {
    pub total_processed: u32,
    pub total_pending: u32,
    pub avg_processing_hours: f64,
    /// Percentage of detected violations that have been reviewed.
    pub processing_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub overview: StatsOverview,
    pub trends: Vec<TrendPoint>,
    pub types: Vec<TypeBreakdown>,
    pub locations: Vec<LocationBreakdown>,
    pub efficiency: ProcessingEfficiency,
}

/// Counts shown on the authority dashboard header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminDashboard {
    pub total_users: u32,
    pub total_officers: u32,
    pub total_citizens: u32,
    pub system_health: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Captured from the backend's camera video list endpoint.
    const VIDEO_LIST_JSON: &str = r#"{
        "videos": [
            {
                "id": 1,
                "camera_id": 1,
                "cloudinary_url": "https://cdn.example.com/video1.mp4",
                "thumbnail_url": "https://cdn.example.com/thumb1.jpg",
                "duration": 120,
                "file_size": 1024000,
                "format": "mp4",
                "processing_status": "completed",
                "has_violations": true,
                "violation_count": 2,
                "uploaded_at": "2024-01-01T10:00:00Z",
                "processed_at": "2024-01-01T10:05:00Z"
            }
        ],
        "total": 1,
        "page": 1
    }"#;

    #[test]
    fn video_list_round_trips() {
        let list: VideoList = serde_json::from_str(VIDEO_LIST_JSON).unwrap();
        assert_eq!(list.total, 1);
        assert_eq!(list.videos.len(), 1);
        let video = &list.videos[0];
        assert_eq!(video.id, VideoId(1));
        assert_eq!(video.processing_status, ProcessingStatus::Completed);
        assert!(video.has_violations);
        assert_eq!(video.duration, Some(120));

        let json = serde_json::to_string(&list).unwrap();
        let back: VideoList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn violation_tolerates_absent_optionals() {
        let json = r#"{
            "id": 7,
            "license_plate": "30A-123.45",
            "vehicle_type": null,
            "vehicle_brand": null,
            "violation_type": "red_light",
            "violation_description": null,
            "fine_amount": "1500000.00",
            "points_deducted": 2,
            "location_name": "Nguyen Hue / Le Loi",
            "camera_id": 3,
            "video_id": null,
            "detected_at": "2024-03-10T08:30:00Z",
            "confidence_score": "0.9275",
            "evidence_images": [],
            "status": "pending",
            "reviewed_at": null,
            "review_notes": null
        }"#;
        let violation: Violation = serde_json::from_str(json).unwrap();
        assert_eq!(violation.status, ViolationStatus::Pending);
        assert_eq!(violation.camera_id, Some(CameraId(3)));
        assert!(violation.video_id.is_none());
        assert_eq!(
            violation.fine_amount,
            Some(Decimal::new(150000000, 2))
        );
    }

    #[test]
    fn officer_list_round_trips() {
        let json = r#"{
            "users": [
                {
                    "id": 12,
                    "username": "officer_binh",
                    "email": "binh@example.com",
                    "full_name": "Tran Thanh Binh",
                    "badge_number": "CSGT-0412",
                    "department": "District 1 Traffic Police",
                    "phone_number": null,
                    "is_active": true,
                    "assigned_cases": 14,
                    "completed_cases": 11,
                    "last_login": "2024-03-10T08:30:00Z",
                    "created_at": "2023-06-01T00:00:00Z"
                }
            ],
            "total": 1,
            "page": 1,
            "size": 20
        }"#;
        let list: OfficerList = serde_json::from_str(json).unwrap();
        assert_eq!(list.total, 1);
        let officer = &list.users[0];
        assert_eq!(officer.id, UserId(12));
        assert_eq!(officer.badge_number.as_deref(), Some("CSGT-0412"));
        assert!(officer.is_active);
        assert_eq!(officer.completed_cases, 11);

        let back: OfficerList =
            serde_json::from_str(&serde_json::to_string(&list).unwrap())
                .unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn profile_carries_role() {
        let json = r#"{
            "id": 12,
            "username": "officer_binh",
            "email": "binh@example.com",
            "full_name": "Tran Thanh Binh",
            "role": "officer",
            "phone_number": null,
            "identification_number": null,
            "is_active": true
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.role, Role::Officer);
        assert!(profile.role.is_staff());
    }
}
