use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    CameraStatus, ComplaintStatus, DenunciationStatus, PaymentMethod,
    ProcessingStatus, ReviewAction, ViolationId, ViolationStatus,
};

pub const PLATE_MIN_LEN: usize = 6;
pub const PLATE_MAX_LEN: usize = 12;

/// Validation result for license plate lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlateValidation {
    Valid,
    TooShort,
    TooLong,
    InvalidCharacters,
}

impl PlateValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::TooShort => {
                Some("License plate must be at least 6 characters")
            }
            Self::TooLong => {
                Some("License plate must be at most 12 characters")
            }
            Self::InvalidCharacters => Some(
                "License plate can only contain letters, numbers, dots, and \
                 dashes",
            ),
        }
    }
}

/// Validate a license plate before sending a lookup.
///
/// Rules:
/// - 6-12 characters
/// - ASCII letters, numbers, dots, and dashes only
pub fn validate_license_plate(plate: &str) -> PlateValidation {
    if plate.len() < PLATE_MIN_LEN {
        return PlateValidation::TooShort;
    }
    if plate.len() > PLATE_MAX_LEN {
        return PlateValidation::TooLong;
    }
    for c in plate.chars() {
        if !c.is_ascii_alphanumeric() && c != '.' && c != '-' {
            return PlateValidation::InvalidCharacters;
        }
    }
    PlateValidation::Valid
}

/// Convert a 1-based page number into the skip offset the backend expects.
pub fn skip_for_page(page: u32, page_size: u32) -> u32 {
    page.saturating_sub(1) * page_size
}

/// Login is the one form-encoded endpoint; everything else is JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
    /// Required by the backend for citizen accounts only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterAccount {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub identification_number: String,
}

/// Query parameters for the camera list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ListCameras<'a> {
    pub skip: u32,
    pub limit: u32,
    /// `None` means all statuses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CameraStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCamera {
    pub code: String,
    pub name: String,
    pub location_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_threshold: Option<Decimal>,
}

/// Partial camera update; absent fields are left unchanged by the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateCamera {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CameraStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_threshold: Option<Decimal>,
}

/// Query parameters for a camera's video list. Every field participates in
/// the refetch trigger of the owning hook.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ListVideos {
    pub skip: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_violations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_status: Option<ProcessingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<Timestamp>,
}

/// Query parameters for violation lists (review queue, lookups).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ListViolations<'a> {
    pub skip: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ViolationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewViolation {
    pub action: ReviewAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ListComplaints {
    pub skip: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ComplaintStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateComplaint {
    pub title: String,
    pub description: String,
    pub complaint_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_resolution: Option<String>,
    pub is_anonymous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation_id: Option<ViolationId>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub evidence_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateComplaint {
    /// 1-5 stars.
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// Query parameters for the staff-side denunciation list. Denunciations
/// have their own status vocabulary, so this is distinct from
/// [`ListComplaints`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ListDenunciations {
    pub skip: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DenunciationStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDenunciation {
    pub title: String,
    pub description: String,
    pub denunciation_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accused_department: Option<String>,
    pub severity_level: String,
    pub urgency_level: String,
    pub is_anonymous: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreateFinePayment {
    pub violation_id: ViolationId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositToWallet {
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
}

/// Query parameters for the authority's officer list. The client pins the
/// account role server-side; only pagination and search vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ListOfficers<'a> {
    pub skip: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<&'a str>,
}

/// Admin-only creation of an officer account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOfficer {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Query parameters for the statistics bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatisticsRange {
    /// Window size in days, counted back from now.
    pub days: u32,
}

impl Default for StatisticsRange {
    fn default() -> Self {
        Self { days: 30 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plate_validation_accepts_real_plates() {
        assert!(validate_license_plate("30A-123.45").is_valid());
        assert!(validate_license_plate("51H12345").is_valid());
    }

    #[test]
    fn plate_validation_rejects_bad_input() {
        assert_eq!(validate_license_plate("30A"), PlateValidation::TooShort);
        assert_eq!(
            validate_license_plate("30A-123.45-678.9"),
            PlateValidation::TooLong
        );
        assert_eq!(
            validate_license_plate("30A 123!"),
            PlateValidation::InvalidCharacters
        );
        assert!(
            validate_license_plate("30A 123!").error_message().is_some()
        );
    }

    #[test]
    fn skip_for_page_is_zero_based() {
        assert_eq!(skip_for_page(1, 20), 0);
        assert_eq!(skip_for_page(3, 20), 40);
        // Page 0 is treated as page 1 rather than underflowing.
        assert_eq!(skip_for_page(0, 20), 0);
    }

    #[test]
    fn optional_filters_are_omitted_from_queries() {
        let params = ListVideos {
            skip: 0,
            limit: 20,
            has_violations: Some(true),
            ..Default::default()
        };
        let query = serde_urlencoded::to_string(&params).unwrap();
        assert_eq!(query, "skip=0&limit=20&has_violations=true");
    }

    #[test]
    fn denunciation_lists_filter_on_denunciation_statuses() {
        let params = ListDenunciations {
            skip: 0,
            limit: 50,
            status: Some(DenunciationStatus::Investigating),
        };
        let query = serde_urlencoded::to_string(&params).unwrap();
        assert_eq!(query, "skip=0&limit=50&status=investigating");
    }

    #[test]
    fn enum_filters_serialize_as_snake_case_values() {
        let params = ListVideos {
            skip: 0,
            limit: 20,
            processing_status: Some(ProcessingStatus::Completed),
            ..Default::default()
        };
        let query = serde_urlencoded::to_string(&params).unwrap();
        assert!(query.contains("processing_status=completed"));
    }
}
