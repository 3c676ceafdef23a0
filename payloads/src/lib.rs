use derive_more::Display;
use serde::{Deserialize, Serialize};

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

macro_rules! id_type {
    ($name:ident) => {
        #[derive(
            Debug,
            Display,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Serialize,
            Deserialize,
        )]
        pub struct $name(pub i64);
    };
}

id_type!(UserId);
id_type!(CameraId);
id_type!(VideoId);
id_type!(ViolationId);
id_type!(ComplaintId);
id_type!(DenunciationId);
id_type!(PaymentId);

/// Platform user roles. The backend gates every endpoint on these; the
/// client uses them only to pick which dashboard to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Officer,
    Citizen,
}

impl Role {
    /// Admin and officer accounts can review violations and manage cameras.
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Admin | Role::Officer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraStatus {
    Online,
    Offline,
    Maintenance,
}

/// Processing state of an uploaded camera video as it moves through the
/// detection pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationStatus {
    Pending,
    Approved,
    Rejected,
    Paid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Pending,
    InReview,
    Resolved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenunciationStatus {
    Pending,
    Verifying,
    Investigating,
    Resolved,
    Rejected,
    Transferred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    BankTransfer,
    CreditCard,
    EWallet,
    Wallet,
}

/// Review actions an officer can take on a pending violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewAction {
    Approve,
    Reject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_bare_integers() {
        let id = CameraId(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let back: CameraId = serde_json::from_str("42").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn statuses_use_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&ProcessingStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BankTransfer).unwrap(),
            "\"bank_transfer\""
        );
        let status: DenunciationStatus =
            serde_json::from_str("\"investigating\"").unwrap();
        assert_eq!(status, DenunciationStatus::Investigating);
    }

    #[test]
    fn roles_gate_staff_features() {
        assert!(Role::Admin.is_staff());
        assert!(Role::Officer.is_staff());
        assert!(!Role::Citizen.is_staff());
        let role: Role = serde_json::from_str("\"citizen\"").unwrap();
        assert_eq!(role, Role::Citizen);
    }
}
