//! The single mapping from domain statuses to display labels and badge
//! colors. Components render every status through this table instead of
//! carrying their own copies.

use payloads::{
    CameraStatus, ComplaintStatus, DenunciationStatus, PaymentStatus,
    ProcessingStatus, ViolationStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    pub label: &'static str,
    /// Tailwind classes for the badge background and text.
    pub classes: &'static str,
}

const GREEN: &str =
    "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-400";
const YELLOW: &str =
    "bg-yellow-100 text-yellow-800 dark:bg-yellow-900/30 dark:text-yellow-400";
const RED: &str = "bg-red-100 text-red-800 dark:bg-red-900/30 dark:text-red-400";
const BLUE: &str =
    "bg-blue-100 text-blue-800 dark:bg-blue-900/30 dark:text-blue-400";
const NEUTRAL: &str =
    "bg-neutral-100 text-neutral-700 dark:bg-neutral-800 dark:text-neutral-300";

pub trait AsStatusDisplay {
    fn display(&self) -> StatusDisplay;
}

impl AsStatusDisplay for CameraStatus {
    fn display(&self) -> StatusDisplay {
        match self {
            CameraStatus::Online => StatusDisplay {
                label: "Online",
                classes: GREEN,
            },
            CameraStatus::Offline => StatusDisplay {
                label: "Offline",
                classes: RED,
            },
            CameraStatus::Maintenance => StatusDisplay {
                label: "Maintenance",
                classes: YELLOW,
            },
        }
    }
}

impl AsStatusDisplay for ProcessingStatus {
    fn display(&self) -> StatusDisplay {
        match self {
            ProcessingStatus::Pending => StatusDisplay {
                label: "Pending",
                classes: NEUTRAL,
            },
            ProcessingStatus::Processing => StatusDisplay {
                label: "Processing",
                classes: BLUE,
            },
            ProcessingStatus::Completed => StatusDisplay {
                label: "Completed",
                classes: GREEN,
            },
            ProcessingStatus::Failed => StatusDisplay {
                label: "Failed",
                classes: RED,
            },
        }
    }
}

impl AsStatusDisplay for ViolationStatus {
    fn display(&self) -> StatusDisplay {
        match self {
            ViolationStatus::Pending => StatusDisplay {
                label: "Pending review",
                classes: YELLOW,
            },
            ViolationStatus::Approved => StatusDisplay {
                label: "Approved",
                classes: BLUE,
            },
            ViolationStatus::Rejected => StatusDisplay {
                label: "Rejected",
                classes: NEUTRAL,
            },
            ViolationStatus::Paid => StatusDisplay {
                label: "Paid",
                classes: GREEN,
            },
        }
    }
}

impl AsStatusDisplay for ComplaintStatus {
    fn display(&self) -> StatusDisplay {
        match self {
            ComplaintStatus::Pending => StatusDisplay {
                label: "Pending",
                classes: YELLOW,
            },
            ComplaintStatus::InReview => StatusDisplay {
                label: "In review",
                classes: BLUE,
            },
            ComplaintStatus::Resolved => StatusDisplay {
                label: "Resolved",
                classes: GREEN,
            },
            ComplaintStatus::Rejected => StatusDisplay {
                label: "Rejected",
                classes: NEUTRAL,
            },
        }
    }
}

impl AsStatusDisplay for DenunciationStatus {
    fn display(&self) -> StatusDisplay {
        match self {
            DenunciationStatus::Pending => StatusDisplay {
                label: "Pending",
                classes: YELLOW,
            },
            DenunciationStatus::Verifying => StatusDisplay {
                label: "Verifying",
                classes: BLUE,
            },
            DenunciationStatus::Investigating => StatusDisplay {
                label: "Investigating",
                classes: BLUE,
            },
            DenunciationStatus::Resolved => StatusDisplay {
                label: "Resolved",
                classes: GREEN,
            },
            DenunciationStatus::Rejected => StatusDisplay {
                label: "Rejected",
                classes: NEUTRAL,
            },
            DenunciationStatus::Transferred => StatusDisplay {
                label: "Transferred",
                classes: NEUTRAL,
            },
        }
    }
}

impl AsStatusDisplay for PaymentStatus {
    fn display(&self) -> StatusDisplay {
        match self {
            PaymentStatus::Pending => StatusDisplay {
                label: "Pending",
                classes: YELLOW,
            },
            PaymentStatus::Completed => StatusDisplay {
                label: "Completed",
                classes: GREEN,
            },
            PaymentStatus::Failed => StatusDisplay {
                label: "Failed",
                classes: RED,
            },
            PaymentStatus::Refunded => StatusDisplay {
                label: "Refunded",
                classes: NEUTRAL,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_display(display: StatusDisplay) {
        assert!(!display.label.is_empty());
        assert!(display.classes.contains("bg-"));
        assert!(display.classes.contains("text-"));
    }

    #[test]
    fn every_status_has_a_complete_display() {
        for status in [
            CameraStatus::Online,
            CameraStatus::Offline,
            CameraStatus::Maintenance,
        ] {
            assert_display(status.display());
        }
        for status in [
            ProcessingStatus::Pending,
            ProcessingStatus::Processing,
            ProcessingStatus::Completed,
            ProcessingStatus::Failed,
        ] {
            assert_display(status.display());
        }
        for status in [
            ViolationStatus::Pending,
            ViolationStatus::Approved,
            ViolationStatus::Rejected,
            ViolationStatus::Paid,
        ] {
            assert_display(status.display());
        }
        for status in [
            ComplaintStatus::Pending,
            ComplaintStatus::InReview,
            ComplaintStatus::Resolved,
            ComplaintStatus::Rejected,
        ] {
            assert_display(status.display());
        }
        for status in [
            DenunciationStatus::Pending,
            DenunciationStatus::Verifying,
            DenunciationStatus::Investigating,
            DenunciationStatus::Resolved,
            DenunciationStatus::Rejected,
            DenunciationStatus::Transferred,
        ] {
            assert_display(status.display());
        }
        for status in [
            PaymentStatus::Pending,
            PaymentStatus::Completed,
            PaymentStatus::Failed,
            PaymentStatus::Refunded,
        ] {
            assert_display(status.display());
        }
    }

    #[test]
    fn review_outcomes_are_visually_distinct() {
        assert_ne!(
            ViolationStatus::Approved.display().classes,
            ViolationStatus::Rejected.display().classes
        );
        assert_ne!(
            ViolationStatus::Pending.display().label,
            ViolationStatus::Paid.display().label
        );
    }
}
