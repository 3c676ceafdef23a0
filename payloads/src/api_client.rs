use reqwest::StatusCode;
use serde::Serialize;

use crate::{
    CameraId, ComplaintId, PaymentId, ViolationId, requests, responses,
};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
///
/// The bearer token is injected by the caller (the UI reads it from the
/// session); the client itself never touches browser storage.
pub struct APIClient {
    pub address: String,
    pub bearer_token: Option<String>,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/v1/{path}", &self.address)
    }

    fn authorize(
        &self,
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get(
        &self,
        path: &str,
        query: &impl Serialize,
    ) -> ReqwestResult {
        let request = self
            .inner_client
            .get(self.format_url(path))
            .query(query);
        self.authorize(request).send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));
        self.authorize(request).send().await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);
        self.authorize(request).send().await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path));
        self.authorize(request).send().await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.put(self.format_url(path)).json(body);
        self.authorize(request).send().await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.delete(self.format_url(path));
        self.authorize(request).send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Authenticate with form-encoded credentials; the only non-JSON
    /// request body in the API.
    pub async fn login(
        &self,
        credentials: &requests::LoginCredentials,
    ) -> Result<responses::Token, ClientError> {
        let request = self
            .inner_client
            .post(self.format_url("login"))
            .form(credentials);
        let response = request.send().await?;
        ok_body(response).await
    }

    pub async fn register(
        &self,
        details: &requests::RegisterAccount,
    ) -> Result<responses::RegisterResult, ClientError> {
        let response = self.post("register", details).await?;
        ok_body(response).await
    }

    /// Get the profile behind the current bearer token. Used both for
    /// startup session revalidation and after login.
    pub async fn me(&self) -> Result<responses::UserProfile, ClientError> {
        let response = self.empty_get("me").await?;
        ok_body(response).await
    }

    pub async fn list_cameras(
        &self,
        params: &requests::ListCameras<'_>,
    ) -> Result<responses::CameraList, ClientError> {
        let response = self.get("cameras", params).await?;
        ok_body(response).await
    }

    pub async fn get_camera(
        &self,
        camera_id: &CameraId,
    ) -> Result<responses::Camera, ClientError> {
        let response =
            self.empty_get(&format!("cameras/{camera_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_camera(
        &self,
        details: &requests::CreateCamera,
    ) -> Result<responses::Camera, ClientError> {
        let response = self.post("cameras", details).await?;
        ok_body(response).await
    }

    pub async fn update_camera(
        &self,
        camera_id: &CameraId,
        details: &requests::UpdateCamera,
    ) -> Result<responses::Camera, ClientError> {
        let response =
            self.put(&format!("cameras/{camera_id}"), details).await?;
        ok_body(response).await
    }

    pub async fn delete_camera(
        &self,
        camera_id: &CameraId,
    ) -> Result<(), ClientError> {
        let response = self.delete(&format!("cameras/{camera_id}")).await?;
        ok_empty(response).await
    }

    /// List a camera's videos with server-side filtering and pagination.
    pub async fn list_camera_videos(
        &self,
        camera_id: &CameraId,
        params: &requests::ListVideos,
    ) -> Result<responses::VideoList, ClientError> {
        let response = self
            .get(&format!("cameras/{camera_id}/videos"), params)
            .await?;
        ok_body(response).await
    }

    /// Upload a recorded clip for processing. Multipart; the backend
    /// queues the detection job and returns the stored video record.
    pub async fn upload_camera_video(
        &self,
        camera_id: &CameraId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<responses::CameraVideo, ClientError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        let request = self
            .inner_client
            .post(self.format_url(&format!("cameras/{camera_id}/videos")))
            .multipart(form);
        let response = self.authorize(request).send().await?;
        ok_body(response).await
    }

    pub async fn list_violations(
        &self,
        params: &requests::ListViolations<'_>,
    ) -> Result<responses::ViolationList, ClientError> {
        let response = self.get("violations", params).await?;
        ok_body(response).await
    }

    /// The officer review queue: pending violations awaiting a decision.
    pub async fn review_queue(
        &self,
        params: &requests::ListViolations<'_>,
    ) -> Result<responses::ViolationList, ClientError> {
        let response = self
            .get("officer/violations/review-queue", params)
            .await?;
        ok_body(response).await
    }

    pub async fn review_violation(
        &self,
        violation_id: &ViolationId,
        details: &requests::ReviewViolation,
    ) -> Result<responses::Violation, ClientError> {
        let response = self
            .post(
                &format!("officer/violations/{violation_id}/review"),
                details,
            )
            .await?;
        ok_body(response).await
    }

    /// Violations attached to the logged-in citizen's vehicles.
    pub async fn my_violations(
        &self,
    ) -> Result<Vec<responses::Violation>, ClientError> {
        let response = self.empty_get("citizen/my-violations").await?;
        ok_body(response).await
    }

    pub async fn list_complaints(
        &self,
        params: &requests::ListComplaints,
    ) -> Result<responses::ComplaintList, ClientError> {
        let response = self.get("complaints", params).await?;
        ok_body(response).await
    }

    pub async fn my_complaints(
        &self,
    ) -> Result<responses::ComplaintList, ClientError> {
        let response = self.empty_get("complaints/my-complaints").await?;
        ok_body(response).await
    }

    pub async fn create_complaint(
        &self,
        details: &requests::CreateComplaint,
    ) -> Result<responses::Complaint, ClientError> {
        let response = self.post("complaints", details).await?;
        ok_body(response).await
    }

    /// Rate a resolved complaint (1-5 stars plus optional feedback).
    pub async fn rate_complaint(
        &self,
        complaint_id: &ComplaintId,
        details: &requests::RateComplaint,
    ) -> Result<responses::Complaint, ClientError> {
        let response = self
            .post(&format!("complaints/{complaint_id}/rate"), details)
            .await?;
        ok_body(response).await
    }

    pub async fn list_denunciations(
        &self,
        params: &requests::ListDenunciations,
    ) -> Result<responses::DenunciationList, ClientError> {
        let response = self.get("denunciations", params).await?;
        ok_body(response).await
    }

    pub async fn my_denunciations(
        &self,
    ) -> Result<responses::DenunciationList, ClientError> {
        let response =
            self.empty_get("denunciations/my-denunciations").await?;
        ok_body(response).await
    }

    pub async fn create_denunciation(
        &self,
        details: &requests::CreateDenunciation,
    ) -> Result<responses::Denunciation, ClientError> {
        let response = self.post("denunciations", details).await?;
        ok_body(response).await
    }

    pub async fn my_payments(
        &self,
    ) -> Result<Vec<responses::Payment>, ClientError> {
        let response = self.empty_get("payments/my-payments").await?;
        ok_body(response).await
    }

    /// Create the pending payment record for an approved violation.
    pub async fn create_fine_payment(
        &self,
        details: &requests::CreateFinePayment,
    ) -> Result<responses::Payment, ClientError> {
        let response = self.post("payments/fine", details).await?;
        ok_body(response).await
    }

    pub async fn deposit_to_wallet(
        &self,
        details: &requests::DepositToWallet,
    ) -> Result<responses::Payment, ClientError> {
        let response = self.post("payments/wallet/deposit", details).await?;
        ok_body(response).await
    }

    pub async fn pay_fine_from_wallet(
        &self,
        payment_id: &PaymentId,
    ) -> Result<responses::Payment, ClientError> {
        let response = self
            .empty_post(&format!("payments/{payment_id}/pay-from-wallet"))
            .await?;
        ok_body(response).await
    }

    pub async fn wallet_summary(
        &self,
    ) -> Result<responses::WalletSummary, ClientError> {
        let response = self.empty_get("payments/wallet/summary").await?;
        ok_body(response).await
    }

    pub async fn payment_receipt(
        &self,
        payment_id: &PaymentId,
    ) -> Result<responses::PaymentReceipt, ClientError> {
        let response = self
            .empty_get(&format!("payments/{payment_id}/receipt"))
            .await?;
        ok_body(response).await
    }

    /// List officer accounts (admin only). The role constraint is part of
    /// the query so the backend's generic user list stays reusable.
    pub async fn list_officers(
        &self,
        params: &requests::ListOfficers<'_>,
    ) -> Result<responses::OfficerList, ClientError> {
        let request = self
            .inner_client
            .get(self.format_url("admin/users"))
            .query(&[("role", "officer")])
            .query(params);
        let response = self.authorize(request).send().await?;
        ok_body(response).await
    }

    pub async fn create_officer(
        &self,
        details: &requests::CreateOfficer,
    ) -> Result<responses::Officer, ClientError> {
        let response = self.post("admin/users/officers", details).await?;
        ok_body(response).await
    }

    /// Personal statistics for the logged-in officer's dashboard.
    pub async fn officer_stats(
        &self,
    ) -> Result<responses::OfficerStats, ClientError> {
        let response = self.empty_get("officer/dashboard/stats").await?;
        ok_body(response).await
    }

    pub async fn statistics(
        &self,
        params: &requests::StatisticsRange,
    ) -> Result<responses::Statistics, ClientError> {
        let response = self.get("statistics", params).await?;
        ok_body(response).await
    }

    pub async fn admin_dashboard(
        &self,
    ) -> Result<responses::AdminDashboard, ClientError> {
        let response = self.empty_get("admin/dashboard/stats").await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing the backend's
    /// `detail`/`message` text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Fallback when an error body carries neither `detail` nor `message`.
pub const GENERIC_ERROR: &str = "An error occurred";

/// Extract the human-readable message from an error response body.
///
/// The backend sends `{"detail": ...}` for request failures and
/// `{"message": ...}` from a few legacy endpoints; anything else gets the
/// generic fallback.
pub fn error_message_from_body(body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|value| {
            value
                .get("detail")
                .or_else(|| value.get("message"))
                .and_then(|field| field.as_str())
        })
        .unwrap_or(GENERIC_ERROR)
        .to_string()
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await?;
        return Err(ClientError::APIError(
            status,
            error_message_from_body(&body),
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await?;
        return Err(ClientError::APIError(
            status,
            error_message_from_body(&body),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> APIClient {
        APIClient {
            address: "https://api.example.com".to_string(),
            bearer_token: None,
            inner_client: reqwest::Client::new(),
        }
    }

    #[test]
    fn urls_are_rooted_at_the_versioned_api_prefix() {
        let client = client();
        assert_eq!(
            client.format_url("cameras"),
            "https://api.example.com/api/v1/cameras"
        );
        assert_eq!(
            client.format_url(&format!("cameras/{}/videos", CameraId(7))),
            "https://api.example.com/api/v1/cameras/7/videos"
        );
    }

    #[test]
    fn error_bodies_prefer_detail_over_message() {
        assert_eq!(
            error_message_from_body(r#"{"detail": "Camera not found"}"#),
            "Camera not found"
        );
        assert_eq!(
            error_message_from_body(
                r#"{"detail": "No token", "message": "ignored"}"#
            ),
            "No token"
        );
        assert_eq!(
            error_message_from_body(r#"{"message": "Session expired"}"#),
            "Session expired"
        );
    }

    #[test]
    fn malformed_error_bodies_fall_back_to_the_generic_message() {
        assert_eq!(error_message_from_body("not json"), GENERIC_ERROR);
        assert_eq!(error_message_from_body("{}"), GENERIC_ERROR);
        assert_eq!(
            error_message_from_body(r#"{"detail": {"nested": true}}"#),
            GENERIC_ERROR
        );
    }

    #[test]
    fn api_error_displays_only_the_message() {
        let error = ClientError::APIError(
            StatusCode::NOT_FOUND,
            "Camera not found".to_string(),
        );
        assert_eq!(error.to_string(), "Camera not found");
    }
}
