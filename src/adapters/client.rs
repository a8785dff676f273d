//! Typed HTTP client for the workshop attendance API.
//!
//! Every call maps a non-2xx response to [`ClientError::Api`] whose message
//! is the server's `error` field. When the body is not JSON the HTTP status
//! text is used instead. `204 No Content` responses yield `()`.

use chrono::NaiveDate;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::adapters::http::attendance::{AttendanceEntryRequest, UpdateAttendanceRequest};
use crate::adapters::http::participants::{CreateParticipantRequest, UpdateParticipantRequest};
use crate::adapters::http::workshops::{
    ChangeStatusRequest, CreateWorkshopRequest, EnrollRequest, MessageResponse,
    UpdateWorkshopRequest,
};
use crate::adapters::http::HealthResponse;
use crate::domain::attendance::{AttendanceRecord, AttendanceStats};
use crate::domain::foundation::{AttendanceId, ParticipantId, WorkshopId};
use crate::domain::participant::Participant;
use crate::domain::workshop::Workshop;
use crate::ports::{AttendanceHistoryEntry, WorkshopAttendanceView, WriteAck};

/// Errors surfaced by [`ApiClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A 2xx response body did not have the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ClientError {
    /// HTTP status of an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Client for the REST API rooted at `base_url` (scheme, host and port).
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    /// Uses a preconfigured reqwest client, e.g. one with a timeout.
    pub fn with_http_client(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Workshops
    // ════════════════════════════════════════════════════════════════════════════

    pub async fn list_workshops(&self, status: Option<&str>) -> Result<Vec<Workshop>, ClientError> {
        let mut request = self.http_client.get(self.api("/workshops"));
        if let Some(status) = status {
            request = request.query(&[("status", status)]);
        }
        self.fetch(request).await
    }

    pub async fn get_workshop(&self, id: WorkshopId) -> Result<Workshop, ClientError> {
        self.fetch(self.http_client.get(self.api(&format!("/workshops/{}", id))))
            .await
    }

    pub async fn create_workshop(
        &self,
        workshop: &CreateWorkshopRequest,
    ) -> Result<Workshop, ClientError> {
        self.fetch(self.http_client.post(self.api("/workshops")).json(workshop))
            .await
    }

    pub async fn update_workshop(
        &self,
        id: WorkshopId,
        changes: &UpdateWorkshopRequest,
    ) -> Result<Workshop, ClientError> {
        let url = self.api(&format!("/workshops/{}", id));
        self.fetch(self.http_client.put(url).json(changes)).await
    }

    pub async fn update_workshop_status(
        &self,
        id: WorkshopId,
        status: &str,
    ) -> Result<Workshop, ClientError> {
        let url = self.api(&format!("/workshops/{}/status", id));
        let body = ChangeStatusRequest {
            status: Some(status.to_string()),
        };
        self.fetch(self.http_client.put(url).json(&body)).await
    }

    /// Finishes the workshop; workshops are never removed.
    pub async fn finish_workshop(&self, id: WorkshopId) -> Result<(), ClientError> {
        let url = self.api(&format!("/workshops/{}", id));
        self.execute(self.http_client.delete(url)).await
    }

    pub async fn workshop_participants(
        &self,
        id: WorkshopId,
    ) -> Result<Vec<Participant>, ClientError> {
        let url = self.api(&format!("/workshops/{}/participants", id));
        self.fetch(self.http_client.get(url)).await
    }

    pub async fn workshop_attendance(
        &self,
        id: WorkshopId,
        date: Option<NaiveDate>,
    ) -> Result<Vec<WorkshopAttendanceView>, ClientError> {
        let mut request = self
            .http_client
            .get(self.api(&format!("/workshops/{}/attendance", id)));
        if let Some(date) = date {
            request = request.query(&[("date", date.to_string())]);
        }
        self.fetch(request).await
    }

    pub async fn enroll_participant(
        &self,
        workshop_id: WorkshopId,
        participant_id: ParticipantId,
    ) -> Result<MessageResponse, ClientError> {
        let url = self.api(&format!("/workshops/{}/participants", workshop_id));
        let body = EnrollRequest {
            participant_id: Some(participant_id),
        };
        self.fetch(self.http_client.post(url).json(&body)).await
    }

    pub async fn unenroll_participant(
        &self,
        workshop_id: WorkshopId,
        participant_id: ParticipantId,
    ) -> Result<(), ClientError> {
        let url = self.api(&format!(
            "/workshops/{}/participants/{}",
            workshop_id, participant_id
        ));
        self.execute(self.http_client.delete(url)).await
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Participants
    // ════════════════════════════════════════════════════════════════════════════

    /// Active participants, optionally only one type.
    pub async fn list_participants(
        &self,
        participant_type: Option<&str>,
    ) -> Result<Vec<Participant>, ClientError> {
        let mut request = self.http_client.get(self.api("/participants"));
        if let Some(participant_type) = participant_type {
            request = request.query(&[("type", participant_type)]);
        }
        self.fetch(request).await
    }

    pub async fn get_participant(&self, id: ParticipantId) -> Result<Participant, ClientError> {
        self.fetch(self.http_client.get(self.api(&format!("/participants/{}", id))))
            .await
    }

    pub async fn create_participant(
        &self,
        participant: &CreateParticipantRequest,
    ) -> Result<Participant, ClientError> {
        self.fetch(self.http_client.post(self.api("/participants")).json(participant))
            .await
    }

    pub async fn update_participant(
        &self,
        id: ParticipantId,
        changes: &UpdateParticipantRequest,
    ) -> Result<Participant, ClientError> {
        let url = self.api(&format!("/participants/{}", id));
        self.fetch(self.http_client.put(url).json(changes)).await
    }

    /// Soft-deletes the participant.
    pub async fn deactivate_participant(&self, id: ParticipantId) -> Result<(), ClientError> {
        let url = self.api(&format!("/participants/{}", id));
        self.execute(self.http_client.delete(url)).await
    }

    pub async fn participant_attendance_stats(
        &self,
        id: ParticipantId,
    ) -> Result<AttendanceStats, ClientError> {
        let url = self.api(&format!("/participants/{}/attendance-stats", id));
        self.fetch(self.http_client.get(url)).await
    }

    pub async fn participant_attendance_history(
        &self,
        id: ParticipantId,
    ) -> Result<Vec<AttendanceHistoryEntry>, ClientError> {
        let url = self.api(&format!("/participants/{}/attendance-history", id));
        self.fetch(self.http_client.get(url)).await
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Attendance
    // ════════════════════════════════════════════════════════════════════════════

    pub async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>, ClientError> {
        self.fetch(self.http_client.get(self.api("/attendance"))).await
    }

    pub async fn get_attendance(&self, id: AttendanceId) -> Result<AttendanceRecord, ClientError> {
        self.fetch(self.http_client.get(self.api(&format!("/attendance/{}", id))))
            .await
    }

    /// Replaces the attendance of one workshop on one date.
    pub async fn record_attendance(
        &self,
        entries: &[AttendanceEntryRequest],
    ) -> Result<Vec<WriteAck>, ClientError> {
        self.fetch(self.http_client.post(self.api("/attendance")).json(entries))
            .await
    }

    pub async fn update_attendance(
        &self,
        id: AttendanceId,
        changes: &UpdateAttendanceRequest,
    ) -> Result<AttendanceRecord, ClientError> {
        let url = self.api(&format!("/attendance/{}", id));
        self.fetch(self.http_client.put(url).json(changes)).await
    }

    pub async fn delete_attendance(&self, id: AttendanceId) -> Result<(), ClientError> {
        let url = self.api(&format!("/attendance/{}", id));
        self.execute(self.http_client.delete(url)).await
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/health", self.base_url);
        self.fetch(self.http_client.get(url)).await
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Plumbing
    // ════════════════════════════════════════════════════════════════════════════

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn execute(&self, request: RequestBuilder) -> Result<(), ClientError> {
        self.send(request).await.map(|_| ())
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(status.as_u16(), status.canonical_reason(), &body);
        debug!(status = status.as_u16(), error = %message, "API request failed");
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Picks the message for a failed response.
///
/// A JSON body without an `error` field falls back to a generic message
/// naming the status code.
fn error_message(status: u16, reason: Option<&str>, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error: Some(error) }) => error,
        Ok(ErrorBody { error: None }) => format!("Request failed with status {}", status),
        Err(_) => reason.unwrap_or("Something went wrong").to_string(),
    }
}
