//! HTTP client for the recorder backend.
//!
//! Every call sends JSON, parses a JSON response and turns non-success
//! statuses into [`ApiError::Status`] carrying the backend's `detail`.

use async_trait::async_trait;
use reqwest::{header, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::error::{ApiError, ApiResult};
use super::types::*;
use super::KioskApi;
use crate::model::Meeting;

/// Client for the recorder REST API.
pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    /// Create a new client with the given base URL (e.g. `http://127.0.0.1:8000/api`).
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send::<T, ()>(Method::GET, path, None).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send::<T, ()>(Method::POST, path, None).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|source| ApiError::Transport {
            path: path.to_string(),
            source,
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|source| ApiError::Transport {
            path: path.to_string(),
            source,
        })?;

        if !status.is_success() {
            debug!("{} failed ({}): {}", path, status, text);
            return Err(ApiError::from_response(status, &text));
        }

        serde_json::from_str(&text).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

#[async_trait]
impl KioskApi for HttpApiClient {
    async fn start_recording(&self) -> ApiResult<StatusResponse> {
        self.post("/recording/start").await
    }

    async fn abort_recording(&self) -> ApiResult<StatusResponse> {
        self.post("/recording/abort").await
    }

    async fn pause_recording(&self) -> ApiResult<StatusResponse> {
        self.post("/recording/pause").await
    }

    async fn resume_recording(&self) -> ApiResult<StatusResponse> {
        self.post("/recording/resume").await
    }

    async fn stop_recording(&self, start_time: i64) -> ApiResult<StopRecordingResponse> {
        self.post_json("/recording/stop", &StopRecordingRequest { start_time })
            .await
    }

    async fn transcript(&self) -> ApiResult<TranscriptResponse> {
        self.get("/recording/transcript").await
    }

    async fn recording_status(&self) -> ApiResult<RecorderStateResponse> {
        self.get("/recording/status").await
    }

    async fn list_meetings(&self) -> ApiResult<MeetingListResponse> {
        self.get("/meetings").await
    }

    async fn get_meeting(&self, id: &str) -> ApiResult<Meeting> {
        self.get(&format!("/meetings/{}", id)).await
    }

    async fn delete_meeting(&self, id: &str) -> ApiResult<StatusResponse> {
        self.send::<_, ()>(Method::DELETE, &format!("/meetings/{}", id), None)
            .await
    }

    async fn email_meeting(&self, id: &str) -> ApiResult<StatusResponse> {
        self.post(&format!("/export/email/{}", id)).await
    }

    async fn wifi_status(&self) -> ApiResult<WifiStatusResponse> {
        self.get("/settings/wifi/status").await
    }

    async fn wifi_scan(&self) -> ApiResult<WifiScanResponse> {
        self.get("/settings/wifi/scan").await
    }

    async fn wifi_connect(&self, ssid: &str, password: &str) -> ApiResult<WifiConnectResponse> {
        self.post_json("/settings/wifi/connect", &WifiConnectRequest { ssid, password })
            .await
    }

    async fn settings(&self) -> ApiResult<SettingsResponse> {
        self.get("/settings").await
    }

    async fn factory_reset(&self) -> ApiResult<StatusResponse> {
        self.post("/settings/factory-reset").await
    }

    async fn set_setup_complete(&self, complete: bool) -> ApiResult<StatusResponse> {
        self.post_json("/settings/setup-complete", &SetupCompleteRequest { complete })
            .await
    }

    async fn send_otp(&self, email: &str) -> ApiResult<StatusResponse> {
        self.post_json("/auth/send-otp", &SendOtpRequest { email })
            .await
    }

    async fn verify_otp(&self, email: &str, code: &str) -> ApiResult<VerifyOtpResponse> {
        self.post_json("/auth/verify-otp", &VerifyOtpRequest { email, code })
            .await
    }
}
