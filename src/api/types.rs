//! Request and response bodies for the recorder backend.

use serde::{Deserialize, Serialize};

use crate::model::{Meeting, WifiNetwork};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct StopRecordingRequest {
    /// Wall-clock start of the recording, epoch milliseconds.
    pub start_time: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StopRecordingResponse {
    #[serde(rename = "meetingId")]
    pub meeting_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranscriptResponse {
    #[serde(default)]
    pub transcript: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecorderStateResponse {
    pub state: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeetingListResponse {
    #[serde(default)]
    pub meetings: Vec<Meeting>,
    #[serde(rename = "storageUsedMB")]
    pub storage_used_mb: Option<f64>,
    #[serde(rename = "storageTotalMB")]
    pub storage_total_mb: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    #[serde(default)]
    pub email_configured: bool,
    pub email_address: Option<String>,
    #[serde(default)]
    pub setup_complete: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WifiStatusResponse {
    #[serde(default)]
    pub connected: bool,
    pub ssid: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WifiScanResponse {
    #[serde(default)]
    pub networks: Vec<WifiNetwork>,
}

#[derive(Debug, Serialize)]
pub struct WifiConnectRequest<'a> {
    pub ssid: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WifiConnectResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SetupCompleteRequest {
    pub complete: bool,
}

#[derive(Debug, Serialize)]
pub struct SendOtpRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct VerifyOtpRequest<'a> {
    pub email: &'a str,
    pub code: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyOtpResponse {
    #[serde(default)]
    pub status: String,
    pub email: String,
}
