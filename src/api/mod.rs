//! Client side of the recorder backend API.
//!
//! Covers:
//! - Recording control (start, pause, resume, stop, abort, status, transcript)
//! - Meeting storage (list, get, delete) and email export
//! - WiFi status, scan and connect
//! - Settings, factory reset and setup completion
//! - Email OTP send/verify

pub mod client;
pub mod error;
pub mod types;

use async_trait::async_trait;

use crate::model::Meeting;

pub use client::HttpApiClient;
pub use error::{user_message, ApiError, ApiResult};
pub use types::{
    MeetingListResponse, RecorderStateResponse, SettingsResponse, StatusResponse,
    StopRecordingResponse, TranscriptResponse, VerifyOtpResponse, WifiConnectResponse,
    WifiScanResponse, WifiStatusResponse,
};

/// Backend operations used by the kiosk. Each call is a single round trip
/// with no retries.
#[async_trait]
pub trait KioskApi: Send + Sync {
    async fn start_recording(&self) -> ApiResult<StatusResponse>;
    async fn abort_recording(&self) -> ApiResult<StatusResponse>;
    async fn pause_recording(&self) -> ApiResult<StatusResponse>;
    async fn resume_recording(&self) -> ApiResult<StatusResponse>;
    /// `start_time` is the recording's wall-clock start in epoch milliseconds.
    async fn stop_recording(&self, start_time: i64) -> ApiResult<StopRecordingResponse>;
    async fn transcript(&self) -> ApiResult<TranscriptResponse>;
    async fn recording_status(&self) -> ApiResult<RecorderStateResponse>;

    async fn list_meetings(&self) -> ApiResult<MeetingListResponse>;
    async fn get_meeting(&self, id: &str) -> ApiResult<Meeting>;
    async fn delete_meeting(&self, id: &str) -> ApiResult<StatusResponse>;
    async fn email_meeting(&self, id: &str) -> ApiResult<StatusResponse>;

    async fn wifi_status(&self) -> ApiResult<WifiStatusResponse>;
    async fn wifi_scan(&self) -> ApiResult<WifiScanResponse>;
    async fn wifi_connect(&self, ssid: &str, password: &str) -> ApiResult<WifiConnectResponse>;

    async fn settings(&self) -> ApiResult<SettingsResponse>;
    async fn factory_reset(&self) -> ApiResult<StatusResponse>;
    async fn set_setup_complete(&self, complete: bool) -> ApiResult<StatusResponse>;

    async fn send_otp(&self, email: &str) -> ApiResult<StatusResponse>;
    async fn verify_otp(&self, email: &str, code: &str) -> ApiResult<VerifyOtpResponse>;
}
