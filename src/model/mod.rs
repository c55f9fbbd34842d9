//! Domain records mirrored from the recorder backend.

use serde::{Deserialize, Serialize};

/// Storage capacity assumed until the backend reports its own figure (32 GB).
pub const DEFAULT_STORAGE_TOTAL_MB: f64 = 32000.0;

/// Device settings as the kiosk sees them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub setup_complete: bool,
    pub wifi_ssid: Option<String>,
    pub wifi_connected: bool,
    pub export_email: Option<String>,
    /// Only ever set after a verified OTP round-trip or when the backend
    /// reports a configured address.
    pub email_verified: bool,
}

/// Processing marker carried by meetings whose notes are still being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Processing,
}

/// One recorded session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meeting {
    pub id: String,
    pub created_at: String,
    pub duration: u64,
    pub title: Option<String>,
    pub notes: Option<String>,
    pub transcript: Option<String>,
    pub summary: Option<String>,
    pub action_items: Vec<String>,
    pub decisions: Vec<String>,
    pub topics: Vec<String>,
    pub emailed: bool,
    pub emailed_at: Option<String>,
    pub status: Option<MeetingStatus>,
    pub audio_size: f64,
    pub transcript_size: f64,
    pub pdf_size: f64,
}

impl Meeting {
    pub fn is_processing(&self) -> bool {
        self.status == Some(MeetingStatus::Processing)
    }

    /// Title for display, treating an empty title as absent.
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Combined size of audio, transcript and PDF in MB.
    pub fn total_size_mb(&self) -> f64 {
        self.audio_size + self.transcript_size + self.pdf_size
    }

    pub fn apply(&mut self, patch: MeetingPatch) {
        if let Some(emailed) = patch.emailed {
            self.emailed = emailed;
        }
        if let Some(emailed_at) = patch.emailed_at {
            self.emailed_at = Some(emailed_at);
        }
    }
}

/// Partial update applied to a cached meeting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeetingPatch {
    pub emailed: Option<bool>,
    pub emailed_at: Option<String>,
}

/// A network reported by a WiFi scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiNetwork {
    pub ssid: String,
    #[serde(default = "unknown_signal")]
    pub signal: i32,
    #[serde(default)]
    pub secure: bool,
}

fn unknown_signal() -> i32 {
    -1
}
