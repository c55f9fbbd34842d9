//! Home screen.

use super::{Action, View};
use crate::app::Intent;
use crate::format;
use crate::state::AppState;

pub fn render(state: &AppState) -> View {
    let wifi = if state.settings.wifi_connected {
        match state.settings.wifi_ssid.as_deref() {
            Some(ssid) => format!("WiFi: {}", ssid),
            None => "WiFi: connected".to_string(),
        }
    } else {
        "WiFi: not connected".to_string()
    };

    View::new("SafeScribe")
        .line(format!(
            "Storage: {}",
            format::storage_free(state.storage_used_mb, state.storage_total_mb)
        ))
        .line(wifi)
        .action(Action::new("Start Listening", Intent::StartRecording))
        .action(Action::new("Past Meetings", Intent::OpenPastMeetings))
        .action(Action::new("Settings", Intent::OpenSettings))
}
