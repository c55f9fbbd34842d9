//! Settings screen and its sub-panes.

use super::wifi::{self, WifiContext};
use super::{email, Action, View};
use crate::app::Intent;
use crate::state::{AppState, SettingsPane};

pub fn render(state: &AppState, pane: &SettingsPane) -> View {
    match pane {
        SettingsPane::Main => render_main(state),
        SettingsPane::Wifi(wizard) => wifi::render(wizard, WifiContext::Settings),
        SettingsPane::Email(wizard) => email::render(wizard),
    }
}

fn render_main(state: &AppState) -> View {
    let settings = &state.settings;

    let wifi = match (settings.wifi_connected, settings.wifi_ssid.as_deref()) {
        (true, Some(ssid)) => ssid.to_string(),
        _ => "Not connected".to_string(),
    };
    let email = match (settings.email_verified, settings.export_email.as_deref()) {
        (true, Some(address)) => address.to_string(),
        _ => "Log in to receive notes via email".to_string(),
    };

    View::new("Settings")
        .line("AI Note Taker v1.0")
        .line("All data processed locally on device")
        .action(Action::new(format!("WiFi Settings: {}", wifi), Intent::OpenWifiSettings))
        .action(Action::new(format!("Email Settings: {}", email), Intent::OpenEmailSettings))
        .action(Action::new(
            "Run setup again: WiFi and email onboarding",
            Intent::RunSetupAgain,
        ))
        .action(Action::new(
            "Factory Reset: delete all data and settings",
            Intent::FactoryReset,
        ))
        .action(Action::new("Back", Intent::Back))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_pane_summaries() {
        let mut state = AppState::default();
        let view = render(&state, &SettingsPane::Main);
        assert_eq!(view.actions[0].label, "WiFi Settings: Not connected");
        assert_eq!(
            view.actions[1].label,
            "Email Settings: Log in to receive notes via email"
        );

        state.settings.wifi_connected = true;
        state.settings.wifi_ssid = Some("Office".to_string());
        state.settings.email_verified = true;
        state.settings.export_email = Some("a@b.com".to_string());
        let view = render(&state, &SettingsPane::Main);
        assert_eq!(view.actions[0].label, "WiFi Settings: Office");
        assert_eq!(view.actions[1].label, "Email Settings: a@b.com");
    }
}
