//! WiFi wizard views, shared by onboarding and settings.

use super::{Action, KeyboardView, View};
use crate::app::Intent;
use crate::keyboard::Key;
use crate::model::WifiNetwork;
use crate::wizard::{WifiStep, WifiWizard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifiContext {
    Setup,
    Settings,
}

pub fn render(wizard: &WifiWizard, context: WifiContext) -> View {
    match wizard.step {
        WifiStep::Password => render_password(wizard),
        WifiStep::List => match context {
            WifiContext::Setup => render_setup_list(wizard),
            WifiContext::Settings => render_settings_list(wizard),
        },
    }
}

fn network_label(net: &WifiNetwork) -> String {
    let lock = if net.secure { "🔒 " } else { "" };
    if net.signal >= 0 {
        format!("{}{} ({}%)", lock, net.ssid, net.signal)
    } else {
        format!("{}{}", lock, net.ssid)
    }
}

fn refresh_action(wizard: &WifiWizard) -> Action {
    let label = if wizard.scanning { "Scanning..." } else { "Refresh" };
    Action::new(label, Intent::RefreshNetworks).enabled(!wizard.scanning)
}

fn with_networks(mut view: View, wizard: &WifiWizard) -> View {
    if !wizard.scanning {
        for net in &wizard.networks {
            view = view.action(Action::new(
                network_label(net),
                Intent::SelectNetwork(net.ssid.clone()),
            ));
        }
    }
    view
}

fn render_password(wizard: &WifiWizard) -> View {
    let submit_label = if wizard.connecting { "Connecting..." } else { "Connect" };

    let mut view = View::new(format!("Password for {}", wizard.selected_ssid))
        .subtitle("Enter WiFi password")
        .keyboard(KeyboardView::new(&wizard.password, submit_label, wizard.connecting))
        .action(
            Action::new(submit_label, Intent::Key(Key::Submit)).enabled(!wizard.connecting),
        )
        .action(Action::new("Back", Intent::Back));

    if let Some(error) = &wizard.connect_error {
        view = view.line(error.clone());
    }
    if wizard.connecting {
        view = view.line("Connecting...");
    }
    view
}

fn render_setup_list(wizard: &WifiWizard) -> View {
    let view = View::new("WiFi Setup").subtitle("Tap a network");

    if let Some(ssid) = wizard.existing_connection() {
        return view
            .line(format!("Connected to {}", ssid))
            .action(Action::new("Continue", Intent::ContinueWithNetwork));
    }

    let mut view = view.line("Select a network");
    if wizard.scanning && wizard.networks.is_empty() {
        view = view.line("Scanning for networks...");
    }
    if !wizard.scanning && wizard.networks.is_empty() && wizard.scan_error.is_none() {
        view = view.line("No networks found. Tap Refresh.");
    }
    if let Some(error) = &wizard.scan_error {
        view = view.line(error.clone());
    }

    with_networks(view, wizard).action(refresh_action(wizard))
}

fn render_settings_list(wizard: &WifiWizard) -> View {
    let mut view = View::new("WiFi Settings");

    if let (true, Some(ssid)) = (wizard.connected, wizard.connected_ssid.as_deref()) {
        view = view.line(format!("Connected to {}", ssid));
    }
    if let Some(error) = &wizard.connect_error {
        view = view.line(error.clone());
    }

    with_networks(view, wizard)
        .action(refresh_action(wizard))
        .action(Action::new("Back", Intent::Back))
}
