//! WiFi wizard: pick a network, then enter its password.

use crate::keyboard::{Key, KeyOutcome, OnScreenKeyboard};
use crate::model::WifiNetwork;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifiStep {
    List,
    Password,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WifiWizard {
    pub step: WifiStep,
    pub networks: Vec<WifiNetwork>,
    pub scanning: bool,
    pub scan_error: Option<String>,
    pub checking_status: bool,
    pub connected: bool,
    pub connected_ssid: Option<String>,
    pub selected_ssid: String,
    pub password: OnScreenKeyboard,
    pub connecting: bool,
    pub connect_error: Option<String>,
}

impl Default for WifiWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl WifiWizard {
    pub fn new() -> Self {
        Self {
            step: WifiStep::List,
            networks: Vec::new(),
            scanning: true,
            scan_error: None,
            checking_status: true,
            connected: false,
            connected_ssid: None,
            selected_ssid: String::new(),
            password: OnScreenKeyboard::text(),
            connecting: false,
            connect_error: None,
        }
    }

    pub fn begin_scan(&mut self) {
        self.scanning = true;
        self.scan_error = None;
    }

    pub fn apply_status(&mut self, status: Result<(bool, Option<String>), String>) {
        match status {
            Ok((connected, ssid)) => {
                self.connected = connected;
                self.connected_ssid = ssid;
            }
            Err(_) => {
                self.connected = false;
                self.connected_ssid = None;
            }
        }
        self.checking_status = false;
    }

    pub fn apply_scan(&mut self, scan: Result<Vec<WifiNetwork>, String>) {
        match scan {
            Ok(networks) => self.networks = networks,
            Err(message) => {
                self.scan_error = Some(message);
                self.networks.clear();
            }
        }
        self.scanning = false;
    }

    /// SSID the device is already connected to, once the status check is done.
    pub fn existing_connection(&self) -> Option<&str> {
        if self.checking_status || !self.connected {
            return None;
        }
        self.connected_ssid.as_deref()
    }

    pub fn select_network(&mut self, ssid: &str) {
        self.selected_ssid = ssid.to_string();
        self.connect_error = None;
        self.password.clear();
        self.step = WifiStep::Password;
    }

    pub fn back_to_list(&mut self) {
        self.step = WifiStep::List;
        self.connect_error = None;
    }

    pub fn press_key(&mut self, key: Key) -> KeyOutcome {
        if self.step != WifiStep::Password {
            return KeyOutcome::Ignored;
        }
        self.password.press(key)
    }

    pub fn type_text(&mut self, text: &str) {
        if self.step == WifiStep::Password {
            self.password.type_text(text);
        }
    }

    /// Returns `(ssid, password)` to connect with, or `None` when there is
    /// nothing to connect to or a connection attempt is already running.
    pub fn begin_connect(&mut self) -> Option<(String, String)> {
        let ssid = self.selected_ssid.trim();
        if ssid.is_empty() || self.connecting {
            return None;
        }
        let target = (ssid.to_string(), self.password.value().to_string());
        self.connecting = true;
        self.connect_error = None;
        Some(target)
    }

    pub fn connect_failed(&mut self, message: String) {
        self.connect_error = Some(message);
        self.connecting = false;
    }

    pub fn connect_finished(&mut self) {
        self.connecting = false;
    }
}
