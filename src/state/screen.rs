//! Screens of the kiosk flow with their per-screen data.

use std::fmt;
use std::time::Duration;

use crate::wizard::{EmailWizard, WifiWizard};

/// Plain tag for each screen, used for comparisons and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    SetupWelcome,
    SetupWifi,
    SetupEmail,
    Home,
    Recording,
    Processing,
    EmailWhenReady,
    PastMeetings,
    MeetingDetails,
    Settings,
    EmailProgress,
}

impl ScreenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SetupWelcome => "setup-welcome",
            Self::SetupWifi => "setup-wifi",
            Self::SetupEmail => "setup-email",
            Self::Home => "home",
            Self::Recording => "recording",
            Self::Processing => "processing",
            Self::EmailWhenReady => "email-when-ready",
            Self::PastMeetings => "past-meetings",
            Self::MeetingDetails => "meeting-details",
            Self::Settings => "settings",
            Self::EmailProgress => "email-progress",
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Elapsed-time display state of the recording screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingClock {
    pub elapsed: Duration,
    pub warning_shown: bool,
}

/// Simulated progress shown while a meeting is being emailed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportProgress {
    pub meeting_id: String,
    pub percent: u8,
    pub complete: bool,
}

impl ExportProgress {
    pub fn new(meeting_id: impl Into<String>) -> Self {
        Self {
            meeting_id: meeting_id.into(),
            percent: 0,
            complete: false,
        }
    }

    /// One progress tick: +5 % until full, then complete.
    pub fn advance(&mut self) {
        if self.percent >= 100 {
            self.percent = 100;
            self.complete = true;
        } else {
            self.percent = (self.percent + 5).min(100);
        }
    }
}

/// Sub-view of the settings screen.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsPane {
    Main,
    Wifi(WifiWizard),
    Email(EmailWizard),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    SetupWelcome,
    SetupWifi(WifiWizard),
    SetupEmail(EmailWizard),
    Home,
    Recording(RecordingClock),
    Processing,
    EmailWhenReady,
    PastMeetings,
    MeetingDetails,
    Settings(SettingsPane),
    EmailProgress(ExportProgress),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Self::SetupWelcome => ScreenKind::SetupWelcome,
            Self::SetupWifi(_) => ScreenKind::SetupWifi,
            Self::SetupEmail(_) => ScreenKind::SetupEmail,
            Self::Home => ScreenKind::Home,
            Self::Recording(_) => ScreenKind::Recording,
            Self::Processing => ScreenKind::Processing,
            Self::EmailWhenReady => ScreenKind::EmailWhenReady,
            Self::PastMeetings => ScreenKind::PastMeetings,
            Self::MeetingDetails => ScreenKind::MeetingDetails,
            Self::Settings(_) => ScreenKind::Settings,
            Self::EmailProgress(_) => ScreenKind::EmailProgress,
        }
    }

    /// Fresh screen for a tag, with default per-screen data.
    #[cfg(test)]
    pub fn fresh(kind: ScreenKind) -> Self {
        match kind {
            ScreenKind::SetupWelcome => Self::SetupWelcome,
            ScreenKind::SetupWifi => Self::SetupWifi(WifiWizard::new()),
            ScreenKind::SetupEmail => Self::SetupEmail(EmailWizard::new(true)),
            ScreenKind::Home => Self::Home,
            ScreenKind::Recording => Self::Recording(RecordingClock::default()),
            ScreenKind::Processing => Self::Processing,
            ScreenKind::EmailWhenReady => Self::EmailWhenReady,
            ScreenKind::PastMeetings => Self::PastMeetings,
            ScreenKind::MeetingDetails => Self::MeetingDetails,
            ScreenKind::Settings => Self::Settings(SettingsPane::Main),
            ScreenKind::EmailProgress => Self::EmailProgress(ExportProgress::new("")),
        }
    }

    /// WiFi wizard shown on this screen, if any.
    pub fn wifi_wizard_mut(&mut self) -> Option<&mut WifiWizard> {
        match self {
            Self::SetupWifi(wizard) | Self::Settings(SettingsPane::Wifi(wizard)) => Some(wizard),
            _ => None,
        }
    }

    /// Email wizard shown on this screen, if any.
    pub fn email_wizard_mut(&mut self) -> Option<&mut EmailWizard> {
        match self {
            Self::SetupEmail(wizard) | Self::Settings(SettingsPane::Email(wizard)) => Some(wizard),
            _ => None,
        }
    }
}
