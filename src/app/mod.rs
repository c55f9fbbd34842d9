//! Kiosk state machine.
//!
//! [`App`] owns the only writable [`StateHandle`], turns [`Intent`]s into
//! backend calls and screen transitions, and drives the screen timers and the
//! meeting poll from [`App::run`].

pub mod intent;
mod timers;


use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::api::{user_message, KioskApi};
use crate::config::KioskConfig;
use crate::keyboard::Key;
use crate::model::{MeetingPatch, Settings};
use crate::state::{
    AppState, ConfirmAction, ExportProgress, PendingAction, RecordingClock, Screen,
    SettingsPane, StateHandle,
};
use crate::wizard::{EmailStep, EmailWizard, WifiStep, WifiWizard};

pub use intent::Intent;
pub use timers::{PollSchedule, ScreenTicker};

pub const STORAGE_FULL: &str = "Storage full. Please free up space before recording.";
pub const EMAIL_NOT_CONFIGURED: &str =
    "Email not configured. Please set up your email in Settings.";
pub const MEETING_NOT_FOUND: &str = "Meeting not found.";
pub const LOW_STORAGE_WARNING: &str =
    "Storage is running low. Recording will stop automatically if storage becomes full.";
pub const CONFIRM_DELETE: &str =
    "Are you sure you want to delete this meeting? This action cannot be undone.";
pub const CONFIRM_FACTORY_RESET: &str = "Factory reset will delete ALL meetings and settings. This cannot be undone. Are you absolutely sure?";

/// What a keyboard submit means on the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitTarget {
    ConnectWifi,
    SendCode,
    VerifyCode,
}

pub struct App {
    api: Arc<dyn KioskApi>,
    state: StateHandle,
    config: KioskConfig,
}

impl App {
    pub fn new(api: Arc<dyn KioskApi>, config: KioskConfig) -> Self {
        let state = StateHandle::new(AppState {
            storage_total_mb: config.storage_total_mb,
            ..Default::default()
        });
        Self::with_state(api, config, state)
    }

    pub fn with_state(api: Arc<dyn KioskApi>, config: KioskConfig, state: StateHandle) -> Self {
        Self { api, state, config }
    }

    pub fn state(&self) -> &StateHandle {
        &self.state
    }

    /// Process intents until `Quit` or the sender goes away, firing screen
    /// ticks and meeting polls in between.
    pub async fn run(&self, mut intents: mpsc::Receiver<Intent>) {
        self.bootstrap().await;

        let mut poll = PollSchedule::new(self.config.poll_interval());
        let mut ticker =
            ScreenTicker::new(self.config.recording_tick(), self.config.progress_tick());

        loop {
            self.state.read(|state| {
                poll.sync(state);
                ticker.sync(state);
            });
            let poll_at = poll.deadline();
            let tick_at = ticker.deadline();

            tokio::select! {
                intent = intents.recv() => match intent {
                    Some(Intent::Quit) | None => {
                        info!("Kiosk shutting down");
                        break;
                    }
                    Some(intent) => self.dispatch_ticking(intent, &mut ticker).await,
                },
                _ = timers::sleep_until(poll_at) => {
                    poll.fired();
                    debug!("Refreshing meetings while notes are processing");
                    self.fetch_meetings().await;
                }
                _ = timers::sleep_until(tick_at) => {
                    ticker.fired();
                    self.tick();
                }
            }
        }
    }

    /// Run one intent to completion while the screen ticker keeps firing, so
    /// the recording clock and the email progress bar advance during slow
    /// backend calls.
    async fn dispatch_ticking(&self, intent: Intent, ticker: &mut ScreenTicker) {
        let mut changes = self.state.subscribe();
        let dispatch = self.dispatch(intent);
        tokio::pin!(dispatch);

        loop {
            self.state.read(|state| ticker.sync(state));
            let tick_at = ticker.deadline();

            tokio::select! {
                _ = &mut dispatch => break,
                // re-sync when the intent moves to a ticking screen
                Ok(()) = changes.changed() => {}
                _ = timers::sleep_until(tick_at) => {
                    ticker.fired();
                    self.tick();
                }
            }
        }
    }

    pub async fn bootstrap(&self) {
        info!("Loading kiosk state");
        self.fetch_settings().await;
        self.fetch_meetings().await;
    }

    pub async fn fetch_settings(&self) {
        match self.api.settings().await {
            Ok(res) => {
                info!(
                    "Settings loaded (setup_complete={}, email_configured={})",
                    res.setup_complete, res.email_configured
                );
                self.state.update(|s| {
                    s.settings.setup_complete = res.setup_complete;
                    s.settings.email_verified = res.email_configured;
                    s.settings.export_email = res.email_address;
                    if res.setup_complete {
                        s.screen = Screen::Home;
                    }
                    s.loading = false;
                });
            }
            Err(e) => {
                warn!("Failed to fetch settings: {}", e);
                self.state.update(|s| s.loading = false);
            }
        }
    }

    pub async fn fetch_meetings(&self) {
        match self.api.list_meetings().await {
            Ok(res) => {
                debug!("Fetched {} meetings", res.meetings.len());
                self.state.update(|s| {
                    s.meetings = res.meetings;
                    if let Some(used) = res.storage_used_mb {
                        s.storage_used_mb = used;
                    }
                    if let Some(total) = res.storage_total_mb {
                        s.storage_total_mb = total;
                    }
                });
            }
            Err(e) => warn!("Failed to fetch meetings: {}", e),
        }
    }

    /// Patch the cached copy of a meeting. Unknown ids are ignored.
    pub fn update_meeting(&self, id: &str, patch: MeetingPatch) {
        self.state.update(|s| {
            if let Some(meeting) = s.meetings.iter_mut().find(|m| m.id == id) {
                meeting.apply(patch);
            }
        });
    }

    pub async fn dispatch(&self, intent: Intent) {
        debug!("Intent {:?} on {}", intent, self.state.read(|s| s.current_screen()));

        match intent {
            Intent::GetStarted => {
                self.navigate(Screen::SetupWifi(WifiWizard::new()));
                self.enter_wifi().await;
            }
            Intent::SkipEmail => self.skip_email().await,

            Intent::RefreshNetworks => self.scan_networks().await,
            Intent::SelectNetwork(ssid) => self.with_wifi(|w| w.select_network(&ssid)),
            Intent::ContinueWithNetwork => {
                let existing = self.state.read(|s| match &s.screen {
                    Screen::SetupWifi(w) => w.existing_connection().map(str::to_string),
                    _ => None,
                });
                if let Some(ssid) = existing {
                    self.wifi_connected(ssid);
                }
            }
            Intent::ConnectNetwork => self.connect_wifi().await,

            Intent::SendCode | Intent::ResendCode => self.send_code().await,
            Intent::VerifyCode => self.verify_code().await,
            Intent::UseDifferentEmail => self.with_email(EmailWizard::back_to_email),

            Intent::Key(Key::Submit) => self.submit().await,
            Intent::Key(key) => self.state.update(|s| {
                if let Some(wizard) = s.screen.wifi_wizard_mut() {
                    wizard.press_key(key);
                } else if let Some(wizard) = s.screen.email_wizard_mut() {
                    wizard.press_key(key);
                }
            }),
            Intent::TypeText(text) => self.state.update(|s| {
                if let Some(wizard) = s.screen.wifi_wizard_mut() {
                    wizard.type_text(&text);
                } else if let Some(wizard) = s.screen.email_wizard_mut() {
                    wizard.type_text(&text);
                }
            }),

            Intent::StartRecording => self.start_recording().await,
            Intent::StopRecording => self.stop_recording().await,
            Intent::PauseRecording => self.pause_recording().await,
            Intent::ResumeRecording => self.resume_recording().await,

            Intent::OpenPastMeetings => {
                self.navigate(Screen::PastMeetings);
                self.fetch_meetings().await;
            }
            Intent::OpenMeeting(id) => self.open_meeting(&id),
            Intent::DeleteMeeting(id) => self.request_delete(&id),
            Intent::EmailMeeting(id) => self.email_meeting(&id).await,
            Intent::GotIt => {
                self.fetch_meetings().await;
                self.navigate(Screen::Home);
            }

            Intent::OpenSettings => self.navigate(Screen::Settings(SettingsPane::Main)),
            Intent::OpenWifiSettings => {
                self.navigate(Screen::Settings(SettingsPane::Wifi(WifiWizard::new())));
                self.enter_wifi().await;
            }
            Intent::OpenEmailSettings => {
                self.navigate(Screen::Settings(SettingsPane::Email(EmailWizard::new(false))))
            }
            Intent::RunSetupAgain => self.run_setup_again().await,
            Intent::FactoryReset => self.state.update(|s| {
                s.confirm_action = Some(ConfirmAction {
                    message: CONFIRM_FACTORY_RESET.to_string(),
                    action: PendingAction::FactoryReset,
                });
            }),

            Intent::Confirm => self.confirm().await,
            Intent::Cancel => self.state.update(|s| s.confirm_action = None),
            Intent::DismissError => self.state.update(|s| s.error = None),

            Intent::Back => self.back(),
            Intent::Tick => self.tick(),
            Intent::Quit => {}
        }
    }

    fn navigate(&self, screen: Screen) {
        debug!("Navigating to {}", screen.kind());
        self.state.update(|s| s.screen = screen);
    }

    fn show_error(&self, message: impl Into<String>) {
        let message = message.into();
        warn!("Showing error: {}", message);
        self.state.update(|s| s.error = Some(message));
    }

    fn with_wifi(&self, f: impl FnOnce(&mut WifiWizard)) {
        self.state.update(|s| {
            if let Some(wizard) = s.screen.wifi_wizard_mut() {
                f(wizard);
            }
        });
    }

    fn with_email(&self, f: impl FnOnce(&mut EmailWizard)) {
        self.state.update(|s| {
            if let Some(wizard) = s.screen.email_wizard_mut() {
                f(wizard);
            }
        });
    }

    // Recording

    async fn start_recording(&self) {
        let available = self.state.read(AppState::available_mb);
        if available < self.config.min_free_mb {
            warn!("Refusing to record with {:.1} MB free", available);
            self.show_error(STORAGE_FULL);
            return;
        }

        self.state.update(|s| {
            s.current_recording_start = Some(Utc::now());
            s.recording_paused = false;
            s.screen = Screen::Recording(RecordingClock::default());
        });

        match self.api.start_recording().await {
            Ok(_) => info!("Recording started"),
            Err(e) => {
                error!("Failed to start recording: {}", e);
                let message = user_message(&e, "Failed to start recording.");
                self.state.update(|s| {
                    s.current_recording_start = None;
                    s.screen = Screen::Home;
                    s.error = Some(message);
                });

                let api = self.api.clone();
                tokio::spawn(async move {
                    if let Err(e) = api.abort_recording().await {
                        warn!("Abort after failed start also failed: {}", e);
                    }
                });
            }
        }
    }

    async fn stop_recording(&self) {
        let start_time = self
            .state
            .read(|s| s.current_recording_start)
            .unwrap_or_else(Utc::now)
            .timestamp_millis();

        self.navigate(Screen::Processing);

        match self.api.stop_recording(start_time).await {
            Ok(res) => {
                info!("Recording stopped, meeting {} saved", res.meeting_id);
                self.fetch_meetings().await;
                self.state.update(|s| {
                    s.current_recording_start = None;
                    s.recording_paused = false;
                    s.current_meeting_id = Some(res.meeting_id);
                    s.screen = Screen::EmailWhenReady;
                });
            }
            Err(e) => {
                error!("Failed to stop recording: {}", e);
                let message = user_message(&e, "Failed to process recording.");
                self.state.update(|s| {
                    s.error = Some(message);
                    s.screen = Screen::Home;
                });
            }
        }
    }

    async fn pause_recording(&self) {
        match self.api.pause_recording().await {
            Ok(_) => {
                info!("Recording paused");
                self.state.update(|s| s.recording_paused = true);
            }
            Err(e) => self.show_error(user_message(&e, "Failed to pause.")),
        }
    }

    async fn resume_recording(&self) {
        match self.api.resume_recording().await {
            Ok(_) => {
                info!("Recording resumed");
                self.state.update(|s| s.recording_paused = false);
            }
            Err(e) => self.show_error(user_message(&e, "Failed to resume.")),
        }
    }

    // Meetings

    fn open_meeting(&self, id: &str) {
        let opened = self.state.update(|s| {
            match s.find_meeting(id) {
                Some(meeting) if !meeting.is_processing() => {}
                _ => return false,
            }
            s.current_meeting_id = Some(id.to_string());
            s.screen = Screen::MeetingDetails;
            true
        });
        if !opened {
            debug!("Meeting {} is not available to open", id);
        }
    }

    fn request_delete(&self, id: &str) {
        self.state.update(|s| {
            if s.find_meeting(id).is_none() {
                return;
            }
            s.confirm_action = Some(ConfirmAction {
                message: CONFIRM_DELETE.to_string(),
                action: PendingAction::DeleteMeeting(id.to_string()),
            });
        });
    }

    async fn delete_meeting(&self, id: &str) {
        match self.api.delete_meeting(id).await {
            Ok(_) => {
                info!("Deleted meeting {}", id);
                self.fetch_meetings().await;
                self.state.update(|s| {
                    if s.current_meeting_id.as_deref() == Some(id) {
                        s.current_meeting_id = None;
                    }
                    s.screen = Screen::PastMeetings;
                });
            }
            Err(e) => {
                error!("Failed to delete meeting {}: {}", id, e);
                self.show_error(user_message(&e, "Failed to delete meeting."));
            }
        }
    }

    async fn email_meeting(&self, id: &str) {
        let (verified, known) = self
            .state
            .read(|s| (s.settings.email_verified, s.find_meeting(id).is_some()));
        if !verified {
            self.show_error(EMAIL_NOT_CONFIGURED);
            return;
        }
        if !known {
            self.show_error(MEETING_NOT_FOUND);
            return;
        }

        self.navigate(Screen::EmailProgress(ExportProgress::new(id)));

        match self.api.email_meeting(id).await {
            Ok(_) => {
                info!("Emailed meeting {}", id);
                self.update_meeting(
                    id,
                    MeetingPatch {
                        emailed: Some(true),
                        emailed_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
                        ..Default::default()
                    },
                );
                self.fetch_meetings().await;
            }
            Err(e) => {
                error!("Failed to email meeting {}: {}", id, e);
                self.show_error(user_message(&e, "Failed to send email."));
            }
        }

        self.state.update(|s| {
            s.current_meeting_id = Some(id.to_string());
            s.screen = Screen::MeetingDetails;
        });
    }

    // Settings

    async fn confirm(&self) {
        let Some(confirm) = self.state.read(|s| s.confirm_action.clone()) else {
            return;
        };

        match confirm.action {
            PendingAction::DeleteMeeting(id) => self.delete_meeting(&id).await,
            PendingAction::FactoryReset => self.factory_reset().await,
        }

        self.state.update(|s| s.confirm_action = None);
    }

    async fn factory_reset(&self) {
        if let Err(e) = self.api.factory_reset().await {
            error!("Factory reset failed: {}", e);
            self.show_error(user_message(&e, "Factory reset failed."));
            return;
        }

        info!("Factory reset complete");
        self.fetch_settings().await;
        self.fetch_meetings().await;

        self.state.update(|s| {
            s.screen = Screen::SetupWelcome;
            s.settings = Settings::default();
            s.meetings.clear();
            s.storage_used_mb = 0.0;
            s.current_meeting_id = None;
        });
    }

    async fn run_setup_again(&self) {
        match self.api.set_setup_complete(false).await {
            Ok(_) => self.state.update(|s| {
                s.settings.setup_complete = false;
                s.screen = Screen::SetupWelcome;
            }),
            Err(e) => self.show_error(user_message(&e, "Could not reset setup.")),
        }
    }

    async fn skip_email(&self) {
        if let Err(e) = self.api.set_setup_complete(true).await {
            warn!("Could not mark setup complete: {}", e);
        }
        self.state.update(|s| {
            s.settings.setup_complete = true;
            s.screen = Screen::Home;
        });
    }

    fn back(&self) {
        self.state.update(|s| {
            let next = match &mut s.screen {
                Screen::MeetingDetails => Some(Screen::PastMeetings),
                Screen::PastMeetings => Some(Screen::Home),
                Screen::Settings(SettingsPane::Main) => Some(Screen::Home),
                Screen::Settings(SettingsPane::Email(_)) => Some(Screen::Settings(SettingsPane::Main)),
                Screen::Settings(SettingsPane::Wifi(wizard)) if wizard.step == WifiStep::Password => {
                    wizard.back_to_list();
                    None
                }
                Screen::Settings(SettingsPane::Wifi(_)) => Some(Screen::Settings(SettingsPane::Main)),
                Screen::SetupWifi(wizard) if wizard.step == WifiStep::Password => {
                    wizard.back_to_list();
                    None
                }
                _ => None,
            };
            if let Some(next) = next {
                s.screen = next;
            }
        });
    }

    // Wizards

    async fn enter_wifi(&self) {
        let status = self
            .api
            .wifi_status()
            .await
            .map(|res| (res.connected, res.ssid))
            .map_err(|e| {
                warn!("WiFi status unavailable: {}", e);
                e.to_string()
            });
        self.with_wifi(|w| w.apply_status(status));
        self.scan_networks().await;
    }

    async fn scan_networks(&self) {
        self.with_wifi(WifiWizard::begin_scan);

        let scan = self
            .api
            .wifi_scan()
            .await
            .map(|res| res.networks)
            .map_err(|e| {
                warn!("WiFi scan failed: {}", e);
                user_message(&e, "Could not scan for networks.")
            });
        self.with_wifi(|w| w.apply_scan(scan));
    }

    async fn connect_wifi(&self) {
        let mut target = None;
        self.with_wifi(|w| target = w.begin_connect());
        let Some((ssid, password)) = target else {
            return;
        };

        info!("Connecting to WiFi network {}", ssid);
        match self.api.wifi_connect(&ssid, &password).await {
            Ok(_) => {
                self.with_wifi(WifiWizard::connect_finished);
                self.wifi_connected(ssid);
            }
            Err(e) => {
                warn!("WiFi connect to {} failed: {}", ssid, e);
                let message = user_message(&e, "Connection failed.");
                self.with_wifi(|w| w.connect_failed(message));
            }
        }
    }

    fn wifi_connected(&self, ssid: String) {
        self.state.update(|s| {
            s.settings.wifi_ssid = Some(ssid);
            s.settings.wifi_connected = true;
            match s.screen {
                Screen::SetupWifi(_) => s.screen = Screen::SetupEmail(EmailWizard::new(true)),
                Screen::Settings(SettingsPane::Wifi(_)) => {
                    s.screen = Screen::Settings(SettingsPane::Main)
                }
                _ => {}
            }
        });
    }

    async fn send_code(&self) {
        let mut target = None;
        self.with_email(|w| target = w.begin_send());
        let Some(email) = target else {
            return;
        };

        match self.api.send_otp(&email).await {
            Ok(_) => {
                info!("Verification code sent to {}", email);
                self.with_email(|w| w.send_succeeded(&email));
            }
            Err(e) => {
                warn!("Sending verification code failed: {}", e);
                let message = user_message(&e, "Failed to send code.");
                self.with_email(|w| w.send_failed(message));
            }
        }
    }

    async fn verify_code(&self) {
        let mut target = None;
        self.with_email(|w| target = w.begin_verify());
        let Some((email, code)) = target else {
            return;
        };

        match self.api.verify_otp(&email, &code).await {
            Ok(res) => {
                self.with_email(EmailWizard::verify_finished);
                let verified = if res.email.is_empty() { email } else { res.email };
                info!("Email {} verified", verified);
                self.email_verified(verified);
            }
            Err(e) => {
                warn!("Verification failed: {}", e);
                let message = user_message(&e, "Verification failed.");
                self.with_email(|w| w.verify_failed(message));
            }
        }
    }

    fn email_verified(&self, email: String) {
        self.state.update(|s| {
            s.settings.export_email = Some(email);
            s.settings.email_verified = true;
            match s.screen {
                Screen::SetupEmail(_) => {
                    s.settings.setup_complete = true;
                    s.screen = Screen::Home;
                }
                Screen::Settings(SettingsPane::Email(_)) => {
                    s.screen = Screen::Settings(SettingsPane::Main)
                }
                _ => {}
            }
        });
    }

    async fn submit(&self) {
        let target = self.state.read(|s| match &s.screen {
            Screen::SetupWifi(w) | Screen::Settings(SettingsPane::Wifi(w))
                if w.step == WifiStep::Password =>
            {
                Some(SubmitTarget::ConnectWifi)
            }
            Screen::SetupEmail(w) | Screen::Settings(SettingsPane::Email(w)) => Some(match w.step {
                EmailStep::EnterEmail => SubmitTarget::SendCode,
                EmailStep::EnterCode => SubmitTarget::VerifyCode,
            }),
            _ => None,
        });

        match target {
            Some(SubmitTarget::ConnectWifi) => self.connect_wifi().await,
            Some(SubmitTarget::SendCode) => self.send_code().await,
            Some(SubmitTarget::VerifyCode) => self.verify_code().await,
            None => {}
        }
    }

    // Timers

    /// Advance the active screen's timer: recording clock and low-storage
    /// warning, or the email progress bar.
    pub fn tick(&self) {
        let warn_below = self.config.low_storage_warning_mb;
        self.state.update(|s| {
            let available = s.available_mb();
            let paused = s.recording_paused;
            let start = s.current_recording_start;

            let mut raise_warning = false;
            match &mut s.screen {
                Screen::Recording(clock) if !paused => {
                    if let Some(start) = start {
                        clock.elapsed = (Utc::now() - start).to_std().unwrap_or_default();
                    }
                    if available < warn_below && !clock.warning_shown {
                        clock.warning_shown = true;
                        raise_warning = true;
                    }
                }
                Screen::EmailProgress(progress) if !progress.complete => progress.advance(),
                _ => {}
            }

            if raise_warning {
                s.error = Some(LOW_STORAGE_WARNING.to_string());
            }
        });
    }
}
