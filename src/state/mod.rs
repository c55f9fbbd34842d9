//! Application state and the handle it is shared through.

pub mod screen;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::model::{Meeting, Settings, DEFAULT_STORAGE_TOTAL_MB};

pub use screen::{ExportProgress, RecordingClock, Screen, ScreenKind, SettingsPane};

/// Work deferred until the user confirms it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteMeeting(String),
    FactoryReset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmAction {
    pub message: String,
    pub action: PendingAction,
}

/// The single source of truth for the kiosk UI.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub screen: Screen,
    pub settings: Settings,
    /// Backend order; never re-sorted client-side.
    pub meetings: Vec<Meeting>,
    pub current_meeting_id: Option<String>,
    pub current_recording_start: Option<DateTime<Utc>>,
    pub recording_paused: bool,
    pub storage_used_mb: f64,
    pub storage_total_mb: f64,
    pub error: Option<String>,
    pub confirm_action: Option<ConfirmAction>,
    /// True until the first settings fetch settles.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::SetupWelcome,
            settings: Settings::default(),
            meetings: Vec::new(),
            current_meeting_id: None,
            current_recording_start: None,
            recording_paused: false,
            storage_used_mb: 0.0,
            storage_total_mb: DEFAULT_STORAGE_TOTAL_MB,
            error: None,
            confirm_action: None,
            loading: true,
        }
    }
}

impl AppState {
    pub fn current_screen(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn available_mb(&self) -> f64 {
        self.storage_total_mb - self.storage_used_mb
    }

    pub fn find_meeting(&self, id: &str) -> Option<&Meeting> {
        self.meetings.iter().find(|m| m.id == id)
    }

    pub fn current_meeting(&self) -> Option<&Meeting> {
        self.current_meeting_id
            .as_deref()
            .and_then(|id| self.find_meeting(id))
    }

    pub fn has_processing_meetings(&self) -> bool {
        self.meetings.iter().any(Meeting::is_processing)
    }
}

/// Shared view of [`AppState`]. Only the state machine writes through it;
/// front-ends and tests subscribe to observe every update.
#[derive(Clone)]
pub struct StateHandle {
    inner: Arc<watch::Sender<AppState>>,
}

impl Default for StateHandle {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl StateHandle {
    pub fn new(state: AppState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { inner: Arc::new(tx) }
    }

    /// Snapshot of the current state.
    pub fn get(&self) -> AppState {
        self.inner.borrow().clone()
    }

    /// Read a projection of the current state without cloning all of it.
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.inner.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.inner.subscribe()
    }

    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut result = None;
        self.inner.send_modify(|state| result = Some(f(state)));
        match result {
            Some(result) => result,
            None => unreachable!("send_modify always runs the closure"),
        }
    }
}
