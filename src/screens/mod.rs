//! Screen renderers.
//!
//! Each screen is a pure function of [`AppState`] into a [`View`]: text to
//! show plus the actions (bound to [`Intent`]s) the user can take. Front-ends
//! only draw views and send intents back.

pub mod email;
pub mod email_when_ready;
pub mod export_progress;
pub mod home;
pub mod meeting_details;
pub mod modal;
pub mod past_meetings;
pub mod processing;
pub mod recording;
pub mod settings;
pub mod welcome;
pub mod wifi;

use chrono::{DateTime, Local};

use crate::app::Intent;
use crate::keyboard::{Key, OnScreenKeyboard};
use crate::state::{AppState, Screen};

pub use modal::Modal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub label: String,
    pub intent: Intent,
    pub enabled: bool,
}

impl Action {
    pub fn new(label: impl Into<String>, intent: Intent) -> Self {
        Self {
            label: label.into(),
            intent,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCap {
    pub label: String,
    pub key: Key,
}

/// Renderable snapshot of an on-screen keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardView {
    pub display: String,
    pub masked: bool,
    pub rows: Vec<Vec<KeyCap>>,
    pub submit_label: String,
    pub submit_enabled: bool,
}

impl KeyboardView {
    pub fn new(keyboard: &OnScreenKeyboard, submit_label: &str, submit_disabled: bool) -> Self {
        let rows = keyboard
            .rows()
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|key| KeyCap {
                        label: keyboard.key_label(key),
                        key,
                    })
                    .collect()
            })
            .collect();

        Self {
            display: keyboard.display(),
            masked: keyboard.is_masked(),
            rows,
            submit_label: submit_label.to_string(),
            submit_enabled: keyboard.submit_enabled(submit_disabled),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub title: String,
    pub subtitle: Option<String>,
    pub lines: Vec<String>,
    pub keyboard: Option<KeyboardView>,
    pub actions: Vec<Action>,
    pub modal: Option<Modal>,
    /// Lines change on their own, without any user action.
    pub live: bool,
}

impl View {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn keyboard(mut self, keyboard: KeyboardView) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    pub fn live(mut self) -> Self {
        self.live = true;
        self
    }

    /// Whether the view should keep redrawing while the user has not picked
    /// an action yet.
    pub fn is_live(&self) -> bool {
        self.live && self.modal.is_none()
    }

    /// Actions the user can currently take; a modal hides the screen's own.
    pub fn available_actions(&self) -> Vec<&Action> {
        let actions = match &self.modal {
            Some(modal) => &modal.actions,
            None => &self.actions,
        };
        actions.iter().filter(|a| a.enabled).collect()
    }

    /// Whether the view waits on the state machine with nothing to press.
    pub fn is_passive(&self) -> bool {
        self.available_actions().is_empty()
            && (self.modal.is_some() || self.keyboard.is_none())
    }
}

/// Render the full view for the current state, modal included.
pub fn render(state: &AppState, now: DateTime<Local>) -> View {
    if state.loading {
        return View::new("Loading...");
    }

    let mut view = match &state.screen {
        Screen::SetupWelcome => welcome::render(),
        Screen::SetupWifi(wizard) => wifi::render(wizard, wifi::WifiContext::Setup),
        Screen::SetupEmail(wizard) => email::render(wizard),
        Screen::Home => home::render(state),
        Screen::Recording(clock) => recording::render(state, clock),
        Screen::Processing => processing::render(),
        Screen::EmailWhenReady => email_when_ready::render(),
        Screen::PastMeetings => past_meetings::render(state, now),
        Screen::MeetingDetails => meeting_details::render(state.current_meeting()),
        Screen::Settings(pane) => settings::render(state, pane),
        Screen::EmailProgress(progress) => export_progress::render(progress),
    };

    view.modal = modal::for_state(state);
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfirmAction;
    use crate::state::PendingAction;

    fn ready_state(screen: Screen) -> AppState {
        AppState {
            screen,
            loading: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_loading_view() {
        let view = render(&AppState::default(), Local::now());
        assert_eq!(view.title, "Loading...");
        assert!(view.is_passive());
    }

    #[test]
    fn test_modal_takes_over_actions() {
        let mut state = ready_state(Screen::Home);
        state.error = Some("Storage full.".to_string());

        let view = render(&state, Local::now());
        let actions = view.available_actions();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].intent, Intent::DismissError);
    }

    #[test]
    fn test_confirm_modal_actions() {
        let mut state = ready_state(Screen::MeetingDetails);
        state.confirm_action = Some(ConfirmAction {
            message: "Delete?".to_string(),
            action: PendingAction::DeleteMeeting("m1".to_string()),
        });

        let view = render(&state, Local::now());
        let intents: Vec<_> = view.available_actions().iter().map(|a| a.intent.clone()).collect();
        assert_eq!(intents, vec![Intent::Cancel, Intent::Confirm]);
    }

    #[test]
    fn test_low_storage_modal_stops_live_redraw() {
        let mut state = ready_state(Screen::Recording(Default::default()));
        assert!(render(&state, Local::now()).is_live());

        state.error = Some("Storage is running low.".to_string());
        let view = render(&state, Local::now());
        assert!(!view.is_live());
        assert_eq!(view.available_actions()[0].intent, Intent::DismissError);
    }

    #[test]
    fn test_processing_is_passive() {
        let view = render(&ready_state(Screen::Processing), Local::now());
        assert!(view.is_passive());
    }

    #[test]
    fn test_keyboard_view_reflects_submit_rule() {
        let mut kb = OnScreenKeyboard::numeric(4);
        kb.type_text("12");
        let view = KeyboardView::new(&kb, "Verify", false);
        assert_eq!(view.display, "12··");
        assert!(!view.submit_enabled);
        assert_eq!(view.rows[3][0].label, "⌫");
    }
}
