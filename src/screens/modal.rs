//! Error and confirmation overlays.

use super::Action;
use crate::app::Intent;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub message: String,
    pub actions: Vec<Action>,
}

impl Modal {
    pub fn error(message: &str) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.to_string(),
            actions: vec![Action::new("Got It", Intent::DismissError)],
        }
    }

    pub fn confirm(message: &str) -> Self {
        Self {
            title: "Confirm Action".to_string(),
            message: message.to_string(),
            actions: vec![
                Action::new("Cancel", Intent::Cancel),
                Action::new("Confirm", Intent::Confirm),
            ],
        }
    }
}

/// Modal to draw over the current screen. An error wins over a pending
/// confirmation since the confirmation is still in flight when one is raised.
pub fn for_state(state: &AppState) -> Option<Modal> {
    if let Some(error) = &state.error {
        return Some(Modal::error(error));
    }
    state
        .confirm_action
        .as_ref()
        .map(|confirm| Modal::confirm(&confirm.message))
}
