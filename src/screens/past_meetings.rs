//! List of recorded meetings.

use chrono::{DateTime, Local};

use super::{Action, View};
use crate::app::Intent;
use crate::format;
use crate::state::AppState;

pub fn render(state: &AppState, now: DateTime<Local>) -> View {
    if !state.settings.email_verified {
        return View::new("Past Meetings")
            .line("Please set up email in Settings")
            .line("to export notes")
            .action(Action::new("Back", Intent::Back));
    }

    let mut view = View::new("Past Meetings")
        .subtitle(format!("{} recordings", state.meetings.len()))
        .line("Meeting notes are not retained on this device.");

    if state.meetings.is_empty() {
        view = view
            .line("No meetings yet")
            .line("Start recording to see your meetings here");
    }

    for meeting in &state.meetings {
        let title = if meeting.is_processing() {
            "Processing..."
        } else {
            meeting.display_title().unwrap_or("Untitled")
        };

        view = view.line(format!(
            "{} · {} · {}",
            title,
            format::relative_date(&meeting.created_at, now),
            format::list_duration(meeting.duration)
        ));

        if meeting.is_processing() {
            view = view.line("    Will be emailed when ready");
        } else if let (true, Some(at)) = (meeting.emailed, meeting.emailed_at.as_deref()) {
            view = view.line(format!("    Delivered via email on {}", format::absolute_date(at)));
        }
    }

    for meeting in state.meetings.iter().filter(|m| !m.is_processing()) {
        let label = format!(
            "Open {} ({})",
            meeting.display_title().unwrap_or("Untitled"),
            format::relative_date(&meeting.created_at, now)
        );
        view = view.action(Action::new(label, Intent::OpenMeeting(meeting.id.clone())));
    }

    view.action(Action::new("Back", Intent::Back))
}
