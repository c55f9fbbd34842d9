//! Export view for a single meeting.

use super::{Action, View};
use crate::app::Intent;
use crate::format;
use crate::model::Meeting;

pub fn render(meeting: Option<&Meeting>) -> View {
    let Some(meeting) = meeting else {
        return View::new("Export Meeting")
            .line("Meeting not found")
            .action(Action::new("Back", Intent::Back));
    };

    let mut view = View::new("Export Meeting")
        .line(format!(
            "Filename: {}.pdf",
            meeting.display_title().unwrap_or("Meeting")
        ))
        .line(format!("Length: {}", format::detail_duration(meeting.duration)))
        .line(format!("Size: {}", format::megabytes(meeting.total_size_mb())));

    if !meeting.emailed {
        view = view.action(Action::new(
            "Send as Email",
            Intent::EmailMeeting(meeting.id.clone()),
        ));
    } else if let Some(at) = meeting.emailed_at.as_deref() {
        view = view.line(format!("Delivered via email on {}", format::absolute_date(at)));
    }

    view.action(Action::new(
        "Delete Meeting",
        Intent::DeleteMeeting(meeting.id.clone()),
    ))
    .action(Action::new("Back", Intent::Back))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meeting() -> Meeting {
        Meeting {
            id: "m1".to_string(),
            created_at: "2026-10-19T09:00:00".to_string(),
            duration: 125,
            title: Some("Weekly Sync".to_string()),
            audio_size: 10.0,
            transcript_size: 0.3,
            pdf_size: 0.5,
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_meeting() {
        let view = render(None);
        assert_eq!(view.lines, vec!["Meeting not found".to_string()]);
    }

    #[test]
    fn test_details_lines() {
        let view = render(Some(&meeting()));
        assert_eq!(view.lines[0], "Filename: Weekly Sync.pdf");
        assert_eq!(view.lines[1], "Length: 2 min 5 sec");
        assert_eq!(view.lines[2], "Size: 10.8 MB");
        assert_eq!(view.actions[0].intent, Intent::EmailMeeting("m1".to_string()));
    }

    #[test]
    fn test_emailed_meeting_hides_send() {
        let mut m = meeting();
        m.emailed = true;
        m.emailed_at = Some("2026-10-19T10:30:00".to_string());
        let view = render(Some(&m));
        assert!(view
            .actions
            .iter()
            .all(|a| !matches!(a.intent, Intent::EmailMeeting(_))));
        assert_eq!(view.lines[3], "Delivered via email on Oct 19, 2026, 10:30 AM");
    }
}
