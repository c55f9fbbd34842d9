//! Progress screen while meeting notes are emailed.

use super::View;
use crate::state::ExportProgress;

pub fn render(progress: &ExportProgress) -> View {
    let (title, detail) = if progress.complete {
        ("Notes Sent!", "Meeting notes have been sent to your email")
    } else {
        ("Sending Email...", "Generating PDF and sending via email")
    };

    let filled = usize::from(progress.percent) / 5;
    let bar = format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled.min(20)));

    View::new(title)
        .line(detail)
        .line(format!("{} {}%", bar, progress.percent))
}
