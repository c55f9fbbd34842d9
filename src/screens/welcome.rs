//! First onboarding screen.

use super::{Action, View};
use crate::app::Intent;

pub fn render() -> View {
    View::new("AI Note Taker")
        .subtitle("Record meetings, get notes in your inbox")
        .line("✓ AI-Generated Notes: summaries, action items, and key decisions")
        .line("✓ Privacy First: all processing happens locally on device")
        .action(Action::new("Get Started", Intent::GetStarted))
}
