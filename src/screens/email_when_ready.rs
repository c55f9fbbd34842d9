//! Acknowledgement after a recording is handed off for processing.

use super::{Action, View};
use crate::app::Intent;

pub fn render() -> View {
    View::new("Processing your meeting")
        .line("We'll email it to you once it's ready.")
        .action(Action::new("Got it", Intent::GotIt))
}
