//! Live recording screen.

use super::{Action, View};
use crate::app::Intent;
use crate::format;
use crate::state::{AppState, RecordingClock};

pub fn render(state: &AppState, clock: &RecordingClock) -> View {
    let paused = state.recording_paused;

    let view = View::new(if paused { "PAUSED" } else { "RECORDING" })
        .line(format!("Recording Duration: {}", format::timer(clock.elapsed)))
        .line(if paused {
            "Recording paused. Press Resume to continue."
        } else {
            "Capturing audio and transcribing in real-time..."
        })
        .line("Tip: place device near speakers for best audio quality")
        .live()
        .action(Action::new("Stop Recording", Intent::StopRecording));

    if paused {
        view.action(Action::new("Resume", Intent::ResumeRecording))
    } else {
        view.action(Action::new("Pause", Intent::PauseRecording))
    }
}
