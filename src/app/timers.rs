//! Deadlines for the state machine's timer arms.

use std::time::Duration;

use tokio::time::Instant;

use crate::model::Meeting;
use crate::state::{AppState, ScreenKind};

/// Periodic meeting refresh while the past-meetings list shows a meeting
/// that is still processing. Re-armed whenever the screen or the meeting
/// list changes, disarmed as soon as the condition stops holding.
#[derive(Debug)]
pub struct PollSchedule {
    interval: Duration,
    deadline: Option<Instant>,
    watched: Option<(ScreenKind, Vec<Meeting>)>,
}

impl PollSchedule {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
            watched: None,
        }
    }

    fn should_poll(state: &AppState) -> bool {
        state.current_screen() == ScreenKind::PastMeetings && state.has_processing_meetings()
    }

    /// Bring the schedule in line with the latest state.
    pub fn sync(&mut self, state: &AppState) {
        if !Self::should_poll(state) {
            self.deadline = None;
            self.watched = None;
            return;
        }

        let changed = match &self.watched {
            Some((screen, meetings)) => {
                *screen != state.current_screen() || *meetings != state.meetings
            }
            None => true,
        };
        if changed || self.deadline.is_none() {
            self.deadline = Some(Instant::now() + self.interval);
            self.watched = Some((state.current_screen(), state.meetings.clone()));
        }
    }

    /// Mark the current deadline as consumed; the next `sync` re-arms it.
    pub fn fired(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

/// Repeating tick for screens that animate on a timer. Restarts whenever
/// the ticking screen changes.
#[derive(Debug)]
pub struct ScreenTicker {
    recording: Duration,
    progress: Duration,
    deadline: Option<Instant>,
    screen: Option<ScreenKind>,
}

impl ScreenTicker {
    pub fn new(recording: Duration, progress: Duration) -> Self {
        Self {
            recording,
            progress,
            deadline: None,
            screen: None,
        }
    }

    fn period(&self, screen: ScreenKind) -> Option<Duration> {
        match screen {
            ScreenKind::Recording => Some(self.recording),
            ScreenKind::EmailProgress => Some(self.progress),
            _ => None,
        }
    }

    pub fn sync(&mut self, state: &AppState) {
        let screen = state.current_screen();
        let Some(period) = self.period(screen) else {
            self.deadline = None;
            self.screen = None;
            return;
        };

        if self.screen != Some(screen) || self.deadline.is_none() {
            self.deadline = Some(Instant::now() + period);
            self.screen = Some(screen);
        }
    }

    pub fn fired(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

/// Sleep until `deadline`, or forever when there is none.
pub async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
