//! Timer engine implementation.
//!
//! The engine is a synchronous state machine over [`TimerState`]. It does not
//! own a clock: the caller (normally [`super::TimerDriver`]) invokes `tick()`
//! once per elapsed second while the timer is running.
//!
//! ## State Transitions
//!
//! ```text
//! Focus --(n % interval != 0)--> ShortBreak --> Focus
//! Focus --(n % interval == 0)--> LongBreak  --> Focus
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(TimerConfig::default());
//! engine.toggle();
//! // Once per second:
//! let events = engine.tick(); // Contains SessionCompleted + ModeChanged at zero
//! ```

use chrono::Utc;
use tracing::{debug, info};

use super::config::TimerConfig;
use super::mode::Mode;
use super::state::TimerState;
use crate::events::Event;

/// Core timer engine.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    config: TimerConfig,
    state: TimerState,
}

impl TimerEngine {
    /// Create an engine in Focus, stopped, at the full Focus duration.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            state: TimerState::new(&config),
            config,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn remaining_secs(&self) -> u64 {
        self.state.remaining_secs()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn completed_focus_sessions(&self) -> u64 {
        self.state.completed_focus_sessions()
    }

    pub fn total_secs(&self) -> u64 {
        self.config.duration_secs(self.state.mode())
    }

    /// 0.0 .. 1.0 progress within the current session.
    pub fn progress(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_secs() as f64 / total as f64)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            mode: self.mode(),
            remaining_secs: self.remaining_secs(),
            total_secs: self.total_secs(),
            running: self.is_running(),
            completed_focus_sessions: self.completed_focus_sessions(),
            progress: self.progress(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start or pause.
    ///
    /// Starting with nothing left on the clock completes the session
    /// immediately instead of waiting for another tick.
    pub fn toggle(&mut self) -> Vec<Event> {
        if self.state.is_running() {
            self.state = self.state.with_running(false);
            debug!(mode = ?self.mode(), remaining = self.remaining_secs(), "timer paused");
            return vec![Event::TimerPaused {
                mode: self.mode(),
                remaining_secs: self.remaining_secs(),
                at: Utc::now(),
            }];
        }

        if self.state.remaining_secs() == 0 {
            debug!(mode = ?self.mode(), "start requested with empty clock");
            return self.complete();
        }

        self.state = self.state.with_running(true);
        debug!(mode = ?self.mode(), remaining = self.remaining_secs(), "timer started");
        vec![Event::TimerStarted {
            mode: self.mode(),
            remaining_secs: self.remaining_secs(),
            at: Utc::now(),
        }]
    }

    pub fn reset(&mut self) -> Event {
        self.state = self.state.reset(&self.config);
        debug!(mode = ?self.mode(), "timer reset");
        Event::TimerReset {
            mode: self.mode(),
            remaining_secs: self.remaining_secs(),
            at: Utc::now(),
        }
    }

    pub fn switch_mode(&mut self, target: Mode) -> Event {
        let from = self.mode();
        self.state = self.state.switch_mode(&self.config, target);
        debug!(?from, to = ?target, "mode switched");
        Event::ModeChanged {
            from,
            to: target,
            duration_secs: self.remaining_secs(),
            at: Utc::now(),
        }
    }

    /// Apply one elapsed second. No-op unless running.
    ///
    /// Returns a `Tick` event, followed by `SessionCompleted` and
    /// `ModeChanged` when the session reaches zero.
    pub fn tick(&mut self) -> Vec<Event> {
        if !self.state.is_running() {
            return Vec::new();
        }
        let mode = self.mode();
        let remaining_secs = self.remaining_secs().saturating_sub(1);
        let (next, completed) = self.state.tick(&self.config);
        let mut events = vec![Event::Tick {
            mode,
            remaining_secs,
            at: Utc::now(),
        }];
        if completed {
            events.extend(self.record_completion(mode, next));
        } else {
            self.state = next;
        }
        events
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn complete(&mut self) -> Vec<Event> {
        let mode = self.mode();
        let next = self.state.complete(&self.config);
        self.record_completion(mode, next)
    }

    fn record_completion(&mut self, finished: Mode, next: TimerState) -> Vec<Event> {
        self.state = next;
        let now = Utc::now();
        info!(
            finished = ?finished,
            next = ?next.mode(),
            completed_focus_sessions = next.completed_focus_sessions(),
            "session completed"
        );
        vec![
            Event::SessionCompleted {
                mode: finished,
                completed_focus_sessions: next.completed_focus_sessions(),
                at: now,
            },
            Event::ModeChanged {
                from: finished,
                to: next.mode(),
                duration_secs: next.remaining_secs(),
                at: now,
            },
        ]
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}
