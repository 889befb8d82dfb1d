//! Timer state record and its pure transitions.
//!
//! Every transition takes the current state plus the [`TimerConfig`] and
//! returns the next state, so the cycle can be exercised without a clock.

use serde::Serialize;

use super::config::TimerConfig;
use super::mode::Mode;

/// Snapshot of the countdown.
///
/// Invariant: `remaining_secs <= config.duration_secs(mode)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerState {
    pub(crate) mode: Mode,
    pub(crate) remaining_secs: u64,
    pub(crate) running: bool,
    pub(crate) completed_focus_sessions: u64,
}

impl TimerState {
    /// Initial state: Focus at full length, stopped, nothing completed.
    pub fn new(config: &TimerConfig) -> Self {
        Self {
            mode: Mode::Focus,
            remaining_secs: config.duration_secs(Mode::Focus),
            running: false,
            completed_focus_sessions: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn completed_focus_sessions(&self) -> u64 {
        self.completed_focus_sessions
    }

    pub fn with_running(self, running: bool) -> Self {
        Self { running, ..self }
    }

    /// Stop and refill the current mode. Mode and counter are kept.
    pub fn reset(self, config: &TimerConfig) -> Self {
        Self {
            running: false,
            remaining_secs: config.duration_secs(self.mode),
            ..self
        }
    }

    /// Stop and load `target` at full length. Counter is kept.
    pub fn switch_mode(self, config: &TimerConfig, target: Mode) -> Self {
        Self {
            mode: target,
            running: false,
            remaining_secs: config.duration_secs(target),
            completed_focus_sessions: self.completed_focus_sessions,
        }
    }

    /// Close the current session and move to the next mode.
    ///
    /// Focus bumps the counter and picks the break from the post-increment
    /// count; breaks always return to Focus. The result is never running.
    pub fn complete(self, config: &TimerConfig) -> Self {
        match self.mode {
            Mode::Focus => {
                let completed = self.completed_focus_sessions.saturating_add(1);
                Self {
                    completed_focus_sessions: completed,
                    ..self
                }
                .switch_mode(config, config.break_after(completed))
            }
            Mode::ShortBreak | Mode::LongBreak => self.switch_mode(config, Mode::Focus),
        }
    }

    /// Apply one elapsed second.
    ///
    /// Returns the new state and whether the session finished. A stopped
    /// state is returned unchanged.
    pub fn tick(self, config: &TimerConfig) -> (Self, bool) {
        if !self.running {
            return (self, false);
        }
        let remaining_secs = self.remaining_secs.saturating_sub(1);
        if remaining_secs == 0 {
            return (self.complete(config), true);
        }
        (
            Self {
                remaining_secs,
                ..self
            },
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(mut state: TimerState, cfg: &TimerConfig) -> TimerState {
        state = state.with_running(true);
        loop {
            let (next, done) = state.tick(cfg);
            state = next;
            if done {
                return state;
            }
        }
    }

    #[test]
    fn initial_state() {
        let cfg = TimerConfig::default();
        let s = TimerState::new(&cfg);
        assert_eq!(s.mode(), Mode::Focus);
        assert_eq!(s.remaining_secs(), 1500);
        assert!(!s.is_running());
        assert_eq!(s.completed_focus_sessions(), 0);
    }

    #[test]
    fn tick_is_noop_when_stopped() {
        let cfg = TimerConfig::default();
        let s = TimerState::new(&cfg);
        assert_eq!(s.tick(&cfg), (s, false));
    }

    #[test]
    fn focus_completion_goes_to_short_break() {
        let cfg = TimerConfig::default();
        let s = run_session(TimerState::new(&cfg), &cfg);
        assert_eq!(s.mode(), Mode::ShortBreak);
        assert_eq!(s.remaining_secs(), 300);
        assert_eq!(s.completed_focus_sessions(), 1);
        assert!(!s.is_running());
    }

    #[test]
    fn fourth_focus_goes_to_long_break() {
        let cfg = TimerConfig::default();
        let s = TimerState {
            completed_focus_sessions: 3,
            ..TimerState::new(&cfg)
        };
        let s = s.complete(&cfg);
        assert_eq!(s.mode(), Mode::LongBreak);
        assert_eq!(s.remaining_secs(), 900);
        assert_eq!(s.completed_focus_sessions(), 4);
    }

    #[test]
    fn breaks_return_to_focus_without_counting() {
        let cfg = TimerConfig::default();
        for mode in [Mode::ShortBreak, Mode::LongBreak] {
            let s = TimerState::new(&cfg).switch_mode(&cfg, mode).complete(&cfg);
            assert_eq!(s.mode(), Mode::Focus);
            assert_eq!(s.remaining_secs(), 1500);
            assert_eq!(s.completed_focus_sessions(), 0);
        }
    }

    #[test]
    fn custom_interval_changes_cadence() {
        let cfg = TimerConfig::default().with_long_break_interval(2).unwrap();
        let s = TimerState::new(&cfg).complete(&cfg);
        assert_eq!(s.mode(), Mode::ShortBreak);
        let s = s.complete(&cfg).complete(&cfg);
        assert_eq!(s.mode(), Mode::LongBreak);
        assert_eq!(s.completed_focus_sessions(), 2);
    }

    #[test]
    fn tick_at_zero_completes_instead_of_stalling() {
        let cfg = TimerConfig::default();
        let s = TimerState {
            remaining_secs: 0,
            running: true,
            ..TimerState::new(&cfg)
        };
        let (next, done) = s.tick(&cfg);
        assert!(done);
        assert_eq!(next.mode(), Mode::ShortBreak);
        assert_eq!(next.remaining_secs(), 300);
        assert!(!next.is_running());
        assert_eq!(next.completed_focus_sessions(), 1);
    }

    #[test]
    fn reset_keeps_mode_and_counter() {
        let cfg = TimerConfig::default();
        let s = TimerState {
            mode: Mode::ShortBreak,
            remaining_secs: 12,
            running: true,
            completed_focus_sessions: 2,
        };
        let r = s.reset(&cfg);
        assert_eq!(r.mode(), Mode::ShortBreak);
        assert_eq!(r.remaining_secs(), 300);
        assert!(!r.is_running());
        assert_eq!(r.completed_focus_sessions(), 2);
        assert_eq!(r.reset(&cfg), r);
    }
}
