use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Mode;

/// Every state change in the timer produces an Event.
/// Consumers either subscribe to the stream or poll a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// One second elapsed while running.
    Tick {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A session ran down to zero. `mode` is the mode that just finished.
    SessionCompleted {
        mode: Mode,
        completed_focus_sessions: u64,
        at: DateTime<Utc>,
    },
    ModeChanged {
        from: Mode,
        to: Mode,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: Mode,
        remaining_secs: u64,
        total_secs: u64,
        running: bool,
        completed_focus_sessions: u64,
        /// 0.0 .. 1.0 within the current session.
        progress: f64,
        at: DateTime<Utc>,
    },
}
