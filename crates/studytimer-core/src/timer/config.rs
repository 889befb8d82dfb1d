use serde::{Deserialize, Serialize};

use super::mode::Mode;
use crate::error::ConfigError;

pub const DEFAULT_FOCUS_MIN: u32 = 25;
pub const DEFAULT_SHORT_BREAK_MIN: u32 = 5;
pub const DEFAULT_LONG_BREAK_MIN: u32 = 15;
pub const DEFAULT_LONG_BREAK_INTERVAL: u32 = 4;

/// Validated interval durations, in minutes.
///
/// Construct with [`TimerConfig::new`]; every duration and the long break
/// interval are guaranteed to be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimerConfig")]
pub struct TimerConfig {
    focus_min: u32,
    short_break_min: u32,
    long_break_min: u32,
    long_break_interval: u32,
}

#[derive(Deserialize)]
struct RawTimerConfig {
    focus_min: u32,
    short_break_min: u32,
    long_break_min: u32,
    #[serde(default = "default_interval")]
    long_break_interval: u32,
}

fn default_interval() -> u32 {
    DEFAULT_LONG_BREAK_INTERVAL
}

impl TryFrom<RawTimerConfig> for TimerConfig {
    type Error = ConfigError;

    fn try_from(raw: RawTimerConfig) -> Result<Self, Self::Error> {
        Self::new(raw.focus_min, raw.short_break_min, raw.long_break_min)?
            .with_long_break_interval(raw.long_break_interval)
    }
}

impl TimerConfig {
    /// Build a config from the three durations.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if any duration is zero.
    pub fn new(
        focus_min: u32,
        short_break_min: u32,
        long_break_min: u32,
    ) -> Result<Self, ConfigError> {
        check_positive("focus_min", focus_min)?;
        check_positive("short_break_min", short_break_min)?;
        check_positive("long_break_min", long_break_min)?;
        Ok(Self {
            focus_min,
            short_break_min,
            long_break_min,
            long_break_interval: DEFAULT_LONG_BREAK_INTERVAL,
        })
    }

    /// Override how many Focus sessions precede a long break.
    pub fn with_long_break_interval(mut self, interval: u32) -> Result<Self, ConfigError> {
        check_positive("long_break_interval", interval)?;
        self.long_break_interval = interval;
        Ok(self)
    }

    pub fn minutes(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus_min,
            Mode::ShortBreak => self.short_break_min,
            Mode::LongBreak => self.long_break_min,
        }
    }

    /// Full session length for `mode`, in seconds.
    pub fn duration_secs(&self, mode: Mode) -> u64 {
        u64::from(self.minutes(mode)).saturating_mul(60)
    }

    pub fn long_break_interval(&self) -> u32 {
        self.long_break_interval
    }

    /// Break that follows the `completed`-th Focus session.
    pub fn break_after(&self, completed: u64) -> Mode {
        if completed % u64::from(self.long_break_interval) == 0 {
            Mode::LongBreak
        } else {
            Mode::ShortBreak
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_min: DEFAULT_FOCUS_MIN,
            short_break_min: DEFAULT_SHORT_BREAK_MIN,
            long_break_min: DEFAULT_LONG_BREAK_MIN,
            long_break_interval: DEFAULT_LONG_BREAK_INTERVAL,
        }
    }
}

fn check_positive(key: &str, value: u32) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}
