use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Phase of the Pomodoro cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Focus, Mode::ShortBreak, Mode::LongBreak];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Focus => "Focus",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = ValidationError;

    /// Accepts the serialized name plus the short aliases used by the CLI.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "focus" | "f" | "work" => Ok(Mode::Focus),
            "short_break" | "short-break" | "short" | "s" => Ok(Mode::ShortBreak),
            "long_break" | "long-break" | "long" | "l" => Ok(Mode::LongBreak),
            _ => Err(ValidationError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("focus".parse::<Mode>().unwrap(), Mode::Focus);
        assert_eq!("Short-Break".parse::<Mode>().unwrap(), Mode::ShortBreak);
        assert_eq!(" l ".parse::<Mode>().unwrap(), Mode::LongBreak);
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "nap".parse::<Mode>().unwrap_err();
        assert!(matches!(err, ValidationError::UnknownMode(ref m) if m == "nap"));
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Mode::ShortBreak).unwrap(), "\"short_break\"");
        let parsed: Mode = serde_json::from_str("\"long_break\"").unwrap();
        assert_eq!(parsed, Mode::LongBreak);
    }
}
