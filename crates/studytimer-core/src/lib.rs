//! # studytimer core library
//!
//! Countdown engine behind the study site's Pomodoro timer. The CLI in
//! `studytimer-cli` is a thin terminal front-end over the same library.
//!
//! ## Architecture
//!
//! - **Timer Engine**: A synchronous state machine cycling Focus, Short Break
//!   and Long Break; the caller invokes `tick()` once per second
//! - **Timer Driver**: Owns the single tokio tick task and broadcasts events
//! - **Storage**: TOML-based configuration of the interval durations
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core timer state machine
//! - [`TimerDriver`]: Async tick scheduling and event fan-out
//! - [`Config`]: Application configuration management

pub mod timer;
pub mod storage;
pub mod events;
pub mod error;

pub use timer::{Mode, TimerConfig, TimerDriver, TimerEngine, TimerState};
pub use storage::Config;
pub use events::Event;
pub use error::{CoreError, ConfigError, ValidationError};
