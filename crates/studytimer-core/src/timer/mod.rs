mod config;
mod driver;
mod engine;
mod mode;
mod state;

pub use config::{
    TimerConfig, DEFAULT_FOCUS_MIN, DEFAULT_LONG_BREAK_INTERVAL, DEFAULT_LONG_BREAK_MIN,
    DEFAULT_SHORT_BREAK_MIN,
};
pub use driver::TimerDriver;
pub use engine::TimerEngine;
pub use mode::Mode;
pub use state::TimerState;
