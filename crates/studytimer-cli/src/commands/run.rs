//! Interactive timer session driven by line commands on stdin.

use std::str::FromStr;
use std::time::Duration;

use clap::Args;
use studytimer_core::{Config, ConfigError, Mode, TimerConfig, TimerDriver};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use crate::display::Printer;

const HELP: &str = "commands: <enter>/t toggle | start | pause | r reset | f/s/l switch to focus/short/long | ? status | q quit";

#[derive(Args)]
pub struct RunArgs {
    /// Focus length in minutes (overrides config)
    #[arg(long)]
    pub focus: Option<u32>,
    /// Short break length in minutes (overrides config)
    #[arg(long)]
    pub short_break: Option<u32>,
    /// Long break length in minutes (overrides config)
    #[arg(long)]
    pub long_break: Option<u32>,
    /// Print events as JSON lines
    #[arg(long)]
    pub json: bool,
}

/// One line typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Toggle,
    Start,
    Pause,
    Reset,
    Switch(Mode),
    Status,
    Help,
    Quit,
}

impl FromStr for Input {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "t" | "toggle" => Ok(Input::Toggle),
            "start" => Ok(Input::Start),
            "pause" => Ok(Input::Pause),
            "r" | "reset" => Ok(Input::Reset),
            "?" | "status" => Ok(Input::Status),
            "h" | "help" => Ok(Input::Help),
            "q" | "quit" | "exit" => Ok(Input::Quit),
            other => other
                .parse::<Mode>()
                .map(Input::Switch)
                .map_err(|_| format!("unknown command '{}' ({HELP})", s.trim())),
        }
    }
}

/// Merge command-line overrides into the file config and validate.
pub fn resolve_config(args: &RunArgs, config: &Config) -> Result<TimerConfig, ConfigError> {
    let mut config = config.clone();
    if let Some(focus) = args.focus {
        config.timer.focus_duration = focus;
    }
    if let Some(short_break) = args.short_break {
        config.timer.short_break = short_break;
    }
    if let Some(long_break) = args.long_break {
        config.timer.long_break = long_break;
    }
    config.timer_config()
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let timer_config = resolve_config(&args, &config)?;
    let printer = Printer::new(args.json, config.display.show_ticks);

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(session(timer_config, printer));
    // Stdin reads run on a blocking thread that may never return.
    runtime.shutdown_timeout(Duration::from_millis(100));
    result
}

async fn session(config: TimerConfig, printer: Printer) -> Result<(), Box<dyn std::error::Error>> {
    let mut driver = TimerDriver::new(config);
    let mut events = driver.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!(?config, "session timer ready");
    printer.print(&driver.snapshot().await)?;
    if !printer.is_json() {
        eprintln!("{HELP}");
    }

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match line.parse::<Input>() {
                    Ok(Input::Quit) => break,
                    Ok(Input::Toggle) => {
                        driver.toggle().await;
                    }
                    Ok(Input::Start) => {
                        driver.start().await;
                    }
                    Ok(Input::Pause) => {
                        driver.pause().await;
                    }
                    Ok(Input::Reset) => {
                        driver.reset().await;
                    }
                    Ok(Input::Switch(mode)) => {
                        driver.switch_mode(mode).await;
                    }
                    Ok(Input::Status) => printer.print(&driver.snapshot().await)?,
                    Ok(Input::Help) => eprintln!("{HELP}"),
                    Err(message) => eprintln!("{message}"),
                }
            }
            event = events.recv() => match event {
                Ok(event) => printer.print(&event)?,
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "display fell behind"),
                Err(RecvError::Closed) => break,
            },
        }
    }

    let state = driver.shutdown().await;
    while let Ok(event) = events.try_recv() {
        printer.print(&event)?;
    }
    info!(
        completed_focus_sessions = state.completed_focus_sessions(),
        "session timer stopped"
    );
    Ok(())
}
