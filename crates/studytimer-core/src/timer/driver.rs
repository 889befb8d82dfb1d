//! Async owner of the one-second tick stream.
//!
//! [`TimerDriver`] wraps a [`TimerEngine`] behind a mutex and keeps at most one
//! recurring tick task alive. Every command first goes through
//! [`TimerDriver::halt_ticker`], which aborts the task and waits for it to
//! finish, so a tick can never interleave with a reset or a mode switch.
//! Events are fanned out on a broadcast channel.

use std::sync::Arc;

use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant};
use tracing::{debug, warn};

use super::config::TimerConfig;
use super::engine::TimerEngine;
use super::mode::Mode;
use super::state::TimerState;
use crate::events::Event;

const TICK_PERIOD: Duration = Duration::from_secs(1);
const EVENT_CAPACITY: usize = 1024;

/// Runs a [`TimerEngine`] in real time on the current tokio runtime.
pub struct TimerDriver {
    engine: Arc<Mutex<TimerEngine>>,
    events: broadcast::Sender<Event>,
    ticker: Option<JoinHandle<()>>,
}

impl TimerDriver {
    /// Create a stopped driver; no task is spawned until the first start.
    pub fn new(config: TimerConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            engine: Arc::new(Mutex::new(TimerEngine::new(config))),
            events,
            ticker: None,
        }
    }

    /// Receive every event produced from now on, ticks included.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    /// Copy of the current state, waiting for any in-flight tick.
    pub async fn state(&self) -> TimerState {
        self.engine.lock().await.state()
    }

    /// Polling alternative to [`TimerDriver::subscribe`].
    pub async fn snapshot(&self) -> Event {
        self.engine.lock().await.snapshot()
    }

    /// True while a tick task is registered and still alive.
    pub fn has_active_ticker(&self) -> bool {
        self.ticker.as_ref().is_some_and(|h| !h.is_finished())
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start or pause. Registers a fresh tick task only when this call
    /// leaves the timer running.
    pub async fn toggle(&mut self) -> Vec<Event> {
        self.halt_ticker().await;
        let (events, running) = {
            let mut engine = self.engine.lock().await;
            let events = engine.toggle();
            (events, engine.is_running())
        };
        self.publish(&events);
        if running {
            self.spawn_ticker();
        }
        events
    }

    /// Start if stopped. No-op while already running.
    pub async fn start(&mut self) -> Vec<Event> {
        // A stopped engine has no live tick task that could change it.
        if self.engine.lock().await.is_running() {
            return Vec::new();
        }
        self.toggle().await
    }

    /// Pause if running. No-op while stopped.
    pub async fn pause(&mut self) -> Vec<Event> {
        self.halt_ticker().await;
        let events = {
            let mut engine = self.engine.lock().await;
            if engine.is_running() {
                engine.toggle()
            } else {
                Vec::new()
            }
        };
        self.publish(&events);
        events
    }

    /// Stop and refill the current mode.
    pub async fn reset(&mut self) -> Event {
        self.halt_ticker().await;
        let event = self.engine.lock().await.reset();
        self.publish(std::slice::from_ref(&event));
        event
    }

    /// Stop and load `target` at its full duration.
    pub async fn switch_mode(&mut self, target: Mode) -> Event {
        self.halt_ticker().await;
        let event = self.engine.lock().await.switch_mode(target);
        self.publish(std::slice::from_ref(&event));
        event
    }

    /// Cancel the tick task and return the final state. The engine is not
    /// paused, so `running` reflects the moment of shutdown.
    pub async fn shutdown(mut self) -> TimerState {
        self.halt_ticker().await;
        self.state().await
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Cancel the registered tick task, if any, and wait until it is gone.
    async fn halt_ticker(&mut self) {
        let Some(handle) = self.ticker.take() else {
            return;
        };
        handle.abort();
        match handle.await {
            Ok(()) => debug!("tick task already finished"),
            Err(e) if e.is_cancelled() => debug!("tick task cancelled"),
            Err(e) => warn!(error = %e, "tick task failed"),
        }
    }

    fn spawn_ticker(&mut self) {
        debug_assert!(self.ticker.is_none(), "tick task already registered");
        let engine = Arc::clone(&self.engine);
        let events = self.events.clone();
        // Default burst behavior: a delayed task catches up one tick per
        // missed second.
        let mut ticker = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        self.ticker = Some(tokio::spawn(async move {
            loop {
                ticker.tick().await;
                let mut engine = engine.lock().await;
                for event in engine.tick() {
                    // No subscribers is fine.
                    let _ = events.send(event);
                }
                if !engine.is_running() {
                    debug!("session finished, tick task exiting");
                    break;
                }
            }
        }));
    }

    fn publish(&self, events: &[Event]) {
        for event in events {
            let _ = self.events.send(event.clone());
        }
    }
}

impl Drop for TimerDriver {
    fn drop(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }
}
