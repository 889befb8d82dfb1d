//! Terminal rendering of timer events.

use studytimer_core::{Event, Mode};

/// Format whole seconds as `MM:SS`. Minutes are not capped at 59.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Turns events into output lines, either human-readable or JSON.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    json: bool,
    show_ticks: bool,
}

impl Printer {
    pub fn new(json: bool, show_ticks: bool) -> Self {
        Self { json, show_ticks }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Line for `event`, or `None` if it is filtered out.
    pub fn render(&self, event: &Event) -> Result<Option<String>, serde_json::Error> {
        if matches!(event, Event::Tick { .. }) && !self.show_ticks {
            return Ok(None);
        }
        if self.json {
            return serde_json::to_string(event).map(Some);
        }
        Ok(Some(render_human(event)))
    }

    pub fn print(&self, event: &Event) -> Result<(), serde_json::Error> {
        if let Some(line) = self.render(event)? {
            println!("{line}");
        }
        Ok(())
    }
}

fn render_human(event: &Event) -> String {
    match event {
        Event::TimerStarted { mode, remaining_secs, .. } => {
            format!("[started] {mode} {}", format_clock(*remaining_secs))
        }
        Event::TimerPaused { mode, remaining_secs, .. } => {
            format!("[paused] {mode} {}", format_clock(*remaining_secs))
        }
        Event::Tick { mode, remaining_secs, .. } => {
            format!("{mode} {}", format_clock(*remaining_secs))
        }
        Event::SessionCompleted {
            mode: Mode::Focus,
            completed_focus_sessions,
            ..
        } => format!("[done] Focus session #{completed_focus_sessions} complete"),
        Event::SessionCompleted { mode, .. } => format!("[done] {mode} over"),
        Event::ModeChanged { to, duration_secs, .. } => {
            format!("[next] {to} {} (toggle to start)", format_clock(*duration_secs))
        }
        Event::TimerReset { mode, remaining_secs, .. } => {
            format!("[reset] {mode} {}", format_clock(*remaining_secs))
        }
        Event::StateSnapshot {
            mode,
            remaining_secs,
            running,
            completed_focus_sessions,
            progress,
            ..
        } => format!(
            "{mode} {} {} | {completed_focus_sessions} focus sessions done | {:.0}%",
            format_clock(*remaining_secs),
            if *running { "running" } else { "stopped" },
            progress * 100.0
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn tick(remaining_secs: u64) -> Event {
        Event::Tick {
            mode: Mode::Focus,
            remaining_secs,
            at: Utc::now(),
        }
    }

    #[test]
    fn clock_formats_minutes_and_seconds() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(323), "05:23");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(7200), "120:00");
    }

    #[test]
    fn ticks_can_be_hidden() {
        let printer = Printer::new(false, false);
        assert_eq!(printer.render(&tick(10)).unwrap(), None);
    }

    #[test]
    fn human_tick_line() {
        let printer = Printer::new(false, true);
        assert_eq!(printer.render(&tick(1499)).unwrap().as_deref(), Some("Focus 24:59"));
    }

    #[test]
    fn json_lines_carry_type_tag() {
        let printer = Printer::new(true, true);
        let line = printer.render(&tick(59)).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["type"], "tick");
        assert_eq!(value["remaining_secs"], 59);
    }

    #[test]
    fn mode_change_prompts_for_start() {
        let printer = Printer::new(false, true);
        let event = Event::ModeChanged {
            from: Mode::Focus,
            to: Mode::LongBreak,
            duration_secs: 900,
            at: Utc::now(),
        };
        assert_eq!(
            printer.render(&event).unwrap().as_deref(),
            Some("[next] Long Break 15:00 (toggle to start)")
        );
    }

    #[test]
    fn focus_completion_shows_count() {
        let printer = Printer::new(false, true);
        let event = Event::SessionCompleted {
            mode: Mode::Focus,
            completed_focus_sessions: 3,
            at: Utc::now(),
        };
        assert_eq!(
            printer.render(&event).unwrap().as_deref(),
            Some("[done] Focus session #3 complete")
        );
    }
}
