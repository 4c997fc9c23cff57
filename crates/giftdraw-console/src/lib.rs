//! Colored console output for draw events.
//!
//! Provides a `tracing` layer that formats giftdraw events for a terminal.
//! Receivers are never part of any event, so nothing printed here can
//! spoil a draw.
//!
//! ## Log Levels
//!
//! - **INFO**: Draw lifecycle and token redemption
//! - **DEBUG**: One line per search attempt
//! - **TRACE**: Individual backtracks (ignored by this layer)

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_DIRECTIVE: &str = "giftdraw=info";

/// Installs the console layer as the global subscriber.
///
/// Safe to call multiple times - only the first call has effect. `RUST_LOG`
/// overrides the default `giftdraw=info` filter. If another subscriber is
/// already installed it is left in place.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .parse_lossy(std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_DIRECTIVE.into()));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(DrawConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats draw events with colors.
pub struct DrawConsoleLayer;

impl<S: Subscriber> Layer<S> for DrawConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("giftdraw") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    draw_id: Option<String>,
    reason: Option<String>,
    participant_count: Option<u64>,
    restriction_count: Option<u64>,
    attempts: Option<u64>,
    attempt: Option<u64>,
    assignments: Option<u64>,
    nodes: Option<u64>,
    backtracks: Option<u64>,
    duration_ms: Option<u64>,
    found: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "participant_count" => self.participant_count = Some(value),
            "restriction_count" => self.restriction_count = Some(value),
            "attempts" => self.attempts = Some(value),
            "attempt" => self.attempt = Some(value),
            "assignments" => self.assignments = Some(value),
            "nodes" => self.nodes = Some(value),
            "backtracks" => self.backtracks = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "found" {
            self.found = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "draw_id" => self.draw_id = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "draw_start" => format_draw_start(v),
        "search_end" => format_search_end(v),
        "draw_end" => format_draw_end(v),
        "draw_not_found" => format_draw_not_found(v),
        "draw_recorded" => format_draw_recorded(v),
        "token_consumed" => format_token_consumed(v),
        "token_refused" => format_token_refused(v),
        _ => String::new(),
    }
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn draw_id(v: &EventVisitor) -> &str {
    v.draw_id.as_deref().unwrap_or("?")
}

fn format_draw_start(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} Drawing │ {} participants │ {} restrictions",
        "▶".bright_green().bold(),
        count(v.participant_count).bright_yellow(),
        count(v.restriction_count).bright_yellow()
    );
    if let Some(attempts) = v.attempts.filter(|&n| n > 1) {
        output.push_str(&format!(" │ {} attempts", attempts.bright_yellow()));
    }
    output
}

fn format_search_end(v: &EventVisitor) -> String {
    let status = if v.found.unwrap_or(false) {
        "found".bright_green().to_string()
    } else {
        "no match".bright_red().to_string()
    };
    format!(
        "  {} Attempt {} │ {} nodes │ {} backtracks │ {} │ {}",
        "⚡".bright_cyan(),
        v.attempt.unwrap_or(1),
        count(v.nodes).white(),
        count(v.backtracks).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        status
    )
}

fn format_draw_end(v: &EventVisitor) -> String {
    format!(
        "{} Draw complete │ {} │ {} assignments",
        "■".bright_cyan().bold(),
        draw_id(v).bright_white().bold(),
        count(v.assignments).bright_yellow()
    )
}

fn format_draw_not_found(v: &EventVisitor) -> String {
    let detail = match v.reason.as_deref() {
        Some("budget_exhausted") => "search budget exhausted",
        _ => "no valid assignment exists",
    };
    format!(
        "{} No draw │ {}",
        "✗".bright_red().bold(),
        detail.bright_red()
    )
}

fn format_draw_recorded(v: &EventVisitor) -> String {
    format!(
        "{} Saved {} as the active draw",
        "●".bright_blue(),
        draw_id(v).bright_white()
    )
}

fn format_token_consumed(v: &EventVisitor) -> String {
    format!(
        "{} Token redeemed │ {}",
        "✓".bright_green(),
        draw_id(v).bright_black()
    )
}

fn format_token_refused(v: &EventVisitor) -> String {
    format!(
        "{} Token already used │ {}",
        "✗".yellow(),
        draw_id(v).bright_black()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
